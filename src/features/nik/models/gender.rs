use serde::{Deserialize, Serialize};

use crate::shared::constants::GENDER_BIAS;

/// Sex encoded in the day-of-birth field of a NIK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// One entry of the gender enumeration, as exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderOption {
    pub key: i64,
    pub text: &'static str,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn key(self) -> i64 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Perempuan",
            Gender::Male => "Laki-Laki",
        }
    }

    pub fn from_key(key: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.key() == key)
    }

    /// Decode from the raw (possibly biased) day of birth.
    pub fn from_raw_day(raw_day: i64) -> Self {
        if is_female(raw_day) {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

pub fn list_gender() -> [GenderOption; 2] {
    Gender::ALL.map(|gender| GenderOption {
        key: gender.key(),
        text: gender.label(),
    })
}

/// Label for a gender key; unknown keys give `None`.
pub fn gender_by_key(key: i64) -> Option<&'static str> {
    Gender::from_key(key).map(Gender::label)
}

pub fn is_female(raw_day: i64) -> bool {
    raw_day >= GENDER_BIAS
}

pub fn is_male(raw_day: i64) -> bool {
    !is_female(raw_day)
}

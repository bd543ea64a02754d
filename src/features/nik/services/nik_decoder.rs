use chrono::NaiveDate;

use crate::features::nik::dtos::{FullRegionDto, ParsedNikDto, PostalCodeDto, RegionPartDto};
use crate::features::nik::models::{
    clean, is_female, leading_int, split_district, split_postal_code, substring, Gender, NikCode,
    RegionTable,
};
use crate::shared::constants::{BIRTH_DATE_FORMAT, GENDER_BIAS, NIK_LENGTH, SEQUENCE_LENGTH};
use crate::shared::validation::NIK_DIGITS_REGEX;

/// Century prefix for a two-digit birth year.
///
/// A year that would lie in the future as `20YY` is read as `19YY`. The
/// boundary moves with `current_year`, so `"26"` is 2026 in 2026 but `"27"`
/// is 1927 until 2027.
pub fn century_for(year: i64, current_year: i32) -> &'static str {
    if year + 2000 > i64::from(current_year) {
        "19"
    } else {
        "20"
    }
}

/// Read-only decoding of a single NIK.
///
/// Holds the normalized code, an optional region table and the year used for
/// century inference. Every accessor is a pure function of those three, so a
/// `Nik` can be copied freely and queried in any order.
///
/// ## Layout
///
/// ```text
/// 31 71 05 010199 0001
/// │  │  │  │      └── sequence number (last 4)
/// │  │  │  └───────── birth date DDMMYY, DD + 40 for women
/// │  │  └──────────── district
/// │  └─────────────── city/regency
/// └────────────────── province
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Nik<'a> {
    code: &'a NikCode,
    regions: Option<&'a RegionTable>,
    reference_year: i32,
}

impl<'a> Nik<'a> {
    pub fn new(code: &'a NikCode, regions: Option<&'a RegionTable>, reference_year: i32) -> Self {
        Self {
            code,
            regions,
            reference_year,
        }
    }

    pub fn code(&self) -> &'a str {
        self.code.as_str()
    }

    pub fn length(&self) -> usize {
        self.code.len()
    }

    /// Only the length is checked.
    pub fn is_valid(&self) -> bool {
        self.length() == NIK_LENGTH
    }

    /// Whether the code is exactly 16 ASCII digits. Not part of [`Nik::is_valid`].
    pub fn is_numeric(&self) -> bool {
        NIK_DIGITS_REGEX.is_match(self.code.as_str())
    }

    // ==================== Region Codes ====================

    pub fn region(&self) -> String {
        self.code.segment(0, 6)
    }

    pub fn province_code(&self) -> String {
        self.code.segment(0, 2)
    }

    pub fn province_city_code(&self) -> String {
        self.code.segment(0, 4)
    }

    pub fn city_code(&self) -> String {
        self.code.segment(2, 2)
    }

    pub fn district_code(&self) -> String {
        self.code.segment(4, 2)
    }

    // ==================== Birth Date & Gender ====================

    pub fn birth_date_with_gender(&self) -> String {
        self.code.segment(6, 6)
    }

    pub fn birth_day_with_gender(&self) -> String {
        self.code.segment(6, 2)
    }

    fn raw_birth_day(&self) -> i64 {
        leading_int(&self.birth_day_with_gender())
    }

    /// Day of month with the gender bias removed, zero-padded to two digits
    pub fn birth_day(&self) -> String {
        let mut day = self.raw_birth_day();
        if is_female(day) {
            day -= GENDER_BIAS;
        }
        format!("{:02}", day)
    }

    /// `DDMMYY` with the gender bias removed from the day
    pub fn birth_date(&self) -> String {
        format!("{}{}", self.birth_day(), self.code.segment(8, 4))
    }

    pub fn birth_month(&self) -> String {
        substring(&self.birth_date(), 2, 2)
    }

    pub fn birth_year(&self) -> String {
        substring(&self.birth_date(), 4, 2)
    }

    pub fn century(&self) -> &'static str {
        century_for(leading_int(&self.birth_year()), self.reference_year)
    }

    pub fn full_year(&self) -> String {
        format!("{}{}", self.century(), self.birth_year())
    }

    /// The encoded birth date, or `None` when it is not a real calendar day.
    pub fn birth_date_value(&self) -> Option<NaiveDate> {
        let day = self.birth_day().parse().ok()?;
        let month = self.birth_month().parse().ok()?;
        let year = self.full_year().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn gender_kind(&self) -> Gender {
        Gender::from_raw_day(self.raw_birth_day())
    }

    pub fn gender(&self) -> &'static str {
        self.gender_kind().label()
    }

    pub fn sequence_number(&self) -> String {
        self.code.tail(SEQUENCE_LENGTH)
    }

    // ==================== Formatting ====================

    /// `PP.CC.DD.DDMMYY.SSSS`, or an empty string when no code is set
    pub fn formatted_nik(&self) -> String {
        if self.code.is_empty() {
            return String::new();
        }

        [
            self.province_code(),
            self.city_code(),
            self.district_code(),
            self.birth_date_with_gender(),
            self.sequence_number(),
        ]
        .join(".")
    }

    pub fn formatted_number(&self) -> String {
        clean(self.code.as_str())
    }

    // ==================== Region Names ====================

    pub fn province(&self) -> Option<&'a str> {
        let code = leading_int(&self.province_code());
        self.regions?.province(code)
    }

    pub fn city(&self) -> Option<&'a str> {
        let code = leading_int(&self.province_city_code());
        self.regions?.city(code)
    }

    pub fn district_with_postal_code(&self) -> Option<&'a str> {
        let code = leading_int(&self.region());
        self.regions?.district_entry(code)
    }

    pub fn district(&self) -> Option<&'a str> {
        self.district_with_postal_code().and_then(split_district)
    }

    pub fn postal_code(&self) -> Option<&'a str> {
        self.district_with_postal_code().and_then(split_postal_code)
    }

    pub fn province_full(&self) -> RegionPartDto {
        RegionPartDto {
            code: self.province_code(),
            name: self.province().map(str::to_string),
        }
    }

    pub fn city_full(&self) -> RegionPartDto {
        RegionPartDto {
            code: self.province_city_code(),
            name: self.city().map(str::to_string),
        }
    }

    pub fn district_full(&self) -> RegionPartDto {
        RegionPartDto {
            code: self.region(),
            name: self.district().map(str::to_string),
        }
    }

    pub fn postal_code_full(&self) -> PostalCodeDto {
        PostalCodeDto {
            code: self.postal_code().map(str::to_string),
        }
    }

    pub fn full_region(&self) -> FullRegionDto {
        FullRegionDto {
            province: self.province_full(),
            city: self.city_full(),
            district: self.district_full(),
            postal_code: self.postal_code_full(),
        }
    }

    /// Snapshot of every decoded field.
    pub fn to_result(&self) -> ParsedNikDto {
        ParsedNikDto {
            valid: self.is_valid(),
            nik: self.code().to_string(),
            birth_date: self
                .birth_date_value()
                .map(|date| date.format(BIRTH_DATE_FORMAT).to_string()),
            birth_city: self.city().map(str::to_string),
            unique_code: self.sequence_number(),
            gender: self.gender().to_string(),
            region: self.full_region(),
        }
    }
}

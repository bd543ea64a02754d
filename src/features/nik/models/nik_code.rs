use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::validation::NIK_STRIP_REGEX;

/// A normalized NIK string.
///
/// Normalization trims the input and removes spaces and periods. Nothing else
/// is checked: the code may be short, long or contain letters, and every
/// offset-based accessor degrades to a truncated or empty substring.
/// Lengths and offsets count characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NikCode(String);

impl NikCode {
    pub fn new(raw: &str) -> Self {
        Self(clean(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Up to `len` characters starting at character `start`.
    pub fn segment(&self, start: usize, len: usize) -> String {
        substring(&self.0, start, len)
    }

    /// The last `len` characters, or the whole code when it is shorter.
    pub fn tail(&self, len: usize) -> String {
        let skip = self.len().saturating_sub(len);
        self.0.chars().skip(skip).collect()
    }
}

impl fmt::Display for NikCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NikCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NikCode {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<NikCode> for String {
    fn from(code: NikCode) -> Self {
        code.0
    }
}

/// Normalize a raw NIK: trim, then drop every space and period.
pub fn clean(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    NIK_STRIP_REGEX.replace_all(raw.trim(), "").into_owned()
}

pub(crate) fn substring(value: &str, start: usize, len: usize) -> String {
    value.chars().skip(start).take(len).collect()
}

/// Integer value of the leading digits of `value`.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and a string without leading digits is `0`. `"05"` is `5`,
/// `"4x"` is `4`, `"ab"` is `0`.
pub fn leading_int(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters removed from a NIK during normalization
    /// - "3175.09.123456.7890" -> "3175091234567890"
    /// - "3175 0912 3456 7890" -> "3175091234567890"
    pub static ref NIK_STRIP_REGEX: Regex = Regex::new(r"[ .]").unwrap();

    /// Regex for a NIK made of exactly 16 ASCII digits
    /// - Valid: "3175091234567890"
    /// - Invalid: "31750912", "317509123456789X", "31750912345678901"
    pub static ref NIK_DIGITS_REGEX: Regex = Regex::new(r"^[0-9]{16}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_regex_removes_spaces_and_periods() {
        assert_eq!(
            NIK_STRIP_REGEX.replace_all("3175.09.123456.7890", ""),
            "3175091234567890"
        );
        assert_eq!(
            NIK_STRIP_REGEX.replace_all("3175 0912 3456 7890", ""),
            "3175091234567890"
        );
        assert_eq!(NIK_STRIP_REGEX.replace_all("31-75", ""), "31-75");
    }

    #[test]
    fn test_digits_regex_valid() {
        assert!(NIK_DIGITS_REGEX.is_match("3175091234567890"));
        assert!(NIK_DIGITS_REGEX.is_match("0000000000000000"));
    }

    #[test]
    fn test_digits_regex_invalid() {
        assert!(!NIK_DIGITS_REGEX.is_match("31750912")); // too short
        assert!(!NIK_DIGITS_REGEX.is_match("31750912345678901")); // too long
        assert!(!NIK_DIGITS_REGEX.is_match("317509123456789X")); // letter
        assert!(!NIK_DIGITS_REGEX.is_match("")); // empty
    }
}

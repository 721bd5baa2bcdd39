use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating administrative region codes
    /// Must be one or more ASCII digits
    /// - Valid: "11", "4113000000", "1101053"
    /// - Invalid: "", "11-01", "A11", " 11"
    pub static ref REGION_CODE_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_code_regex_valid() {
        assert!(REGION_CODE_REGEX.is_match("11"));
        assert!(REGION_CODE_REGEX.is_match("4113000000"));
        assert!(REGION_CODE_REGEX.is_match("0"));
    }

    #[test]
    fn test_region_code_regex_invalid() {
        assert!(!REGION_CODE_REGEX.is_match("")); // empty
        assert!(!REGION_CODE_REGEX.is_match("11-01")); // separator
        assert!(!REGION_CODE_REGEX.is_match("A11")); // letter
        assert!(!REGION_CODE_REGEX.is_match(" 11")); // whitespace
        assert!(!REGION_CODE_REGEX.is_match("11\n")); // trailing newline
    }
}

//! Phone number utilities
//!
//! Phone numbers flow through the system verbatim, hyphens included: the
//! verification cache is keyed by the exact string the client submitted, so
//! no normalization happens here.

use once_cell::sync::Lazy;
use regex::Regex;

// Korean mobile number in the hyphenated form clients submit
static KOREAN_MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[016789]-\d{3,4}-\d{4}$").unwrap());

/// Check if a phone number is a valid Korean mobile number
/// (e.g. `010-1234-5678`)
pub fn is_valid_korean_mobile(phone: &str) -> bool {
    KOREAN_MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for log output, keeping the last four digits
/// (e.g. `010-1234-5678` becomes `****5678`)
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        format!("****{}", &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_korean_mobile_numbers() {
        assert!(is_valid_korean_mobile("010-1234-5678"));
        assert!(is_valid_korean_mobile("010-123-4567"));
        assert!(is_valid_korean_mobile("011-987-6543"));
        assert!(is_valid_korean_mobile("019-4444-5555"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_korean_mobile("01012345678")); // Missing hyphens
        assert!(!is_valid_korean_mobile("010 1234 5678")); // Spaces
        assert!(!is_valid_korean_mobile("02-123-4567")); // Landline prefix
        assert!(!is_valid_korean_mobile("012-1234-5678")); // Invalid prefix
        assert!(!is_valid_korean_mobile("010-1234-567")); // Too short
        assert!(!is_valid_korean_mobile("010-12345-5678")); // Middle too long
        assert!(!is_valid_korean_mobile("+82-10-1234-5678")); // International form
        assert!(!is_valid_korean_mobile(""));
        assert!(!is_valid_korean_mobile("abc-defg-hijk"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("010-1234-5678"), "****5678");
        assert_eq!(mask_phone("011-987-6543"), "****6543");
        assert_eq!(mask_phone("123"), "****");
        assert_eq!(mask_phone(""), "****");
    }
}

use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// GTIN-8, GTIN-12 (UPC-A), GTIN-13 (EAN-13) and GTIN-14.
const GTIN_LENGTHS: [usize; 4] = [8, 12, 13, 14];

/// Returns true if `raw` is an all-digit code of length 8, 12, 13 or 14.
/// Only ASCII digits count.
pub fn is_valid_gtin(raw: &str) -> bool {
    GTIN_LENGTHS.contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit())
}

/// A validated product barcode (GTIN). Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode(String);

impl Barcode {
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        if !is_valid_gtin(raw) {
            return Err(ProductError::InvalidBarcode);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Barcode {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Barcode::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Success,
    NotFound,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Success => write!(f, "success"),
            ScanStatus::NotFound => write!(f, "not_found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_accept_every_supported_gtin_length() {
        for code in ["96385074", "036000291452", "5901234123457", "10012345678902"] {
            assert!(Barcode::parse(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn should_reject_unsupported_lengths() {
        for code in ["123", "1234567", "123456789", "12345678901", "123456789012345"] {
            assert!(matches!(
                Barcode::parse(code),
                Err(ProductError::InvalidBarcode)
            ));
        }
    }

    #[test]
    fn should_reject_non_digit_characters() {
        assert!(Barcode::parse("59012341234a7").is_err());
        assert!(Barcode::parse(" 5901234123457").is_err());
        assert!(Barcode::parse("").is_err());
    }

    #[test]
    fn should_reject_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not GTIN digits
        assert!(Barcode::parse("٠١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn should_reject_supported_length_with_line_break() {
        assert!(!is_valid_gtin("9638507\n"));
        assert!(!is_valid_gtin("96385074\n"));
        assert!(!is_valid_gtin("\n96385074"));
    }

    #[test]
    fn should_display_barcode_as_raw_digits() {
        let barcode: Barcode = "5901234123457".parse().unwrap();
        assert_eq!(format!("{}", barcode), "5901234123457");
        assert_eq!(barcode.as_str(), "5901234123457");
    }

    #[test]
    fn should_display_priorities_in_lowercase() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(ScanStatus::NotFound.to_string(), "not_found");
    }

    proptest! {
        #[test]
        fn should_be_valid_exactly_for_digit_strings_of_supported_length(raw in "[0-9a-z ]{0,16}") {
            let expected = raw.chars().all(|c| c.is_ascii_digit())
                && [8, 12, 13, 14].contains(&raw.len());
            prop_assert_eq!(is_valid_gtin(&raw), expected);
        }

        #[test]
        fn should_accept_any_digit_string_of_supported_length(
            raw in prop_oneof!["[0-9]{8}", "[0-9]{12}", "[0-9]{13}", "[0-9]{14}"]
        ) {
            prop_assert!(Barcode::parse(&raw).is_ok());
        }
    }
}

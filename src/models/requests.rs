//! Request models for the part lookup API
//!
//! Validation of the part number taken from the request path.

use std::fmt;

use crate::error::ServiceError;

/// Maximum accepted part number length in characters.
pub const MAX_PART_NUMBER_LENGTH: usize = 64;

/// A validated, trimmed part number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartNumber(String);

impl PartNumber {
    /// Trims and validates a raw part number.
    ///
    /// # Errors
    /// Returns `ServiceError::MalformedRequest` when the value is empty after
    /// trimming, too long, or contains control characters.
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ServiceError::MalformedRequest(
                "Part number cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_PART_NUMBER_LENGTH {
            return Err(ServiceError::MalformedRequest(format!(
                "Part number exceeds maximum length of {} characters",
                MAX_PART_NUMBER_LENGTH
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ServiceError::MalformedRequest(
                "Part number contains control characters".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PartNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let part = PartNumber::parse("  NE555D ").unwrap();
        assert_eq!(part.as_str(), "NE555D");
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert!(matches!(
            PartNumber::parse(""),
            Err(ServiceError::MalformedRequest(_))
        ));
        assert!(matches!(
            PartNumber::parse("   \t"),
            Err(ServiceError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "X".repeat(MAX_PART_NUMBER_LENGTH + 1);
        assert!(PartNumber::parse(&long).is_err());
        assert!(PartNumber::parse(&"X".repeat(MAX_PART_NUMBER_LENGTH)).is_ok());
    }

    #[test]
    fn test_parse_keeps_slashes() {
        let part = PartNumber::parse("PIC16F887-I/P").unwrap();
        assert_eq!(part.to_string(), "PIC16F887-I/P");
    }

    #[test]
    fn test_parse_rejects_control_characters() {
        assert!(PartNumber::parse("NE555\nD").is_err());
    }
}

//! JSON text fields
//!
//! Annotation records store free-form metadata as JSON text.

use crate::core::error::{ValidationError, ValidationResult};

/// Check that `text` parses as JSON
///
/// # Examples
/// ```
/// use tile_library::core::json::validate_json;
///
/// assert!(validate_json(r#"{"source": "gnomad"}"#).is_ok());
/// assert!(validate_json("{source: gnomad}").is_err());
/// ```
pub fn validate_json(text: &str) -> ValidationResult<()> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(|_| ())
        .map_err(|_| ValidationError::message("Expects json-formatted text"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_json() {
        assert!(validate_json("[]").is_ok());
        assert!(validate_json("3").is_ok());
        assert!(validate_json("").is_err());
        assert_eq!(
            validate_json("{").unwrap_err(),
            ValidationError::message("Expects json-formatted text")
        );
    }
}

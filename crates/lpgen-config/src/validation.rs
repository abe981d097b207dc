//! Validation trait for configuration types.

use crate::error::{ConfigError, Result};

/// Implemented by config sections that need checks beyond what the type
/// system enforces. Error messages name the offending field.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Check that a URL carries an http(s) scheme.
pub fn validate_http_url(field: impl Into<String>, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfigError::Validation {
            field: field.into(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::Validation {
            field: field.into(),
            message: format!("must start with http:// or https://, got: {value}"),
        });
    }
    Ok(())
}

/// Check that an integer falls within an inclusive range.
pub fn validate_range_u64(
    field: impl Into<String>,
    value: u64,
    min: u64,
    max: u64,
) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::Validation {
            field: field.into(),
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_valid() {
        assert!(validate_http_url("api.base_url", "http://localhost:5000").is_ok());
        assert!(validate_http_url("api.base_url", "https://api.example.com").is_ok());
    }

    #[test]
    fn http_url_invalid() {
        assert!(validate_http_url("api.base_url", "").is_err());
        assert!(validate_http_url("api.base_url", "localhost:5000").is_err());
    }

    #[test]
    fn range_bounds() {
        assert!(validate_range_u64("x", 5, 1, 10).is_ok());
        assert!(validate_range_u64("x", 0, 1, 10).is_err());
        assert!(validate_range_u64("x", 11, 1, 10).is_err());
    }
}

//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Where generation and save requests go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the generation backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User identifier attached to requests. Saves fall back to
    /// "anonymous" when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_id: None,
        }
    }
}

impl crate::validation::Validate for ApiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_http_url("api.base_url", &self.base_url)?;
        crate::validation::validate_range_u64("api.timeout_secs", self.timeout_secs, 1, 600)?;
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn default_is_valid() {
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_schemeless_url() {
        let config = ApiConfig {
            base_url: "localhost:5000".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

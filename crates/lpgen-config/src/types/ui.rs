//! Front-end timing configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the detail panel's close transition runs before the focused
    /// label is cleared.
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,

    /// How long the save status badge stays on screen before self-clearing.
    #[serde(default = "default_save_status_ms")]
    pub save_status_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
            save_status_ms: default_save_status_ms(),
        }
    }
}

impl crate::validation::Validate for UiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_range_u64("ui.close_delay_ms", self.close_delay_ms, 0, 5_000)?;
        crate::validation::validate_range_u64(
            "ui.save_status_ms",
            self.save_status_ms,
            100,
            60_000,
        )?;
        Ok(())
    }
}

fn default_close_delay_ms() -> u64 {
    300
}

fn default_save_status_ms() -> u64 {
    3_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_close_delay_is_allowed() {
        let config = UiConfig {
            close_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn absurd_save_status_rejected() {
        let config = UiConfig {
            save_status_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

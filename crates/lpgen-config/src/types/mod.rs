//! Type-safe configuration structs.

mod api;
mod ui;

pub use api::ApiConfig;
pub use ui::UiConfig;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::Validate;

/// Root configuration aggregating all sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}

//! Configuration for lpgen.
//!
//! Supports TOML, YAML and JSON config files, discovery of a
//! `.lpgen.{toml,yml,yaml,json}` file in the working directory, `LPGEN_*`
//! environment overrides, and validation with field-level error messages.
//!
//! # Example
//!
//! ```no_run
//! use lpgen_config::Config;
//!
//! let config = Config::load()?;
//! let url = &config.api.base_url;
//! # Ok::<(), lpgen_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use types::{ApiConfig, Config, UiConfig};
pub use validation::Validate;

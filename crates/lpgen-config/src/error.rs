//! Configuration error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("unsupported config format '{extension}' (expected toml, yml, yaml or json)")]
    UnsupportedFormat { extension: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

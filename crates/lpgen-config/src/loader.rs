//! Config loading: file discovery, format dispatch, env overrides.

use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::types::Config;
use crate::validation::Validate;

/// File names probed by [`Config::load`], in priority order.
const CANDIDATES: &[&str] = &[".lpgen.toml", ".lpgen.yml", ".lpgen.yaml", ".lpgen.json"];

impl Config {
    /// Load configuration: the first `.lpgen.*` file found in the working
    /// directory (defaults when none exists), then `LPGEN_*` environment
    /// overrides, then validation.
    pub fn load() -> Result<Self> {
        let mut config = Config::default();
        for name in CANDIDATES {
            let path = Path::new(name);
            if path.exists() {
                debug!(file = %name, "loading config file");
                config = parse_file(path)?;
                break;
            }
        }
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file, with env overrides and validation.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        let mut config = parse_file(path)?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }
}

fn parse_file(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let parse_err = |message: String| ConfigError::Parse {
        path: path.display().to_string(),
        message,
    };
    match extension {
        "toml" => toml::from_str(&text).map_err(|e| parse_err(e.to_string())),
        "yml" | "yaml" => serde_yaml::from_str(&text).map_err(|e| parse_err(e.to_string())),
        "json" => serde_json::from_str(&text).map_err(|e| parse_err(e.to_string())),
        other => Err(ConfigError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

/// Environment variables override file values. The lookup is injected so
/// tests can run without touching the process environment.
fn apply_env_overrides<F>(config: &mut Config, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("LPGEN_API_BASE_URL") {
        config.api.base_url = url;
    }
    if let Some(secs) = get("LPGEN_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        config.api.timeout_secs = secs;
    }
    if let Some(user) = get("LPGEN_API_USER_ID") {
        config.api.user_id = Some(user);
    }
    if let Some(ms) = get("LPGEN_UI_CLOSE_DELAY_MS").and_then(|v| v.parse().ok()) {
        config.ui.close_delay_ms = ms;
    }
    if let Some(ms) = get("LPGEN_UI_SAVE_STATUS_MS").and_then(|v| v.parse().ok()) {
        config.ui.save_status_ms = ms;
    }
}

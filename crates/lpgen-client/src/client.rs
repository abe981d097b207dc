//! Reqwest-backed client for the generation backend.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use lpgen_config::ApiConfig;
use lpgen_core::LearningPath;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::outcome::{parse_generate_payload, GenerateOutcome};
use crate::{validate_prompt, EMPTY_PROMPT_MSG};

/// Stateless handle on the backend. Cheap to clone; front ends enforce the
/// single-flight discipline with their own busy flag.
#[derive(Clone)]
pub struct PathClient {
    http: reqwest::Client,
    base_url: String,
}

/// Persisted-path identifier returned by a successful save.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReceipt {
    pub path_id: String,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaveResponse {
    path_details: SaveReceipt,
}

impl PathClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request a learning path for a free-text prompt.
    ///
    /// Returns `Err` only for the local empty-prompt rejection, in which
    /// case no request was sent. Everything that happens after the request
    /// goes out is reported as a [`GenerateOutcome`] variant.
    pub async fn generate(
        &self,
        prompt: &str,
        user_id: Option<&str>,
    ) -> Result<GenerateOutcome> {
        if validate_prompt(prompt).is_some() {
            return Err(anyhow!(EMPTY_PROMPT_MSG));
        }

        let url = format!("{}/api/generate-learning-path", self.base_url);
        let body = serde_json::json!({ "prompt": prompt, "userId": user_id });

        info!(%url, "requesting learning path generation");
        let response = match self.http.post(&url).json(&body).send().await {
            Ok(r) => r,
            Err(err) => {
                warn!(%err, "generation request failed in transport");
                return Ok(GenerateOutcome::network_error());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(t) => t,
            Err(err) => {
                warn!(%err, "failed to read generation response body");
                return Ok(GenerateOutcome::network_error());
            }
        };

        let value: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(_) if !status.is_success() => {
                return Ok(GenerateOutcome::transport(format!(
                    "Generation request failed: {status}"
                )));
            }
            Err(_) => {
                // A 2xx with a non-JSON body is a format problem, keep it
                // around for the diagnostic view.
                return Ok(GenerateOutcome::FormatError {
                    raw: Value::String(text),
                });
            }
        };

        Ok(parse_generate_payload(value))
    }

    /// Persist a generated path. `user_id` falls back to the "anonymous"
    /// placeholder when absent.
    pub async fn save(
        &self,
        path: &LearningPath,
        user_id: Option<&str>,
    ) -> Result<SaveReceipt> {
        let url = format!("{}/api/save-learning-path", self.base_url);
        let body = save_body(path, user_id);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("save request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("save request failed with status {status}"));
        }

        let parsed: SaveResponse = response
            .json()
            .await
            .context("save response missing path_details")?;
        info!(path_id = %parsed.path_details.path_id, "learning path saved");
        Ok(parsed.path_details)
    }
}

/// Request body for a save. Absent user ids collapse to the backend's
/// "anonymous" placeholder here, before the request goes out.
fn save_body(path: &LearningPath, user_id: Option<&str>) -> Value {
    serde_json::json!({
        "learning_path": path,
        "userId": user_id.unwrap_or("anonymous"),
    })
}

//! Tagged result of a generation request.

use lpgen_core::LearningPath;
use serde_json::Value;
use tracing::warn;

/// User-facing message for responses the backend's model produced in a
/// shape we cannot use.
pub const UNEXPECTED_FORMAT_MSG: &str =
    "The AI returned an unexpected format. Please try rephrasing your request.";

const NETWORK_ERROR_MSG: &str = "Network error. Please try again.";

/// Strict tagged outcome of one generation request. Exactly one of three
/// things happened:
#[derive(Debug, Clone)]
pub enum GenerateOutcome {
    /// The backend produced a well-formed learning path, optionally with a
    /// ready-made flowchart description that the renderer should use
    /// verbatim.
    Success {
        path: LearningPath,
        flowchart: Option<String>,
    },
    /// The response arrived but its structured fields were missing or the
    /// wrong shape. The raw payload is retained for diagnostic display.
    FormatError { raw: Value },
    /// The request never produced a usable response: connection failure,
    /// timeout, or an error status without diagnostic payload.
    TransportError { message: String },
}

impl GenerateOutcome {
    pub fn transport(message: impl Into<String>) -> Self {
        GenerateOutcome::TransportError {
            message: message.into(),
        }
    }

    pub fn network_error() -> Self {
        Self::transport(NETWORK_ERROR_MSG)
    }
}

/// Classify a generation response body.
///
/// Mapping, matching the backend contract: `status == "success"` with a
/// deserializable `learning_path` is a success (plus optional
/// `roadmap_flowchart`); a `raw_response` field or a malformed
/// `learning_path` is a format error retaining the payload; anything else
/// is a transport-level failure carrying the backend's message when it has
/// one.
pub fn parse_generate_payload(value: Value) -> GenerateOutcome {
    let is_success = value.get("status").and_then(Value::as_str) == Some("success");

    if is_success {
        match value.get("learning_path") {
            Some(raw_path) => match serde_json::from_value::<LearningPath>(raw_path.clone()) {
                Ok(path) => {
                    let flowchart = value
                        .get("roadmap_flowchart")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    return GenerateOutcome::Success { path, flowchart };
                }
                Err(err) => {
                    warn!(%err, "learning_path field did not deserialize");
                    return GenerateOutcome::FormatError { raw: value };
                }
            },
            None => return GenerateOutcome::FormatError { raw: value },
        }
    }

    if value.get("raw_response").is_some() {
        return GenerateOutcome::FormatError { raw: value };
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Failed to generate learning path")
        .to_string();
    GenerateOutcome::TransportError { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_with_flowchart() {
        let body = json!({
            "status": "success",
            "learning_path": {
                "title": "Learn Go",
                "overview": "",
                "total_duration": "2 weeks",
                "topics": [{"name": "Basics", "duration": "1 week", "description": ""}]
            },
            "roadmap_flowchart": "flowchart TD\n  a --> b"
        });
        match parse_generate_payload(body) {
            GenerateOutcome::Success { path, flowchart } => {
                assert_eq!(path.title, "Learn Go");
                assert_eq!(flowchart.as_deref(), Some("flowchart TD\n  a --> b"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn success_without_flowchart() {
        let body = json!({
            "status": "success",
            "learning_path": {"title": "x", "topics": []}
        });
        match parse_generate_payload(body) {
            GenerateOutcome::Success { flowchart, .. } => assert!(flowchart.is_none()),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn missing_path_is_format_error() {
        let body = json!({"status": "success"});
        assert!(matches!(
            parse_generate_payload(body),
            GenerateOutcome::FormatError { .. }
        ));
    }

    #[test]
    fn malformed_path_retains_raw_payload() {
        let body = json!({
            "status": "success",
            "learning_path": {"topics": "should be a list"}
        });
        match parse_generate_payload(body.clone()) {
            GenerateOutcome::FormatError { raw } => assert_eq!(raw, body),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn raw_response_field_is_format_error() {
        let body = json!({
            "status": "error",
            "raw_response": "I can't produce JSON today"
        });
        assert!(matches!(
            parse_generate_payload(body),
            GenerateOutcome::FormatError { .. }
        ));
    }

    #[test]
    fn failure_message_passes_through() {
        let body = json!({"status": "error", "message": "quota exceeded"});
        match parse_generate_payload(body) {
            GenerateOutcome::TransportError { message } => {
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_gets_generic_text() {
        let body = json!({"status": "error"});
        match parse_generate_payload(body) {
            GenerateOutcome::TransportError { message } => {
                assert_eq!(message, "Failed to generate learning path");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}

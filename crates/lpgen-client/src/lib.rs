//! HTTP client for the learning-path generation backend.
//!
//! Every generation failure is converted to a [`GenerateOutcome`] variant
//! at this boundary rather than propagated as an error, so a failed request
//! can never terminate the session.

pub mod client;
pub mod outcome;

pub use client::{PathClient, SaveReceipt};
pub use outcome::{parse_generate_payload, GenerateOutcome, UNEXPECTED_FORMAT_MSG};

/// Validation message for an empty or whitespace-only prompt. Callers must
/// reject such prompts locally and never issue a request.
pub const EMPTY_PROMPT_MSG: &str = "Please enter a learning topic";

/// Local prompt validation, performed before any request goes out.
pub fn validate_prompt(prompt: &str) -> Option<&'static str> {
    if prompt.trim().is_empty() {
        Some(EMPTY_PROMPT_MSG)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_prompts_rejected() {
        assert_eq!(validate_prompt(""), Some(EMPTY_PROMPT_MSG));
        assert_eq!(validate_prompt("   \n\t"), Some(EMPTY_PROMPT_MSG));
        assert_eq!(validate_prompt("learn rust"), None);
    }
}

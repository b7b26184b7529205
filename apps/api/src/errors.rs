use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Longest slice of an unparsable model reply echoed back to the caller.
const DECODE_SNIPPET_MAX: usize = 120;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire body is always `{"error": string}`. Upstream and internal failures
/// keep their detail in the log; the caller sees a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream LLM error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Decode error: model reply is not valid JSON")]
    Decode { snippet: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Builds a decode error carrying a truncated snippet of the offending text.
    pub fn decode(text: &str) -> Self {
        let snippet = if text.len() > DECODE_SNIPPET_MAX {
            let mut end = DECODE_SNIPPET_MAX;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &text[..end])
        } else {
            text.to_string()
        };
        AppError::Decode { snippet }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("LLM call failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Language model request failed".to_string(),
                )
            }
            AppError::Decode { snippet } => {
                tracing::error!("LLM reply is not valid JSON: {snippet}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Language model returned unparsable content: {snippet}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snippet_truncates_long_text() {
        let text = "x".repeat(500);
        match AppError::decode(&text) {
            AppError::Decode { snippet } => {
                assert_eq!(snippet.len(), DECODE_SNIPPET_MAX + 3);
                assert!(snippet.ends_with("..."));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_snippet_keeps_short_text() {
        match AppError::decode("Sorry, I cannot help with that.") {
            AppError::Decode { snippet } => {
                assert_eq!(snippet, "Sorry, I cannot help with that.");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_snippet_respects_char_boundaries() {
        let text = "é".repeat(200);
        match AppError::decode(&text) {
            AppError::Decode { snippet } => {
                assert!(snippet.ends_with("..."));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}

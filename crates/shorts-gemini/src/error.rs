//! Gemini error types.

use thiserror::Error;

/// Result type for plan generation operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors that can occur while requesting or decoding a plan.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Missing GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("Gemini API request failed: {0}")]
    RequestFailed(String),

    #[error("Gemini API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Failed to parse plan JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gemini response missing fields")]
    MissingFields,
}

impl GeminiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }
}

//! API error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shorts_gemini::GeminiError;
use shorts_youtube::YoutubeError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the two request handlers.
///
/// Every variant is caught at the handler boundary and rendered as a uniform
/// `{success: false, error}` body; nothing escapes as an unhandled fault and
/// nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied data fails a precondition.
    #[error("{0}")]
    InvalidInput(String),

    /// Required process configuration is absent.
    #[error("{0}")]
    Configuration(String),

    /// The generation collaborator failed or its output could not be
    /// parsed/validated.
    #[error("{0}")]
    Generation(String),

    /// The hosting collaborator accepted the call but returned an unusable
    /// result.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Generation(_) | ApiError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => Self::Configuration(err.to_string()),
            other => Self::Generation(other.to_string()),
        }
    }
}

impl From<YoutubeError> for ApiError {
    fn from(err: YoutubeError) -> Self {
        match err {
            YoutubeError::MissingCredentials => Self::Configuration(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

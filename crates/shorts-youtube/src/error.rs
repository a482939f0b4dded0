//! YouTube client error types.

use thiserror::Error;

/// Result type for publishing operations.
pub type YoutubeResult<T> = Result<T, YoutubeError>;

/// Errors that can occur during token exchange or upload.
///
/// Messages never carry credential material; OAuth failures quote the
/// provider's error code, not the tokens that produced it.
#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error(
        "Missing YouTube OAuth credentials. Set YOUTUBE_CLIENT_ID, YOUTUBE_CLIENT_SECRET, and YOUTUBE_REFRESH_TOKEN."
    )]
    MissingCredentials,

    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    #[error("YouTube upload request failed: {0}")]
    RequestFailed(String),

    #[error("YouTube API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("YouTube did not return a video ID.")]
    MissingVideoId,
}

impl YoutubeError {
    pub fn token_exchange(msg: impl Into<String>) -> Self {
        Self::TokenExchange(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }
}

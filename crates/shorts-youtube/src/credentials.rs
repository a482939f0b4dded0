//! Delegated OAuth credential configuration.

use std::fmt;

use crate::error::{YoutubeError, YoutubeResult};

/// Refresh-token-based authorization for acting on a channel owner's behalf.
///
/// Read once from process configuration and treated as read-only for the
/// lifetime of every request. `Debug` redacts secret material so the struct
/// can never leak through logging.
#[derive(Clone)]
pub struct DelegatedCredential {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl DelegatedCredential {
    /// Load from `YOUTUBE_CLIENT_ID`, `YOUTUBE_CLIENT_SECRET` and
    /// `YOUTUBE_REFRESH_TOKEN`. All three must be present and non-empty.
    pub fn from_env() -> YoutubeResult<Self> {
        let client_id = non_empty_var("YOUTUBE_CLIENT_ID")?;
        let client_secret = non_empty_var("YOUTUBE_CLIENT_SECRET")?;
        let refresh_token = non_empty_var("YOUTUBE_REFRESH_TOKEN")?;
        Ok(Self {
            client_id,
            client_secret,
            refresh_token,
        })
    }
}

fn non_empty_var(name: &str) -> YoutubeResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(YoutubeError::MissingCredentials),
    }
}

impl fmt::Debug for DelegatedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedCredential")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

//! Application state.

use std::sync::Arc;

use shorts_gemini::{GeminiClient, PlanGenerator};
use shorts_youtube::{
    DelegatedCredential, OAuthTokenExchanger, TokenExchanger, VideoHost, YouTubeClient,
};
use tracing::warn;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Collaborators are held behind their capability traits so tests can swap
/// in deterministic stubs. A missing credential degrades the corresponding
/// endpoint to a configuration error at request time rather than failing
/// startup; nothing here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub generator: Option<Arc<dyn PlanGenerator>>,
    pub token_exchanger: Arc<dyn TokenExchanger>,
    pub video_host: Arc<dyn VideoHost>,
    pub credential: Option<DelegatedCredential>,
}

impl AppState {
    /// Create application state with live collaborators from the
    /// environment.
    pub fn from_env(config: ApiConfig) -> Self {
        let generator = match GeminiClient::from_env() {
            Ok(client) => Some(Arc::new(client) as Arc<dyn PlanGenerator>),
            Err(e) => {
                warn!("plan generation disabled: {}", e);
                None
            }
        };

        let credential = match DelegatedCredential::from_env() {
            Ok(credential) => Some(credential),
            Err(e) => {
                warn!("video publishing disabled: {}", e);
                None
            }
        };

        Self {
            config,
            generator,
            token_exchanger: Arc::new(OAuthTokenExchanger::new()),
            video_host: Arc::new(YouTubeClient::new()),
            credential,
        }
    }

    /// Create state with explicit collaborators (used by tests).
    pub fn with_collaborators(
        config: ApiConfig,
        generator: Option<Arc<dyn PlanGenerator>>,
        token_exchanger: Arc<dyn TokenExchanger>,
        video_host: Arc<dyn VideoHost>,
        credential: Option<DelegatedCredential>,
    ) -> Self {
        Self {
            config,
            generator,
            token_exchanger,
            video_host,
            credential,
        }
    }
}

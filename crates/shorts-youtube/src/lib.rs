//! YouTube Data API client for delegated-credential video publishing.
//!
//! This crate provides:
//! - Delegated OAuth credential configuration (client id/secret + refresh token)
//! - A `TokenExchanger` capability trait with a live refresh-token exchange
//! - A `VideoHost` capability trait with a live resumable-upload implementation
//!
//! Both capabilities ship deterministic stubs so the upload handler's
//! branching is testable without network access.

pub mod credentials;
pub mod error;
pub mod oauth;
pub mod upload;

pub use credentials::DelegatedCredential;
pub use error::{YoutubeError, YoutubeResult};
pub use oauth::{AccessToken, OAuthTokenExchanger, StaticTokenExchanger, TokenExchanger};
pub use upload::{RecordingVideoHost, VideoHost, YouTubeClient};

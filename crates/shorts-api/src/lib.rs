//! Axum HTTP API server for the Shorts Agent backend.
//!
//! This crate provides:
//! - `POST /api/generate` — structured Short plans from a topic prompt
//! - `POST /api/upload` — delegated-credential video publishing
//! - Uniform `{success, ...}` response envelopes for both endpoints

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

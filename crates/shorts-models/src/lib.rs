//! Shared data models for the Shorts Agent backend.
//!
//! This crate provides Serde-serializable types for:
//! - Plan generation requests and the validated creative plan
//! - Upload metadata (privacy status, tags) and the upload result

pub mod plan;
pub mod upload;

// Re-export common types
pub use plan::{GeneratedPlan, GenerationRequest};
pub use upload::{parse_tags, PrivacyStatus, UploadMetadata, UploadResult};

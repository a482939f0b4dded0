//! Gemini client for short-form video plan generation.
//!
//! This crate provides:
//! - Deterministic prompt construction from a `GenerationRequest`
//! - A `PlanGenerator` capability trait with a live Gemini implementation
//! - Fence-stripping sanitization of raw model output
//! - Structural validation and normalization into a `GeneratedPlan`

pub mod client;
pub mod error;
pub mod prompt;
pub mod sanitize;
pub mod validate;

pub use client::{request_plan, GeminiClient, PlanGenerator};
pub use error::{GeminiError, GeminiResult};
pub use prompt::build_plan_prompt;
pub use sanitize::sanitize_json;
pub use validate::validate_plan;

//! Live Gemini client and the plan generation pipeline.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shorts_models::{GeneratedPlan, GenerationRequest};
use tracing::debug;

use crate::error::{GeminiError, GeminiResult};
use crate::prompt::build_plan_prompt;
use crate::sanitize::sanitize_json;
use crate::validate::validate_plan;

/// Model used for plan generation.
const MODEL_NAME: &str = "gemini-1.5-pro";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Capability interface over the generation collaborator.
///
/// The live implementation is [`GeminiClient`]; tests substitute a stub so
/// handler branching is exercised without network access.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Submit a prompt and return the full response text.
    async fn generate(&self, prompt: &str) -> GeminiResult<String>;
}

/// Gemini API request body.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini API response body.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Gemini API client.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GeminiError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL_NAME, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::request_failed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiStatus { status, body });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::request_failed(format!("invalid response body: {}", e)))?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(GeminiError::EmptyResponse)
    }
}

/// Run the full plan pipeline: prompt, one generation call, sanitize,
/// parse, validate.
///
/// The collaborator is invoked exactly once; there is no model fallback and
/// no retry. Any failure along the chain surfaces as a [`GeminiError`].
pub async fn request_plan(
    generator: &dyn PlanGenerator,
    request: &GenerationRequest,
) -> GeminiResult<GeneratedPlan> {
    let prompt = build_plan_prompt(request);
    let response_text = generator.generate(&prompt).await?;
    debug!(response_chars = response_text.len(), "received generation response");

    let payload = sanitize_json(&response_text);
    let value: serde_json::Value = serde_json::from_str(&payload)?;
    validate_plan(&value)
}

//! Plan generation handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shorts_gemini::request_plan;
use shorts_models::{GeneratedPlan, GenerationRequest};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Successful plan response envelope.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: GeneratedPlan,
}

/// Generate a Short plan from a topic and creative constraints.
///
/// Input is checked before configuration and configuration before any
/// network access, so a bad request never costs a collaborator call. The
/// generation collaborator is invoked exactly once.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    if !request.has_topic() {
        return Err(ApiError::invalid_input("Topic is required"));
    }

    let generator = state
        .generator
        .as_ref()
        .ok_or_else(|| ApiError::configuration("Missing GEMINI_API_KEY environment variable"))?;

    let plan = request_plan(generator.as_ref(), &request).await?;

    info!(topic = %request.topic, title = %plan.title, "generated plan");

    Ok(Json(GenerateResponse {
        success: true,
        data: plan,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shorts_gemini::{GeminiResult, PlanGenerator};
    use shorts_youtube::{RecordingVideoHost, StaticTokenExchanger};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::config::ApiConfig;

    struct CountingGenerator {
        response: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PlanGenerator for CountingGenerator {
        async fn generate(&self, _prompt: &str) -> GeminiResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn state_with_generator(
        generator: Option<Arc<dyn PlanGenerator>>,
    ) -> AppState {
        AppState::with_collaborators(
            ApiConfig::default(),
            generator,
            Arc::new(StaticTokenExchanger::new("token")),
            Arc::new(RecordingVideoHost::succeeding("vid")),
            None,
        )
    }

    fn counting_generator(
        response: &str,
    ) -> (Arc<dyn PlanGenerator>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = Arc::new(CountingGenerator {
            response: response.to_string(),
            calls: Arc::clone(&calls),
        });
        (generator, calls)
    }

    fn plan_response() -> &'static str {
        r##"```json
{
  "title": "Automate Shorts with AI",
  "description": "Para one.\n\nPara two with CTA #ai",
  "script": "1. (0-3s) Hook.",
  "shotIdeas": ["Desk close-up, slow push-in"],
  "hashtags": ["ai", "#shorts"],
  "callToAction": "Subscribe for weekly automations"
}
```"##
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_without_collaborator_call() {
        let (generator, calls) = counting_generator(plan_response());
        let state = state_with_generator(Some(generator));

        let request: GenerationRequest = serde_json::from_str(r#"{"topic":"  "}"#).unwrap();
        let err = generate_plan(State(state), Json(request)).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Topic is required");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_absent_topic_field_rejected() {
        let (generator, calls) = counting_generator(plan_response());
        let state = state_with_generator(Some(generator));

        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        let err = generate_plan(State(state), Json(request)).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let state = state_with_generator(None);

        let request = GenerationRequest::new("a topic");
        let err = generate_plan(State(state), Json(request)).await.unwrap_err();

        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_default_request_yields_complete_plan() {
        let (generator, calls) = counting_generator(plan_response());
        let state = state_with_generator(Some(generator));

        let request = GenerationRequest::new("Automate YouTube Shorts with AI");
        let response = generate_plan(State(state), Json(request)).await.unwrap();

        assert!(response.0.success);
        let plan = &response.0.data;
        assert!(!plan.title.is_empty());
        assert!(!plan.description.is_empty());
        assert!(!plan.script.is_empty());
        assert!(!plan.call_to_action.is_empty());
        assert_eq!(plan.shot_ideas.len(), 1);
        assert!(plan.hashtags.iter().all(|tag| tag.starts_with('#')));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparseable_model_output_is_generation_error() {
        let (generator, _) = counting_generator("I'd be happy to help!");
        let state = state_with_generator(Some(generator));

        let request = GenerationRequest::new("a topic");
        let err = generate_plan(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, ApiError::Generation(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_message_is_preserved() {
        let (generator, _) = counting_generator(r#"{"title":"only a title"}"#);
        let state = state_with_generator(Some(generator));

        let request = GenerationRequest::new("a topic");
        let err = generate_plan(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.to_string(), "Gemini response missing fields");
    }
}

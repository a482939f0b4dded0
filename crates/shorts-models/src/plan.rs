//! Plan generation request and the validated creative plan.

use serde::{Deserialize, Serialize};

/// Default creative constraints substituted for missing request fields.
pub const DEFAULT_TONE: &str = "Energetic";
pub const DEFAULT_DURATION_SECONDS: &str = "45";
pub const DEFAULT_AUDIENCE: &str = "General YouTube viewers";

/// Inbound request for a short-form video plan.
///
/// `topic` is the only required field; the optional constraints fall back to
/// the documented defaults during deserialization so the prompt builder never
/// has to deal with absent values.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Topic or hook for the Short.
    #[serde(default)]
    pub topic: String,
    /// Delivery tone, e.g. "Energetic", "Calm".
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Target runtime in seconds, kept as text since it is interpolated
    /// verbatim into the prompt.
    #[serde(default = "default_duration")]
    pub duration: String,
    /// Intended audience description.
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_duration() -> String {
    DEFAULT_DURATION_SECONDS.to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

impl GenerationRequest {
    /// Create a request with default constraints.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: default_tone(),
            duration: default_duration(),
            audience: default_audience(),
        }
    }

    /// Whether the request carries a usable topic.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}

/// A validated creative package for one Short.
///
/// Produced fresh per request from model output, never mutated after
/// validation, never persisted. Every hashtag is guaranteed to start with
/// `#` once validation has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub title: String,
    pub description: String,
    pub script: String,
    pub shot_ideas: Vec<String>,
    pub hashtags: Vec<String>,
    pub call_to_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_applied_on_deserialize() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"topic":"AI tools"}"#).unwrap();
        assert_eq!(request.topic, "AI tools");
        assert_eq!(request.tone, DEFAULT_TONE);
        assert_eq!(request.duration, DEFAULT_DURATION_SECONDS);
        assert_eq!(request.audience, DEFAULT_AUDIENCE);
    }

    #[test]
    fn test_request_explicit_fields_win_over_defaults() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"topic":"AI tools","tone":"Calm","duration":"30","audience":"Developers"}"#,
        )
        .unwrap();
        assert_eq!(request.tone, "Calm");
        assert_eq!(request.duration, "30");
        assert_eq!(request.audience, "Developers");
    }

    #[test]
    fn test_has_topic_rejects_whitespace() {
        assert!(!GenerationRequest::new("").has_topic());
        assert!(!GenerationRequest::new("   ").has_topic());
        assert!(GenerationRequest::new("automation").has_topic());
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = GeneratedPlan {
            title: "t".to_string(),
            description: "d".to_string(),
            script: "s".to_string(),
            shot_ideas: vec!["wide shot".to_string()],
            hashtags: vec!["#shorts".to_string()],
            call_to_action: "subscribe".to_string(),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("shotIdeas").is_some());
        assert!(json.get("callToAction").is_some());
        assert!(json.get("shot_ideas").is_none());
    }
}

//! Prompt construction for plan generation.

use shorts_models::GenerationRequest;

/// Build the instruction prompt for one plan request.
///
/// The prompt is a pure function of the four request fields (defaults are
/// already substituted at deserialization time), so identical requests
/// produce byte-identical prompts. The model is told to answer with a single
/// strict JSON object in the `GeneratedPlan` shape.
pub fn build_plan_prompt(request: &GenerationRequest) -> String {
    format!(
        r##"You are an elite short-form video strategist. Build a complete creative package for a YouTube Short.

Constraints:
- Keep runtime around {duration} seconds
- Tone: {tone}
- Target audience: {audience}
- Deliver a punchy hook in the first 3 seconds
- End with a compelling call to action that feels natural, not salesy

Respond with strict JSON in the following shape:
{{
  "title": "Optimized short headline under 60 characters",
  "description": "2 paragraph description. Include CTA + hashtags.",
  "script": "Script broken into numbered beats with timing cues.",
  "shotIdeas": ["Shot idea with framing and motion", "..."],
  "hashtags": ["#shorts", "#topicKeyword", "..."],
  "callToAction": "Direct CTA phrase"
}}

Topic / Hook: {topic}
"##,
        duration = request.duration,
        tone = request.tone,
        audience = request.audience,
        topic = request.topic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let request = GenerationRequest::new("Automate YouTube Shorts with AI");
        assert_eq!(build_plan_prompt(&request), build_plan_prompt(&request));
    }

    #[test]
    fn test_prompt_embeds_all_request_fields() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"topic":"Rust tips","tone":"Calm","duration":"30","audience":"Developers"}"#,
        )
        .unwrap();
        let prompt = build_plan_prompt(&request);
        assert!(prompt.contains("Topic / Hook: Rust tips"));
        assert!(prompt.contains("Tone: Calm"));
        assert!(prompt.contains("around 30 seconds"));
        assert!(prompt.contains("Target audience: Developers"));
    }

    #[test]
    fn test_prompt_defaults_substituted_for_missing_fields() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"topic":"Rust tips"}"#).unwrap();
        let prompt = build_plan_prompt(&request);
        assert!(prompt.contains("around 45 seconds"));
        assert!(prompt.contains("Tone: Energetic"));
        assert!(prompt.contains("Target audience: General YouTube viewers"));
    }

    #[test]
    fn test_prompt_demands_strict_json_shape() {
        let prompt = build_plan_prompt(&GenerationRequest::new("anything"));
        assert!(prompt.contains("strict JSON"));
        assert!(prompt.contains("\"shotIdeas\""));
        assert!(prompt.contains("\"callToAction\""));
    }
}

//! Structural validation and normalization of decoded plan JSON.

use serde_json::Value;
use shorts_models::GeneratedPlan;

use crate::error::{GeminiError, GeminiResult};

/// Validate a decoded JSON value against the plan contract.
///
/// The check is all-or-nothing: four string fields and two array fields must
/// be present with the right types or the whole value is rejected, with no
/// partial normalization. Only after the check passes are the array elements
/// coerced to text and hashtags `#`-prefixed (idempotently). Content is not
/// judged here; length limits and hashtag quality are the model's problem.
pub fn validate_plan(value: &Value) -> GeminiResult<GeneratedPlan> {
    let title = value.get("title").and_then(Value::as_str);
    let description = value.get("description").and_then(Value::as_str);
    let script = value.get("script").and_then(Value::as_str);
    let call_to_action = value.get("callToAction").and_then(Value::as_str);
    let shot_ideas = value.get("shotIdeas").and_then(Value::as_array);
    let hashtags = value.get("hashtags").and_then(Value::as_array);

    let (Some(title), Some(description), Some(script), Some(call_to_action)) =
        (title, description, script, call_to_action)
    else {
        return Err(GeminiError::MissingFields);
    };
    let (Some(shot_ideas), Some(hashtags)) = (shot_ideas, hashtags) else {
        return Err(GeminiError::MissingFields);
    };

    Ok(GeneratedPlan {
        title: title.to_string(),
        description: description.to_string(),
        script: script.to_string(),
        shot_ideas: shot_ideas.iter().map(element_to_text).collect(),
        hashtags: hashtags
            .iter()
            .map(|element| prefix_hashtag(element_to_text(element)))
            .collect(),
        call_to_action: call_to_action.to_string(),
    })
}

/// Coerce an array element to text; non-string scalars are stringified.
fn element_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn prefix_hashtag(tag: String) -> String {
    if tag.starts_with('#') {
        tag
    } else {
        format!("#{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_payload() -> Value {
        json!({
            "title": "t",
            "description": "d",
            "script": "s",
            "shotIdeas": ["x"],
            "hashtags": ["ai", "#shorts"],
            "callToAction": "c"
        })
    }

    #[test]
    fn test_valid_payload_normalizes_hashtags_in_order() {
        let plan = validate_plan(&complete_payload()).unwrap();
        assert_eq!(plan.title, "t");
        assert_eq!(plan.description, "d");
        assert_eq!(plan.script, "s");
        assert_eq!(plan.call_to_action, "c");
        assert_eq!(plan.shot_ideas, vec!["x"]);
        assert_eq!(plan.hashtags, vec!["#ai", "#shorts"]);
    }

    #[test]
    fn test_hashtag_prefixing_is_idempotent() {
        let plan = validate_plan(&complete_payload()).unwrap();
        let reencoded = serde_json::to_value(&plan).unwrap();
        let replan = validate_plan(&reencoded).unwrap();
        assert_eq!(replan.hashtags, plan.hashtags);
    }

    #[test]
    fn test_missing_array_field_rejected() {
        let mut payload = complete_payload();
        payload.as_object_mut().unwrap().remove("shotIdeas");
        assert!(matches!(
            validate_plan(&payload),
            Err(GeminiError::MissingFields)
        ));
    }

    #[test]
    fn test_missing_string_field_rejected() {
        let mut payload = complete_payload();
        payload.as_object_mut().unwrap().remove("callToAction");
        assert!(matches!(
            validate_plan(&payload),
            Err(GeminiError::MissingFields)
        ));
    }

    #[test]
    fn test_scalar_where_array_expected_rejected() {
        let mut payload = complete_payload();
        payload["hashtags"] = json!("#shorts");
        assert!(matches!(
            validate_plan(&payload),
            Err(GeminiError::MissingFields)
        ));
    }

    #[test]
    fn test_wrongly_typed_string_field_rejected() {
        let mut payload = complete_payload();
        payload["title"] = json!(42);
        assert!(matches!(
            validate_plan(&payload),
            Err(GeminiError::MissingFields)
        ));
    }

    #[test]
    fn test_non_string_array_elements_coerced_to_text() {
        let mut payload = complete_payload();
        payload["shotIdeas"] = json!([1, "two"]);
        payload["hashtags"] = json!([42, "ai"]);
        let plan = validate_plan(&payload).unwrap();
        assert_eq!(plan.shot_ideas, vec!["1", "two"]);
        assert_eq!(plan.hashtags, vec!["#42", "#ai"]);
    }

    #[test]
    fn test_empty_arrays_accepted() {
        let mut payload = complete_payload();
        payload["shotIdeas"] = json!([]);
        payload["hashtags"] = json!([]);
        let plan = validate_plan(&payload).unwrap();
        assert!(plan.shot_ideas.is_empty());
        assert!(plan.hashtags.is_empty());
    }
}

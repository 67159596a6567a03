//! Structural validation of grading requests.
//!
//! The request schema is embedded from schema/grading_request.schema.json
//! and compiled on first use. A schema that fails to compile surfaces as
//! [`RequestError::SchemaUnavailable`] on every call rather than a panic.

use lazy_static::lazy_static;
use serde_json::Value;

use super::RequestError;

const REQUEST_SCHEMA_JSON: &str = include_str!("../../schema/grading_request.schema.json");

lazy_static! {
    static ref REQUEST_VALIDATOR: Result<jsonschema::Validator, String> =
        serde_json::from_str::<Value>(REQUEST_SCHEMA_JSON)
            .map_err(|e| format!("invalid schema JSON: {}", e))
            .and_then(|schema| {
                jsonschema::validator_for(&schema).map_err(|e| format!("invalid schema: {}", e))
            });
}

fn request_validator() -> Result<&'static jsonschema::Validator, RequestError> {
    REQUEST_VALIDATOR
        .as_ref()
        .map_err(|reason| RequestError::SchemaUnavailable(reason.clone()))
}

/// Validate a decoded request against the request schema.
///
/// Every violation is reported, each suffixed with the JSON pointer of the
/// offending value.
pub fn validate_request_schema(request: &Value) -> Result<(), RequestError> {
    let violations: Vec<String> = request_validator()?
        .iter_errors(request)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RequestError::SchemaError(violations))
    }
}

/// Whether a decoded request satisfies the request schema.
pub fn is_valid_request(request: &Value) -> bool {
    request_validator().is_ok_and(|validator| validator.is_valid(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(request: &Value) -> Vec<String> {
        match validate_request_schema(request) {
            Err(RequestError::SchemaError(violations)) => violations,
            other => panic!("expected schema violations, got {:?}", other),
        }
    }

    #[test]
    fn test_embedded_schema_compiles() {
        assert!(request_validator().is_ok());
    }

    #[test]
    fn test_valid_request_passes_schema() {
        let value = json!({
            "prompt_messages": [
                { "role": "system", "content": "Respond in the reasoning/answer format." },
                { "role": "user", "content": "What is 6 * 7?" }
            ],
            "completion": "<reasoning>\n6 * 7\n</reasoning>\n<answer>\n42\n</answer>\n",
            "extra_data": { "answer": "42", "split": "test" }
        });
        assert!(validate_request_schema(&value).is_ok());
    }

    #[test]
    fn test_minimal_request_passes_schema() {
        let value = json!({ "prompt_messages": [], "completion": "" });
        assert!(validate_request_schema(&value).is_ok());

        let null_extra = json!({ "prompt_messages": [], "completion": "", "extra_data": null });
        assert!(is_valid_request(&null_extra));
    }

    #[test]
    fn test_missing_completion_fails() {
        let value = json!({ "prompt_messages": [] });
        assert_eq!(violations(&value).len(), 1);
    }

    #[test]
    fn test_missing_prompt_messages_fails() {
        let value = json!({ "completion": "x" });
        assert!(!is_valid_request(&value));
        assert!(violations(&value)[0].contains("prompt_messages"));
    }

    #[test]
    fn test_non_string_completion_fails() {
        let value = json!({ "prompt_messages": [], "completion": 42 });
        assert!(!is_valid_request(&value));
        assert!(violations(&value)[0].ends_with("at /completion"));
    }

    #[test]
    fn test_message_without_role_fails() {
        let value = json!({
            "prompt_messages": [{ "content": "hi" }],
            "completion": "x"
        });
        assert!(!is_valid_request(&value));
    }

    #[test]
    fn test_extra_data_must_be_object() {
        let value = json!({ "prompt_messages": [], "completion": "x", "extra_data": "42" });
        assert!(!is_valid_request(&value));
    }

    #[test]
    fn test_unknown_top_level_fields_allowed() {
        let value = json!({ "prompt_messages": [], "completion": "x", "model": "policy-7b" });
        assert!(is_valid_request(&value));
    }
}

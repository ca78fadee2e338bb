//! Validation of the raw "start stream" form payload.
//!
//! The payload comes straight from the client, so the presence and type of
//! every field is checked before its constraint. Problems are reported per
//! field and never abort the pass: a caller always gets the full list.

use log::debug;
use serde_json::{Map, Value};

use super::types::stream_draft::{check_description, check_tags, check_title};
use super::types::{StreamDraft, ValidationErrors};
use crate::utils::error_messages::REQUIRED;

/// Validates a submitted form and returns a copy of it when every field
/// passes. Keys other than `title`, `description` and `tags` are dropped.
///
/// # Example
/// ```
/// use serde_json::json;
/// use start_stream::utils::validation::validate;
///
/// let draft = validate(&json!({
///     "title": "My First Livestream",
///     "description": "x",
///     "tags": ["gaming"],
/// }))
/// .unwrap();
/// assert_eq!(draft.title, "My First Livestream");
///
/// let errors = validate(&json!({ "title": "Hi", "description": "", "tags": [] })).unwrap_err();
/// assert_eq!(errors.len(), 3);
/// ```
pub fn validate(input: &Value) -> Result<StreamDraft, ValidationErrors> {
    let fields = input.as_object();
    let mut errors = ValidationErrors::default();

    let title = string_field(fields, "title", &mut errors);
    if let Some(title) = &title {
        check_title(title, &mut errors);
    }

    let description = string_field(fields, "description", &mut errors);
    if let Some(description) = &description {
        check_description(description, &mut errors);
    }

    let tags = tags_field(fields, &mut errors);
    if let Some(tags) = &tags {
        check_tags(tags, &mut errors);
    }

    match (title, description, tags) {
        (Some(title), Some(description), Some(tags)) if errors.is_empty() => {
            debug!("Stream draft accepted with {} tag(s)", tags.len());
            Ok(StreamDraft {
                title,
                description,
                tags,
            })
        }
        _ => {
            debug!("Stream draft rejected: {}", errors);
            Err(errors)
        }
    }
}

/// Looks up a string field, recording a violation when it is missing or
/// holds another type.
fn string_field(
    fields: Option<&Map<String, Value>>,
    name: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match fields.and_then(|fields| fields.get(name)) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            errors.push(name, type_mismatch("string", other));
            None
        }
        None => {
            errors.push(name, REQUIRED);
            None
        }
    }
}

/// Looks up the tag list. Each element that is not a string is reported
/// under its index, e.g. `tags.2`.
fn tags_field(fields: Option<&Map<String, Value>>, errors: &mut ValidationErrors) -> Option<Vec<String>> {
    let values = match fields.and_then(|fields| fields.get("tags")) {
        Some(Value::Array(values)) => values,
        Some(other) => {
            errors.push("tags", type_mismatch("array", other));
            return None;
        }
        None => {
            errors.push("tags", REQUIRED);
            return None;
        }
    };

    let mut tags = Vec::with_capacity(values.len());
    let mut well_typed = true;
    for (index, value) in values.iter().enumerate() {
        match value {
            Value::String(tag) => tags.push(tag.clone()),
            other => {
                errors.push(format!("tags.{}", index), type_mismatch("string", other));
                well_typed = false;
            }
        }
    }

    well_typed.then_some(tags)
}

fn type_mismatch(expected: &str, received: &Value) -> String {
    format!("Expected {}, received {}", expected, type_name(received))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages_for<'a>(errors: &'a ValidationErrors, field: &'a str) -> Vec<&'a str> {
        errors.for_field(field).map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_valid_input_returned_unchanged() {
        let input = json!({
            "title": "My First Livestream",
            "description": "x",
            "tags": ["gaming"],
        });

        let draft = validate(&input).unwrap();
        assert_eq!(draft, StreamDraft::new("My First Livestream", "x", vec!["gaming".to_string()]));
        assert_eq!(serde_json::to_value(&draft).unwrap(), input);
    }

    #[test]
    fn test_values_are_not_coerced() {
        let input = json!({
            "title": "   padded title   ",
            "description": " ",
            "tags": ["  Gaming  ", ""],
        });

        let draft = validate(&input).unwrap();
        assert_eq!(draft.title, "   padded title   ");
        assert_eq!(draft.description, " ");
        assert_eq!(draft.tags, vec!["  Gaming  ".to_string(), String::new()]);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let input = json!({
            "title": "My First Livestream",
            "description": "x",
            "tags": ["gaming"],
            "channelName": "alice",
        });

        let draft = validate(&input).unwrap();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "title": "My First Livestream", "description": "x", "tags": ["gaming"] })
        );
    }

    #[test]
    fn test_short_title() {
        let errors = validate(&json!({
            "title": "Too short",
            "description": "fine",
            "tags": ["chat"],
        }))
        .unwrap_err();

        assert_eq!(messages_for(&errors, "title"), vec!["Title must be at least 10 characters long"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_tags() {
        let errors = validate(&json!({
            "title": "A long enough title",
            "description": "fine",
            "tags": [],
        }))
        .unwrap_err();

        assert_eq!(messages_for(&errors, "tags"), vec!["You must provide at least one tag"]);
    }

    #[test]
    fn test_every_field_failing() {
        let errors = validate(&json!({ "title": "Hi", "description": "", "tags": [] })).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "description", "tags"]);
        assert_eq!(
            messages_for(&errors, "description"),
            vec!["Description must be at least 10 characters long"]
        );
    }

    #[test]
    fn test_short_title_and_empty_tags_together() {
        let errors = validate(&json!({ "title": "Hi", "description": "ok", "tags": [] })).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("title").count(), 1);
        assert_eq!(errors.for_field("tags").count(), 1);
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&json!({})).unwrap_err();

        assert_eq!(messages_for(&errors, "title"), vec!["Required"]);
        assert_eq!(messages_for(&errors, "description"), vec!["Required"]);
        assert_eq!(messages_for(&errors, "tags"), vec!["Required"]);
    }

    #[test]
    fn test_input_not_an_object() {
        for input in [json!(null), json!("title"), json!([1, 2]), json!(42)] {
            let errors = validate(&input).unwrap_err();
            assert_eq!(errors.len(), 3, "Every field should be missing for {}", input);
            assert!(errors.iter().all(|e| e.message == "Required"));
        }
    }

    #[test]
    fn test_wrong_field_types() {
        let errors = validate(&json!({
            "title": 12345678901_u64,
            "description": null,
            "tags": "gaming",
        }))
        .unwrap_err();

        assert_eq!(messages_for(&errors, "title"), vec!["Expected string, received number"]);
        assert_eq!(messages_for(&errors, "description"), vec!["Expected string, received null"]);
        assert_eq!(messages_for(&errors, "tags"), vec!["Expected array, received string"]);
    }

    #[test]
    fn test_wrong_type_skips_length_check() {
        let errors = validate(&json!({
            "title": true,
            "description": "x",
            "tags": ["a"],
        }))
        .unwrap_err();

        assert_eq!(messages_for(&errors, "title"), vec!["Expected string, received boolean"]);
    }

    #[test]
    fn test_bad_tag_elements_reported_by_index() {
        let errors = validate(&json!({
            "title": "A long enough title",
            "description": "fine",
            "tags": ["ok", 3, "fine", { "name": "x" }],
        }))
        .unwrap_err();

        assert_eq!(messages_for(&errors, "tags.1"), vec!["Expected string, received number"]);
        assert_eq!(messages_for(&errors, "tags.3"), vec!["Expected string, received object"]);
        assert_eq!(errors.for_field("tags").count(), 0);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_emoji_title_measured_like_the_browser() {
        let draft = validate(&json!({
            "title": "😀😀😀😀😀",
            "description": "x",
            "tags": ["a"],
        }))
        .unwrap();
        assert_eq!(draft.title, "😀😀😀😀😀");

        let errors = validate(&json!({
            "title": "😀😀😀😀",
            "description": "x",
            "tags": ["a"],
        }))
        .unwrap_err();
        assert_eq!(messages_for(&errors, "title"), vec!["Title must be at least 10 characters long"]);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let valid = json!({ "title": "My First Livestream", "description": "x", "tags": ["gaming"] });
        let invalid = json!({ "title": "Hi", "tags": [1] });

        assert_eq!(validate(&valid), validate(&valid));
        assert_eq!(validate(&invalid), validate(&invalid));
    }
}

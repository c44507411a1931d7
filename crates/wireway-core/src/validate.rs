//! Structural validation of raw input.
//!
//! Only the minimum needed to render safely is checked, in this order:
//!
//! 1. root has a `screens` array
//! 2. `screens` is non-empty
//! 3. every screen has an `id` and an `elements` array
//!
//! The first violation is returned. Element variants and cross references are
//! deliberately not inspected here; see [`crate::lint`] for advisory checks.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::schema::WireframeSchema;

/// Parse UTF-8 text as JSON and validate it.
pub fn parse_schema(text: &str) -> SchemaResult<WireframeSchema> {
    let value: Value = serde_json::from_str(text).map_err(SchemaError::Parse)?;
    validate(&value)
}

/// Validate an already-parsed value and decode it into a schema.
pub fn validate(value: &Value) -> SchemaResult<WireframeSchema> {
    check_shape(value)?;
    let schema = WireframeSchema::deserialize(value).map_err(SchemaError::Decode)?;
    debug!(screens = schema.screens.len(), "schema validated");
    Ok(schema)
}

/// Apply the shape rules without decoding.
pub fn check_shape(value: &Value) -> SchemaResult<()> {
    let screens = value
        .get("screens")
        .and_then(Value::as_array)
        .ok_or(SchemaError::MissingScreens)?;

    if screens.is_empty() {
        return Err(SchemaError::EmptyScreens);
    }

    for (index, screen) in screens.iter().enumerate() {
        if matches!(screen.get("id"), None | Some(Value::Null)) {
            return Err(SchemaError::ScreenMissingId { index });
        }
        if !screen.get("elements").is_some_and(Value::is_array) {
            return Err(SchemaError::ScreenMissingElements { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({}), "missing-screens" ; "no screens field")]
    #[test_case(json!([]), "missing-screens" ; "root is an array")]
    #[test_case(json!({"screens": {}}), "missing-screens" ; "screens is an object")]
    #[test_case(json!({"screens": []}), "empty-screens" ; "empty screens")]
    #[test_case(json!({"screens": [{"elements": []}]}), "screen-missing-id" ; "screen without id")]
    #[test_case(json!({"screens": [{"id": "a"}]}), "screen-missing-elements" ; "screen without elements")]
    #[test_case(json!({"screens": [{"id": "a", "elements": "x"}]}), "screen-missing-elements" ; "elements not an array")]
    #[test_case(json!({"screens": [{"id": 7, "elements": []}]}), "decode" ; "id of the wrong type")]
    fn rejects_with_rule(value: Value, rule: &str) {
        let err = validate(&value).unwrap_err();
        assert_eq!(err.rule(), rule, "unexpected error: {err}");
    }

    #[test]
    fn fails_fast_on_first_bad_screen() {
        let value = json!({"screens": [
            {"id": "ok", "elements": []},
            {"elements": []},
            {"id": "also-bad"}
        ]});
        match validate(&value) {
            Err(SchemaError::ScreenMissingId { index }) => assert_eq!(index, 1),
            other => panic!("Expected missing id at index 1, got {other:?}"),
        }
    }

    #[test]
    fn accepts_partially_specified_elements() {
        let value = json!({"screens": [{"id": "home", "elements": [
            {"type": "header"},
            {"type": "mystery", "id": "m"},
            {"id": "no-type"}
        ]}]});
        let schema = validate(&value).unwrap();
        assert_eq!(schema.screens[0].elements.len(), 3);
    }

    #[test]
    fn dangling_targets_are_not_validation_errors() {
        let value = json!({"screens": [{"id": "home", "elements": [
            {"type": "button", "id": "b", "text": "Go", "target": "nowhere"}
        ]}]});
        assert!(validate(&value).is_ok());
    }

    #[test]
    fn parse_failure_is_reported_before_shape() {
        let err = parse_schema("{\"screens\": [").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn screen_name_is_optional() {
        let schema = parse_schema(r#"{"screens": [{"id": "only", "elements": []}]}"#).unwrap();
        assert_eq!(schema.screens[0].name, "");
    }
}

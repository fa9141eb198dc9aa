//! Structural parameter surgery: scoping-field removal, batch extraction.
//!
//! All functions return new values. Caller-supplied maps are never mutated,
//! so the same logical request can be shaped repeatedly (retries included)
//! without drift.

use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Shallow copy of `params` without `key`. Identity copy when absent.
pub(crate) fn strip_field(params: &Map<String, Value>, key: &str) -> Map<String, Value> {
    let mut cleaned = params.clone();
    cleaned.remove(key);
    cleaned
}

/// Extract the row sequence stored under `batch_key`, after the scoping field
/// has been dropped from the outer object. `None` when the batch field is
/// absent or not an array — "nothing to send", not an error.
pub(crate) fn take_batch(params: &Map<String, Value>, batch_key: &str) -> Option<Vec<Value>> {
    match params.get(batch_key) {
        Some(Value::Array(rows)) => Some(rows.clone()),
        _ => None,
    }
}

/// Serialize arbitrary caller data into a parameter map.
///
/// Anything that does not serialize to a JSON object is a contract violation
/// on the caller's side and surfaces as a validation error.
pub fn to_object_params(value: &impl Serialize) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::validation_with_context(
            "request parameters must serialize to a JSON object",
            ErrorContext::new()
                .with_field_path("request.params")
                .with_details(format!("got {}", json_kind(&other))),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
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

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn strip_removes_the_field_and_leaves_input_intact() {
        let params = obj(json!({ "organizationId": 5, "ruleCode": "ABC" }));
        let cleaned = strip_field(&params, "organizationId");
        assert!(!cleaned.contains_key("organizationId"));
        assert_eq!(cleaned.get("ruleCode"), Some(&json!("ABC")));
        // input untouched
        assert_eq!(params.get("organizationId"), Some(&json!(5)));
    }

    #[test]
    fn strip_is_identity_when_field_absent() {
        let params = obj(json!({ "ruleCode": "ABC" }));
        assert_eq!(strip_field(&params, "organizationId"), params);
    }

    #[test]
    fn take_batch_returns_rows() {
        let params = obj(json!({
            "organizationId": 5,
            "selectedRows": [
                { "ruleId": 1, "objectVersionNumber": 0 },
                { "ruleId": 2, "objectVersionNumber": 1 },
            ],
        }));
        let rows = take_batch(&params, "selectedRows").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], json!({ "ruleId": 1, "objectVersionNumber": 0 }));
        assert!(rows.iter().all(|row| row.get("organizationId").is_none()));
    }

    #[test]
    fn take_batch_is_none_without_rows() {
        assert!(take_batch(&obj(json!({ "organizationId": 5 })), "selectedRows").is_none());
        assert!(take_batch(&obj(json!({ "selectedRows": "oops" })), "selectedRows").is_none());
    }

    #[test]
    fn non_object_params_are_a_contract_violation() {
        let err = to_object_params(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}

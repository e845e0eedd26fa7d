use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// On failure every violation message is collected, in validator order.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let violations: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_missing_required_property() {
        let schema = json!({
            "type": "object",
            "required": ["keyword"],
            "properties": { "keyword": { "type": "string" } }
        });
        let err = validate_json(&schema, &json!({})).unwrap_err();
        match err {
            SchemaValidationError::ValidationFailed(v) => {
                assert_eq!(v.len(), 1);
                assert!(v[0].contains("keyword"), "message should name the property: {}", v[0]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_uncompilable_schema() {
        let err = validate_json(&json!({"type": 12}), &json!({})).unwrap_err();
        assert!(matches!(err, SchemaValidationError::SchemaCompile(_)));
    }
}

use movie_mcp_gateway::catalog::ToolName;
use movie_mcp_gateway::schema::{validate_json, SchemaValidationError};
use serde_json::json;

#[test]
fn json_schema_harness_validates_catalog_arguments() {
    for tool in ToolName::ALL {
        let schema = tool.input_schema();
        let valid = match tool {
            ToolName::GetMovieById => json!({"imdb_id": "tt0111161"}),
            ToolName::SearchByKeyword => json!({"keyword": "drama"}),
            _ => json!({}),
        };
        validate_json(&schema, &valid)
            .unwrap_or_else(|e| panic!("{tool} rejected valid arguments: {e}"));
        assert!(
            validate_json(&schema, &json!("not an object")).is_err(),
            "{tool} must require an argument object"
        );
    }
}

#[test]
fn json_schema_harness_reports_every_violation() {
    let schema = ToolName::GetMovieById.input_schema();
    match validate_json(&schema, &json!({"imdb_id": ""})) {
        Err(SchemaValidationError::ValidationFailed(violations)) => assert_eq!(violations.len(), 1),
        other => panic!("expected a validation failure, got {other:?}"),
    }
}

use super::*;
use serde_json::json;

fn invoke_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["input"],
        "properties": {
            "input": { "type": "string" },
            "conversation": { "type": "array" }
        }
    })
}

#[test]
fn test_from_documents_compiles_all() {
    let mut docs = HashMap::new();
    docs.insert("invoke_request".to_string(), invoke_request_schema());
    docs.insert("anything".to_string(), json!(true));

    let registry = SchemaRegistry::from_documents(&docs).unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.contains("invoke_request"));
    assert!(registry.get("invoke_request").is_some());
    assert!(registry.get("missing").is_none());
}

#[test]
fn test_uncompilable_schema_is_rejected() {
    let mut docs = HashMap::new();
    docs.insert("bad".to_string(), json!({ "type": "not-a-type" }));

    let err = SchemaRegistry::from_documents(&docs).unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidSchema { name, .. } if name == "bad"));
}

#[test]
fn test_violations_empty_for_valid_instance() {
    let mut registry = SchemaRegistry::new();
    registry.register("req", &invoke_request_schema()).unwrap();
    let validator = registry.get("req").unwrap();

    let instance = json!({ "input": "hi", "conversation": [] });
    assert!(violations(&validator, &instance).is_empty());
}

#[test]
fn test_violations_reported_per_location() {
    let mut registry = SchemaRegistry::new();
    registry.register("req", &invoke_request_schema()).unwrap();
    let validator = registry.get("req").unwrap();

    let instance = json!({ "input": 7, "conversation": "not-an-array" });
    let found = violations(&validator, &instance);

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|v| v.contains("/input")));
    assert!(found.iter().any(|v| v.contains("/conversation")));
}

#[test]
fn test_missing_required_field_is_a_violation() {
    let mut registry = SchemaRegistry::new();
    registry.register("req", &invoke_request_schema()).unwrap();
    let validator = registry.get("req").unwrap();

    let found = violations(&validator, &json!({}));
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("input"));
}

#[test]
fn test_empty_registry() {
    let registry = SchemaRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

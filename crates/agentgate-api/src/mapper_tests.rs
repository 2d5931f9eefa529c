use super::*;
use serde_json::json;

fn route(definition: Value) -> RouteConfig {
    serde_json::from_value(definition).unwrap()
}

fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("payload fixture must be an object"),
    }
}

#[test]
fn test_mapping_completeness() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "parameter_mapping": { "input": "input", "conversation": "conversation" },
        "constant_parameters": { "temperature": 0.1 }
    }));
    let payload = payload(json!({ "input": "hi", "conversation": [], "extra": true }));

    let args = build_call_args(&route, &payload).unwrap();

    assert_eq!(args.len(), 3);
    assert_eq!(args["input"], json!("hi"));
    assert_eq!(args["conversation"], json!([]));
    assert_eq!(args["temperature"], json!(0.1));
    // Unmapped payload fields are not forwarded.
    assert!(!args.contains_key("extra"));
}

#[test]
fn test_pass_through_default() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke"
    }));
    let payload = payload(json!({ "a": 1, "b": 2 }));

    let args = build_call_args(&route, &payload).unwrap();

    assert_eq!(args.len(), 2);
    assert_eq!(args["a"], json!(1));
    assert_eq!(args["b"], json!(2));
}

#[test]
fn test_missing_field_rejection() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "parameter_mapping": { "input": "input", "conversation": "conversation" }
    }));
    let payload = payload(json!({ "conversation": [] }));

    let err = build_call_args(&route, &payload).unwrap_err();
    match err {
        ApiError::MissingFields(fields) => assert_eq!(fields, vec!["input".to_string()]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn test_all_missing_fields_are_listed() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "parameter_mapping": {
            "input": "input",
            "conversation": "conversation",
            "config": "config"
        }
    }));

    let err = build_call_args(&route, &Map::new()).unwrap_err();
    match err {
        ApiError::MissingFields(fields) => {
            assert_eq!(
                fields,
                vec![
                    "config".to_string(),
                    "conversation".to_string(),
                    "input".to_string()
                ]
            );
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn test_mapped_value_wins_over_constant() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "parameter_mapping": { "input": "input" },
        "constant_parameters": { "input": "fixed" }
    }));
    let payload = payload(json!({ "input": "from-payload" }));

    let args = build_call_args(&route, &payload).unwrap();
    assert_eq!(args["input"], json!("from-payload"));
}

#[test]
fn test_pass_through_value_wins_over_constant() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "constant_parameters": { "mode": "default" }
    }));
    let payload = payload(json!({ "mode": "override" }));

    let args = build_call_args(&route, &payload).unwrap();
    assert_eq!(args["mode"], json!("override"));
}

#[test]
fn test_mapping_renames_payload_fields() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "parameter_mapping": { "prompt": "input" }
    }));
    let payload = payload(json!({ "input": "hi" }));

    let args = build_call_args(&route, &payload).unwrap();
    assert_eq!(args["prompt"], json!("hi"));
    assert!(!args.contains_key("input"));
}

#[test]
fn test_constants_apply_without_payload() {
    let route = route(json!({
        "name": "invoke",
        "path": "/invoke",
        "agent_method": "invoke",
        "constant_parameters": { "mode": "batch" }
    }));

    let args = build_call_args(&route, &Map::new()).unwrap();
    assert_eq!(args.len(), 1);
    assert_eq!(args["mode"], json!("batch"));
}

#[test]
fn test_decode_empty_body() {
    assert!(decode_payload(b"").unwrap().is_empty());
}

#[test]
fn test_decode_null_body() {
    assert!(decode_payload(b"null").unwrap().is_empty());
}

#[test]
fn test_decode_object_body() {
    let payload = decode_payload(br#"{"input": "hi"}"#).unwrap();
    assert_eq!(payload["input"], json!("hi"));
}

#[test]
fn test_decode_non_object_body() {
    let err = decode_payload(b"[1, 2]").unwrap_err();
    assert!(matches!(err, ApiError::UnsupportedPayload));
}

#[test]
fn test_decode_malformed_body() {
    let err = decode_payload(b"{not json").unwrap_err();
    assert!(matches!(err, ApiError::MalformedBody(_)));
}

//! Request mapping: payload fields to agent call arguments.

use serde_json::{Map, Value};

use agentgate_config::RouteConfig;
use agentgate_core::CallArgs;

use crate::error::ApiError;

/// Decode a request body into a payload mapping.
///
/// Absent and empty bodies (and explicit JSON `null`) are treated as an
/// empty payload so bodyless requests still reach the constant parameters.
/// Valid JSON that is not an object is rejected.
pub fn decode_payload(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.is_empty() {
        return Ok(Map::new());
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(ApiError::UnsupportedPayload),
    }
}

/// Build the call arguments for one request.
///
/// Constants are inserted first, then the mapped (or passed-through)
/// payload fields, so a payload value overwrites a constant of the same
/// name. An empty parameter mapping means full pass-through: every payload
/// field is bound under its own name.
///
/// Every mapped payload field that is absent from the payload is collected
/// and reported in a single error; the agent is not invoked.
pub fn build_call_args(
    route: &RouteConfig,
    payload: &Map<String, Value>,
) -> Result<CallArgs, ApiError> {
    let mut args = CallArgs::new();
    for (name, value) in &route.constant_parameters {
        args.insert(name.clone(), value.clone());
    }

    if route.parameter_mapping.is_empty() {
        for (name, value) in payload {
            args.insert(name.clone(), value.clone());
        }
        return Ok(args);
    }

    let mut missing = Vec::new();
    for (param, field) in &route.parameter_mapping {
        match payload.get(field) {
            Some(value) => {
                args.insert(param.clone(), value.clone());
            }
            None => missing.push(field.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    Ok(args)
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;

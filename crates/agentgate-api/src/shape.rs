//! Response shaping.
//!
//! Converts an [`AgentOutcome`] into an HTTP response according to the
//! route's declared `stream` flag. The flag selects the mode; the shaper
//! never second-guesses it, so a flag/shape mismatch surfaces as an
//! explicit server error instead of a silently coerced response.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use jsonschema::Validator;
use serde_json::{Map, Value, json};
use tracing::error;

use agentgate_config::RouteConfig;
use agentgate_core::{AgentOutcome, ValueStream};

use crate::error::ApiError;
use crate::schema::violations;

/// The fixed terminal sentinel closing every stream.
const END_EVENT: &str = "data: {\"event\":\"end\"}\n\n";

/// Shape an agent outcome into the route's response.
pub fn shape_response(
    route: &RouteConfig,
    response_schema: Option<&Arc<Validator>>,
    outcome: AgentOutcome,
) -> Result<Response, ApiError> {
    if route.stream {
        return shape_stream(route, outcome);
    }
    match outcome {
        AgentOutcome::Scalar(value) => shape_scalar(route, response_schema, value),
        AgentOutcome::Stream(_) => Err(ApiError::UnexpectedStream),
    }
}

/// Scalar mode: validate against the declared response schema, apply the
/// envelope, and serialize as a JSON body.
fn shape_scalar(
    route: &RouteConfig,
    response_schema: Option<&Arc<Validator>>,
    result: Value,
) -> Result<Response, ApiError> {
    if let Some(validator) = response_schema {
        let found = violations(validator, &result);
        if !found.is_empty() {
            return Err(ApiError::InvalidResponse(found));
        }
    }

    let body = match &route.response_envelope {
        Some(key) => {
            let mut envelope = Map::new();
            envelope.insert(key.clone(), result);
            Value::Object(envelope)
        }
        None => result,
    };

    Ok(Json(body).into_response())
}

/// Stream mode: frame each chunk as one SSE event, lazily, in source order,
/// and always close with the terminal sentinel. A source error aborts the
/// stream; whatever was already flushed stands and the sentinel is skipped.
fn shape_stream(route: &RouteConfig, outcome: AgentOutcome) -> Result<Response, ApiError> {
    let source: ValueStream = match outcome {
        AgentOutcome::Stream(stream) => stream,
        // A single string result is treated as a one-item sequence.
        AgentOutcome::Scalar(Value::String(text)) => {
            Box::pin(futures::stream::once(async move { Ok(Value::String(text)) }))
        }
        // A finite in-memory sequence streams element by element.
        AgentOutcome::Scalar(Value::Array(items)) => {
            Box::pin(futures::stream::iter(items.into_iter().map(Ok)))
        }
        AgentOutcome::Scalar(_) => return Err(ApiError::UnsupportedStreamShape),
    };

    let route_name = route.name.clone();
    let frames = async_stream::stream! {
        let mut source = source;
        let mut aborted = false;
        while let Some(item) = source.next().await {
            match item {
                Ok(chunk) => yield Ok::<String, Infallible>(frame_chunk(&chunk)),
                Err(e) => {
                    error!(route = %route_name, "stream aborted: {e}");
                    aborted = true;
                    break;
                }
            }
        }
        if !aborted {
            yield Ok(END_EVENT.to_string());
        }
    };

    let media_type = HeaderValue::from_str(&route.stream_media_type)
        .unwrap_or_else(|_| HeaderValue::from_static("text/event-stream"));
    let mut response = Body::from_stream(frames).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, media_type);
    Ok(response)
}

/// Serialize one chunk as an SSE data event.
///
/// Object chunks pass through as-is; any other value is wrapped under a
/// `data` key so every frame carries a JSON object.
fn frame_chunk(chunk: &Value) -> String {
    let payload = match chunk {
        Value::Object(_) => chunk.clone(),
        other => json!({ "data": other }),
    };
    format!("data: {payload}\n\n")
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;

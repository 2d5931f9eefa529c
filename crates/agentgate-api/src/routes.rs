//! Route registration.
//!
//! Binds every configured route into an axum router. Binding happens once
//! at startup: schema references are resolved and compiled, and the agent
//! method name is verified against the agent, so a misconfigured route
//! fails the whole startup instead of surfacing at request time.

use std::sync::Arc;

use axum::body::Bytes;
use axum::response::Response;
use axum::routing::{MethodFilter, get, on};
use axum::{Json, Router};
use jsonschema::Validator;
use serde_json::{Value, json};
use tracing::info;

use agentgate_config::{HttpMethod, RouteConfig};
use agentgate_core::Agent;

use crate::dispatch::dispatch;
use crate::error::{ApiError, RegistrationError};
use crate::mapper::{build_call_args, decode_payload};
use crate::schema::{SchemaRegistry, violations};
use crate::shape::shape_response;

/// One configured route bound to its agent and compiled schemas.
struct BoundRoute {
    route: RouteConfig,
    agent: Arc<dyn Agent>,
    request_schema: Option<Arc<Validator>>,
    response_schema: Option<Arc<Validator>>,
}

/// Build the router for the given routes, agent, and schema registry.
///
/// Always installs the fixed `GET /health` liveness endpoint, independent
/// of configuration.
pub fn build_router(
    routes: &[RouteConfig],
    agent: Arc<dyn Agent>,
    schemas: &SchemaRegistry,
) -> Result<Router, RegistrationError> {
    let mut router = Router::new().route("/health", get(health));

    for route in routes {
        let bound = Arc::new(bind_route(route, agent.clone(), schemas)?);
        let handler = move |body: Bytes| {
            let bound = bound.clone();
            async move { handle(bound, body).await }
        };
        router = router.route(&route.path, on(method_filter(route.method), handler));
        info!(
            name = %route.name,
            method = route.method.as_str(),
            path = %route.path,
            stream = route.stream,
            summary = route.summary.as_deref(),
            description = route.description.as_deref(),
            "registered route"
        );
    }

    Ok(router)
}

/// Resolve schemas and verify the agent method for one route.
fn bind_route(
    route: &RouteConfig,
    agent: Arc<dyn Agent>,
    schemas: &SchemaRegistry,
) -> Result<BoundRoute, RegistrationError> {
    let request_schema = resolve_schema(route, route.request_schema.as_deref(), schemas)?;
    let response_schema = resolve_schema(route, route.response_schema.as_deref(), schemas)?;

    if !agent.has_method(&route.agent_method) {
        return Err(RegistrationError::MethodNotBound {
            route: route.name.clone(),
            method: route.agent_method.clone(),
        });
    }

    Ok(BoundRoute {
        route: route.clone(),
        agent,
        request_schema,
        response_schema,
    })
}

fn resolve_schema(
    route: &RouteConfig,
    name: Option<&str>,
    schemas: &SchemaRegistry,
) -> Result<Option<Arc<Validator>>, RegistrationError> {
    match name {
        None => Ok(None),
        Some(name) => schemas
            .get(name)
            .map(Some)
            .ok_or_else(|| RegistrationError::UnknownSchema {
                route: route.name.clone(),
                name: name.to_string(),
            }),
    }
}

/// Handle one request through the mapper, dispatcher, and shaper.
async fn handle(bound: Arc<BoundRoute>, body: Bytes) -> Result<Response, ApiError> {
    let payload = decode_payload(&body)?;

    if let Some(validator) = &bound.request_schema {
        let found = violations(validator, &Value::Object(payload.clone()));
        if !found.is_empty() {
            return Err(ApiError::InvalidPayload(found));
        }
    }

    let args = build_call_args(&bound.route, &payload)?;
    let outcome = dispatch(&bound.agent, &bound.route.agent_method, args).await?;
    shape_response(&bound.route, bound.response_schema.as_ref(), outcome)
}

/// Fixed liveness endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

//! API error types.
//!
//! Two families: [`RegistrationError`] is fatal at startup and blocks
//! serving; [`ApiError`] is produced per request and translated into an
//! HTTP response at the handler boundary. Agent failures are carried
//! verbatim inside [`ApiError::Agent`], never reinterpreted.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use agentgate_core::AgentError;

/// Fatal errors raised while wiring configured routes into the router.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Route '{route}' references unknown schema '{name}'")]
    UnknownSchema { route: String, name: String },

    #[error("Schema '{name}' cannot be compiled: {message}")]
    InvalidSchema { name: String, message: String },

    #[error("Route '{route}': agent exposes no method '{method}'")]
    MethodNotBound { route: String, method: String },
}

/// Request-time errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Mapped payload fields absent from the request, all of them listed.
    #[error("Missing required payload fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Payload failed the declared request schema.
    #[error("Request payload failed schema validation")]
    InvalidPayload(Vec<String>),

    /// Scalar result failed the declared response schema.
    #[error("Agent result failed response schema validation")]
    InvalidResponse(Vec<String>),

    /// Request body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Request body is valid JSON but not an object.
    #[error("Unsupported payload type")]
    UnsupportedPayload,

    /// A stream route's method returned a shape that is not streamable.
    #[error("Stream routes must return a string or a sequence of chunks")]
    UnsupportedStreamShape,

    /// A non-stream route's method returned a stream.
    #[error("Scalar route returned a stream")]
    UnexpectedStream,

    /// The agent method itself failed; propagated unmodified.
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedBody(_) | Self::UnsupportedPayload => StatusCode::BAD_REQUEST,
            Self::InvalidResponse(_)
            | Self::UnsupportedStreamShape
            | Self::UnexpectedStream
            | Self::Agent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Vec<String>> {
        match self {
            Self::MissingFields(fields) => Some(fields.clone()),
            Self::InvalidPayload(violations) | Self::InvalidResponse(violations) => {
                Some(violations.clone())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

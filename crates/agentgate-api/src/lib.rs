//! # Agentgate API
//!
//! HTTP surface for the agentgate framework. This crate turns a validated
//! configuration plus one agent instance into a live axum router:
//!
//! - **mapper**: builds the keyword-argument set for an agent call from a
//!   route definition and a decoded request payload.
//! - **dispatch**: invokes the bound agent method and propagates its errors
//!   untouched.
//! - **shape**: converts a scalar outcome into a JSON body (optionally
//!   enveloped) or a stream outcome into a lazily framed SSE response.
//! - **routes**: binds every configured route once at startup (schemas
//!   compiled, agent method verified) and installs the fixed `/health`
//!   endpoint.
//! - **server**: thin wrapper that binds a TCP listener and serves the
//!   router.
//!
//! Request handling is fully request-scoped: call arguments and in-flight
//! stream iterators are private to their request, and the agent is shared
//! read-only behind an `Arc`.

pub mod dispatch;
pub mod error;
pub mod mapper;
pub mod routes;
pub mod schema;
pub mod server;
pub mod shape;

pub use error::{ApiError, RegistrationError};
pub use routes::build_router;
pub use schema::SchemaRegistry;
pub use server::{ApiServer, ServerConfig};

//! # Agentgate Core
//!
//! Agent protocol and registry for the agentgate framework.
//!
//! An [`Agent`] is an opaque object exposing named methods. Each invocation
//! produces an [`AgentOutcome`]: either a single scalar value or a stream of
//! chunk values. Agents are constructed through the [`AgentRegistry`], a
//! startup-time mapping from string identifiers to factory functions.

mod agent;
mod error;
mod registry;

pub use agent::{Agent, AgentOutcome, CallArgs, ValueStream};
pub use error::AgentError;
pub use registry::{AgentFactory, AgentRegistry};

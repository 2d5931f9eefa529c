//! Agent protocol definitions.
//!
//! Agents expose methods by name and are invoked with a flat mapping of
//! keyword arguments. The result shape is an explicit tagged union: methods
//! that produce a single value return [`AgentOutcome::Scalar`], methods that
//! produce a sequence of chunks return [`AgentOutcome::Stream`]. The HTTP
//! layer never infers the shape by runtime inspection.

use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use crate::error::AgentError;

/// Keyword arguments for one agent method invocation.
///
/// Built fresh per request and never shared across requests.
pub type CallArgs = serde_json::Map<String, Value>;

/// A lazily produced sequence of chunk values.
pub type ValueStream = Pin<Box<dyn Stream<Item = Result<Value, AgentError>> + Send>>;

/// Result of one agent method invocation.
pub enum AgentOutcome {
    /// A single structured value.
    Scalar(Value),
    /// A finite or unbounded sequence of chunk values.
    Stream(ValueStream),
}

impl AgentOutcome {
    /// Wrap a serializable value as a scalar outcome.
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

impl fmt::Debug for AgentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Stream(_) => f.debug_tuple("Stream").field(&"..").finish(),
        }
    }
}

/// Core trait for agents exposed over HTTP.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Names of the methods this agent exposes.
    fn method_names(&self) -> Vec<String>;

    /// Whether the agent exposes a method with the given name.
    ///
    /// Used at registration time to fail fast on misconfigured routes.
    fn has_method(&self, name: &str) -> bool {
        self.method_names().iter().any(|m| m == name)
    }

    /// Invoke a method by name with the given keyword arguments.
    async fn invoke(&self, method: &str, args: CallArgs) -> Result<AgentOutcome, AgentError>;
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;

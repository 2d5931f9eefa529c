//! Agent factory registry.
//!
//! Replaces dynamic reference resolution with an explicit startup-time
//! mapping from string identifiers to pre-registered factory functions. A
//! configured agent kind that is absent from the registry fails fast with
//! [`AgentError::UnknownKind`].

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::{Map, Value};

use crate::agent::Agent;
use crate::error::AgentError;

/// Factory that constructs an agent from configured init arguments.
pub type AgentFactory =
    Arc<dyn Fn(&Map<String, Value>) -> Result<Arc<dyn Agent>, AgentError> + Send + Sync>;

/// Registry of named agent factories.
///
/// Thread-safe; populated once at startup by explicit registration calls.
pub struct AgentRegistry {
    factories: DashMap<String, AgentFactory>,
}

impl AgentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Register a factory under the given kind.
    ///
    /// Returns an error if the kind is already registered.
    pub fn register(&self, kind: impl Into<String>, factory: AgentFactory) -> Result<(), AgentError> {
        let kind = kind.into();
        if self.factories.contains_key(&kind) {
            return Err(AgentError::AlreadyRegistered(kind));
        }
        self.factories.insert(kind, factory);
        Ok(())
    }

    /// Construct an agent of the given kind with the given init arguments.
    pub fn create(
        &self,
        kind: &str,
        init: &Map<String, Value>,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| AgentError::UnknownKind(kind.to_string()))?;
        factory(init)
    }

    /// Check if a kind is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// List all registered kinds.
    pub fn list_kinds(&self) -> Vec<String> {
        self.factories.iter().map(|e| e.key().clone()).collect()
    }

    /// Get the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

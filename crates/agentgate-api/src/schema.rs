//! Compiled schema registry.
//!
//! Named JSON Schema documents from the configuration are compiled once at
//! startup; routes hold an `Arc` to their compiled validator and apply it
//! per request.

use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::RegistrationError;

/// Registry of compiled schema validators, keyed by declared name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    validators: HashMap<String, Arc<Validator>>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every document in the given table.
    pub fn from_documents(docs: &HashMap<String, Value>) -> Result<Self, RegistrationError> {
        let mut registry = Self::new();
        for (name, doc) in docs {
            registry.register(name, doc)?;
        }
        Ok(registry)
    }

    /// Compile and register a single schema document.
    pub fn register(&mut self, name: &str, doc: &Value) -> Result<(), RegistrationError> {
        let validator =
            jsonschema::validator_for(doc).map_err(|e| RegistrationError::InvalidSchema {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        self.validators.insert(name.to_string(), Arc::new(validator));
        Ok(())
    }

    /// Look up a compiled validator by name.
    pub fn get(&self, name: &str) -> Option<Arc<Validator>> {
        self.validators.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Collect every violation of `instance` against the validator.
///
/// Returns one human-readable entry per failing location so a client error
/// can enumerate all offending fields, not just the first.
pub fn violations(validator: &Validator, instance: &Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|err| {
            let path = err.instance_path.to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{path}: {err}")
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

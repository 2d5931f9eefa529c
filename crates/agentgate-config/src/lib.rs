//! # Agentgate Config
//!
//! Configuration management for the agentgate gateway: the declarative
//! route/agent schema, a TOML loader with environment variable expansion,
//! and a startup validator.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

//! Configuration validation.
//!
//! Route-level checks that must hold before the router is built. Errors
//! block startup; warnings are logged and serving continues.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{Config, RouteConfig};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_agent(config, &mut result);
        Self::validate_routes(config, &mut result);

        Ok(result)
    }

    fn validate_agent(config: &Config, result: &mut ValidationResult) {
        if config.agent.kind.trim().is_empty() {
            result.add_error(ValidationError::new("agent.kind", "must not be empty"));
        }
    }

    fn validate_routes(config: &Config, result: &mut ValidationResult) {
        if config.routes.is_empty() {
            result.add_warning(ValidationWarning::new(
                "routes",
                "no routes configured; only /health will be served",
            ));
        }

        let mut names = HashSet::new();
        let mut bindings = HashSet::new();

        for (index, route) in config.routes.iter().enumerate() {
            let at = format!("routes[{index}]");

            if route.name.trim().is_empty() {
                result.add_error(ValidationError::new(format!("{at}.name"), "must not be empty"));
            } else if !names.insert(route.name.clone()) {
                result.add_error(ValidationError::new(
                    format!("{at}.name"),
                    format!("duplicate route name '{}'", route.name),
                ));
            }

            if route.path.is_empty() || !route.path.starts_with('/') {
                result.add_error(ValidationError::new(
                    format!("{at}.path"),
                    "must be a non-empty path starting with '/'",
                ));
            }

            if !bindings.insert((route.path.clone(), route.method)) {
                result.add_error(ValidationError::new(
                    format!("{at}.path"),
                    format!(
                        "duplicate binding {} {}",
                        route.method.as_str(),
                        route.path
                    ),
                ));
            }

            if route.agent_method.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{at}.agent_method"),
                    "must not be empty",
                ));
            }

            Self::validate_schema_refs(config, route, &at, result);
            Self::validate_parameters(route, &at, result);
        }
    }

    fn validate_schema_refs(
        config: &Config,
        route: &RouteConfig,
        at: &str,
        result: &mut ValidationResult,
    ) {
        for (field, reference) in [
            ("request_schema", &route.request_schema),
            ("response_schema", &route.response_schema),
        ] {
            if let Some(name) = reference {
                if !config.schemas.contains_key(name) {
                    result.add_error(ValidationError::new(
                        format!("{at}.{field}"),
                        format!("schema '{name}' is not declared in [schemas]"),
                    ));
                }
            }
        }
    }

    fn validate_parameters(route: &RouteConfig, at: &str, result: &mut ValidationResult) {
        // Mapped values overwrite constants of the same name at request
        // time; a collision is almost always a configuration mistake.
        for param in route.parameter_mapping.keys() {
            if route.constant_parameters.contains_key(param) {
                result.add_warning(ValidationWarning::new(
                    format!("{at}.parameter_mapping"),
                    format!(
                        "parameter '{param}' is also a constant; the mapped payload value wins"
                    ),
                ));
            }
        }

        if route.stream && route.response_envelope.is_some() {
            result.add_warning(ValidationWarning::new(
                format!("{at}.response_envelope"),
                "ignored on stream routes",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

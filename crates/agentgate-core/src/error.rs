//! Agent errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Unknown agent kind: {0}")]
    UnknownKind(String),

    #[error("Agent kind already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Agent method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid agent constructor arguments: {0}")]
    InvalidInit(String),

    #[error("Agent execution failed: {0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_error() {
        let err = AgentError::UnknownKind("llm".to_string());
        assert!(err.to_string().contains("Unknown agent kind"));
        assert!(err.to_string().contains("llm"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = AgentError::AlreadyRegistered("echo".to_string());
        assert!(err.to_string().contains("already registered"));
        assert!(err.to_string().contains("echo"));
    }

    #[test]
    fn test_method_not_found_error() {
        let err = AgentError::MethodNotFound("invoke".to_string());
        assert!(err.to_string().contains("method not found"));
        assert!(err.to_string().contains("invoke"));
    }

    #[test]
    fn test_invalid_init_error() {
        let err = AgentError::InvalidInit("prefix must be a string".to_string());
        assert!(err.to_string().contains("prefix must be a string"));
    }

    #[test]
    fn test_execution_failed_error() {
        let err = AgentError::ExecutionFailed("boom".to_string());
        assert!(err.to_string().contains("execution failed"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_error_debug() {
        let err = AgentError::UnknownKind("x".to_string());
        assert!(format!("{:?}", err).contains("UnknownKind"));
    }
}

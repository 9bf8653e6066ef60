//! Error types for the roster

use roster_domain::{RepositoryError, ValidationError};
use thiserror::Error;

/// General roster error type
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: RosterError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn test_config_error_message() {
        let err = RosterError::Config("maxInputAttempts must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: maxInputAttempts must be at least 1"
        );
    }
}

// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts() {
        let err: AppError = DomainError::InvariantViolation("title is empty".to_string()).into();
        assert!(matches!(err, AppError::Domain(_)));
        assert_eq!(err.to_string(), "Domain error: Invariant violation: title is empty");
    }

    #[test]
    fn test_bad_uuid_converts() {
        let err: AppError = uuid::Uuid::parse_str("lesson-1").unwrap_err().into();
        assert!(matches!(err, AppError::InvalidId(_)));
        assert!(err.to_string().starts_with("Invalid id: "));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }
}

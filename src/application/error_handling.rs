// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for callers
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Configuration could not be loaded (500)
    Configuration,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(app_error: AppError) -> Self {
        match app_error {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Config(message) => {
                error!("Config error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Configuration could not be loaded".to_string(),
                    details: Some(message),
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::InvalidId(uuid_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Invalid id".to_string(),
                details: Some(uuid_error.to_string()),
            },

            AppError::Other(message) => {
                error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

/// Macro to wrap command results with error handling
#[macro_export]
macro_rules! handle_command {
    ($expr:expr) => {
        match $expr {
            Ok(value) => Ok(value),
            Err(e) => Err($crate::application::error_handling::ErrorResponse::from_app_error(e)
                .to_json()),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let response = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(response.error_type, ErrorType::NotFound);
        assert_eq!(response.message, "Resource not found");
    }

    #[test]
    fn test_validation_error() {
        let response = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.message, "Invalid input");
    }

    #[test]
    fn test_domain_error_keeps_details() {
        let response = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("Lesson title is required".to_string()),
        ));
        assert_eq!(response.error_type, ErrorType::DomainError);
        assert_eq!(
            response.details.as_deref(),
            Some("Invariant violation: Lesson title is required")
        );
    }

    #[test]
    fn test_bad_uuid_is_validation() {
        let err: AppError = uuid::Uuid::parse_str("nope").unwrap_err().into();
        let response = ErrorResponse::from_app_error(err);
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.message, "Invalid id");
    }

    #[test]
    fn test_uuid_like_message_is_not_validation() {
        let response =
            ErrorResponse::from_app_error(AppError::Other("UUID error: made up".to_string()));
        assert_eq!(response.error_type, ErrorType::Internal);
    }

    #[test]
    fn test_serialization() {
        let json = ErrorResponse::not_found("Lesson").to_json();
        assert!(json.contains("not_found"));
        assert!(json.contains("Lesson not found"));
    }

    #[test]
    fn test_handle_command_macro() {
        let ok: Result<u8, String> = crate::handle_command!(Ok::<u8, AppError>(7));
        assert_eq!(ok, Ok(7));

        let err: Result<u8, String> = crate::handle_command!(Err::<u8, AppError>(AppError::NotFound));
        assert!(err.unwrap_err().contains("Resource not found"));
    }
}

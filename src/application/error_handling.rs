// src/application/error_handling.rs
//
// User-visible error notifications
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides a consistent error format for any caller
// - Never exposes storage internals
// - Logs the underlying failure for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
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
    /// Resource not found
    NotFound,

    /// Invalid input
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Login or registration rejected
    Authentication,

    /// Caller lacks the required role
    Forbidden,

    /// Persistence failure
    Storage,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Validation(message) => Self::new(ErrorType::Validation, message, None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::InvalidCredentials => {
                Self::new(ErrorType::Authentication, "Invalid email or password", None)
            }

            AppError::InvalidRegistration => Self::new(
                ErrorType::Authentication,
                "Registration failed",
                Some("Check your email, password and role".to_string()),
            ),

            AppError::Forbidden => Self::new(
                ErrorType::Forbidden,
                "You do not have permission to do that",
                None,
            ),

            AppError::QuotaExceeded { needed, quota } => {
                log::warn!("Storage quota exceeded: {} of {} bytes", needed, quota);
                Self::new(
                    ErrorType::Storage,
                    "Storage is full",
                    Some(format!("{} bytes needed, {} allowed", needed, quota)),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Storage,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Storage, "Database connection failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Storage,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Lock(message) => {
                log::error!("Lock error: {}", message);
                Self::new(ErrorType::Internal, "Internal state unavailable", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_identity_errors_are_authentication() {
        for error in [AppError::InvalidCredentials, AppError::InvalidRegistration] {
            let response = ErrorResponse::from_app_error(error);
            assert_eq!(response.error_type, ErrorType::Authentication);
            assert!(!response.success);
        }
    }

    #[test]
    fn test_forbidden_and_quota() {
        let forbidden = ErrorResponse::from_app_error(AppError::Forbidden);
        assert_eq!(forbidden.error_type, ErrorType::Forbidden);

        let quota = ErrorResponse::from_app_error(AppError::QuotaExceeded { needed: 10, quota: 5 });
        assert_eq!(quota.error_type, ErrorType::Storage);
        assert_eq!(quota.details.as_deref(), Some("10 bytes needed, 5 allowed"));
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result: Result<(), AppError> = Err(AppError::Validation("Missing required fields: title".into()));
        let json = result.to_error_response().unwrap_err();

        assert!(json.contains("\"error_type\":\"validation\""));
        assert!(json.contains("Missing required fields: title"));
    }
}

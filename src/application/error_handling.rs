// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Malformed input or data
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Catalog or config could not be loaded
    Configuration,

    /// Platform opener failed
    ExternalService,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Catalog(message) | AppError::Config(message) => {
                error!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Media catalog or configuration could not be loaded".to_string(),
                    details: Some(message),
                }
            }

            AppError::ExternalOpen(message) => Self {
                success: false,
                error_type: ErrorType::ExternalService,
                message: "Unable to open link externally".to_string(),
                details: Some(message),
            },

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
                    message: "Malformed data".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

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
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::constants::{CODE_STORAGE_ERROR, ERR_INTERNAL, ERR_VALIDATION_FAILED};
use crate::models::ErrorResponse;

/// Field name to the list of messages explaining why it was rejected.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Failures raised by the snippet repository.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store refused the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A writer panicked while holding the store lock.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: FieldErrors },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest { code, message } => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: message.clone(),
                    errors: None,
                })
            }
            // Missing records carry no body.
            ApiError::NotFound { .. } => HttpResponse::NotFound().finish(),
            ApiError::InternalServerError { code, message } => {
                error!("{}", message);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: ERR_INTERNAL.to_string(),
                    errors: None,
                })
            }
            ApiError::ValidationError { code, errors } => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: ERR_VALIDATION_FAILED.to_string(),
                    errors: Some(errors.clone()),
                })
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::InternalServerError {
            code: CODE_STORAGE_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

//! Common validation utilities and helpers.

use validator::{ValidationError, ValidationErrors};

use crate::constants::CODE_VALIDATION_FAILED;
use crate::errors::{ApiError, FieldErrors};

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are grouped by the name of the offending field. Errors without a
/// message fall back to their validator code.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: FieldErrors = e
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| {
                    err.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    ApiError::ValidationError {
        code: CODE_VALIDATION_FAILED.to_string(),
        errors,
    }
}

/// Check `value` against a fixed list of allowed choices.
pub fn validate_choice(value: &str, choices: &[&str]) -> Result<(), ValidationError> {
    if choices.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_choice");
    error.message = Some(format!("\"{}\" is not a valid choice.", value).into());
    Err(error)
}

/// Reject text that is empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() {
        return Ok(());
    }
    let mut error = ValidationError::new("blank");
    error.message = Some("This field may not be blank.".into());
    Err(error)
}

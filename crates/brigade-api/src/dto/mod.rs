//! Request and response DTOs.

pub mod request;
pub mod response;

use brigade_core::error::AppError;
use validator::Validate;

/// Runs `validator` derive checks and flattens field errors into a single
/// validation message.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        let mut parts = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", error.code));
                parts.push(format!("{field}: {message}"));
            }
        }
        parts.sort();
        AppError::validation(parts.join("; "))
    })
}

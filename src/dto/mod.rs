use crate::error::AppError;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

/// Rejects absent and blank strings.
pub(crate) fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

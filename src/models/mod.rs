//! Database models and DTOs for all domain entities.

pub mod habit;
pub mod journal;
pub mod mindfulness;
pub mod mood;
pub mod selfcare;
pub mod sleep;
pub mod task;
pub mod user;

use crate::errors::AppError;

/// Reject a supplied text field that is empty once surrounding whitespace is removed.
///
/// `None` means the field was not supplied and passes.
pub fn ensure_not_blank(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::Validation(format!("{field} cannot be blank")))
        }
        _ => Ok(()),
    }
}

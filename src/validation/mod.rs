//! # Field Validation
//!
//! Pure validators for student fields. These run during payload conversion,
//! before any store interaction, so a failing validator aborts the operation
//! with no partial write.

use crate::errors::{ServiceError, ServiceResult};

/// Maximum length for `name` and `city`
pub const MAX_TEXT_LEN: usize = 100;

/// Validate that a value contains only alphabetic characters.
///
/// Empty values and values longer than [`MAX_TEXT_LEN`] are rejected as well,
/// matching the column constraints. Applies to `name` and `city`.
pub fn validate_alphabetic(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.is_empty() {
        return Err(ServiceError::InvalidFieldFormat {
            field,
            message: format!("{field} must not be empty."),
        });
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ServiceError::InvalidFieldFormat {
            field,
            message: format!("{field} must be at most {MAX_TEXT_LEN} characters."),
        });
    }
    if !value.chars().all(char::is_alphabetic) {
        return Err(ServiceError::InvalidFieldFormat {
            field,
            message: format!("{value} contains non-alphabetic characters. Only letters are allowed."),
        });
    }
    Ok(())
}

/// Validate that the string form of a value contains only digit characters.
///
/// Applies to `roll`; a negative number renders with a sign and is rejected.
pub fn validate_digits_only(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ServiceError::InvalidFieldFormat {
            field,
            message: format!("{value} is not a valid roll number. Only digits are allowed."),
        });
    }
    Ok(())
}

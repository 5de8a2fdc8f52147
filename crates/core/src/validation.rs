//! Shared numeric validation helpers.
//!
//! Range checks used by the workload input and the pricing catalog.

use crate::error::CoreError;

/// Validate that a value is finite and `>= 0.0`.
///
/// Returns a `CoreError::InvalidInput` naming the field if not.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{name} must be a finite number >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a value is finite and strictly positive.
pub fn validate_positive(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{name} must be a finite number > 0, got {value}"
        )));
    }
    Ok(())
}

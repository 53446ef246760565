use thiserror::Error;

/// Rejected width bound or width value.
///
/// Returned synchronously by the validating setters; the target is left
/// untouched when this is raised.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidRange {
    #[error("width must not be negative (got {value})")]
    Negative { value: f64 },
    #[error("width must be a number")]
    NotANumber,
    #[error("minimum width must be finite")]
    Infinite,
    #[error("minimum width {min} exceeds maximum width {max}")]
    Inverted { min: f64, max: f64 },
}

/// Checks that `value` is usable as a width: not NaN and not negative.
/// Positive infinity passes; callers that need a finite value check it themselves.
pub(crate) fn check_non_negative(value: f64) -> Result<(), InvalidRange> {
    if value.is_nan() {
        return Err(InvalidRange::NotANumber);
    }
    if value < 0.0 {
        return Err(InvalidRange::Negative { value });
    }
    Ok(())
}

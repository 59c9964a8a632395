//! Error types for star construction and input validation.

use thiserror::Error;

/// Errors raised when star parameters are rejected at the boundary.
///
/// The classifiers themselves have no failure modes; every variant here
/// describes an input that never reaches them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StellarError {
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} must be a finite number, got {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("{quantity} of {value} exceeds {reason} ({limit})")]
    ExceedsLimit {
        quantity: &'static str,
        value: f64,
        limit: f64,
        reason: &'static str,
    },

    #[error("{0} must be set before building a star")]
    MissingParameter(&'static str),
}

pub type Result<T> = std::result::Result<T, StellarError>;

/// Rejects NaN, infinities and values `<= 0`.
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(StellarError::NonFinite { quantity, value });
    }
    if value <= 0.0 {
        return Err(StellarError::NonPositive { quantity, value });
    }
    Ok(value)
}

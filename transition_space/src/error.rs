use thiserror::Error;

/// Rejections raised by the checked [`Transition`](crate::Transition) constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransitionError {
    #[error("{quantity} must be finite, got {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("{quantity} must be strictly positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
}

pub type TransitionResult<T> = Result<T, TransitionError>;

/// Accept `value` only if it is finite and strictly positive.
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> TransitionResult<f64> {
    if !value.is_finite() {
        return Err(TransitionError::NonFinite { quantity, value });
    }
    // -0.0 compares equal to 0.0, so it is rejected here too
    if value <= 0.0 {
        return Err(TransitionError::NonPositive { quantity, value });
    }
    Ok(value)
}

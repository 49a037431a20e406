use thiserror::Error;

/// Domain errors raised by the usage evaluator.
///
/// Kept apart from legitimately-zero readings: a reading of 0 L is a valid
/// input and never produces one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("Invalid capacity: {0} (must be a finite number greater than zero)")]
    InvalidCapacity(f64),

    #[error("Invalid amount: {0} (must be a finite number)")]
    InvalidAmount(f64),
}

pub type UsageResult<T> = Result<T, UsageError>;

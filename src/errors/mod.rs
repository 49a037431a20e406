// Application-wide error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;
pub mod storage;
pub mod usage;

// Re-export commonly used types
pub use storage::{StorageError, StorageResult};
pub use usage::{UsageError, UsageResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // The #[from] attribute lets `?` lift storage failures into AppError::Storage.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("Data error: {0}")]
    Data(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;

//! Picker error types

use thiserror::Error;

/// Result type for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Errors surfaced to the presentation layer.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Malformed add input. Reported synchronously; the operation aborts
    /// with no state change.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<shared::SharedError> for PickerError {
    fn from(err: shared::SharedError) -> Self {
        PickerError::Validation {
            message: err.to_string(),
        }
    }
}

/// Failure talking to the remote store or the local cache slot.
///
/// Never escapes the persistence coordinator as an `Err`: every failure is
/// caught, logged once, and degraded into a fallback outcome.
#[derive(Error, Debug)]
pub enum StoreFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("malformed collection payload: {0}")]
    Decode(String),

    #[error("cache IO error: {0}")]
    CacheIo(#[from] std::io::Error),
}

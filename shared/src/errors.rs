//! Shared error types for the restaurant picker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Inverted price range: min {min} exceeds max {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("Empty field: {field}")]
    EmptyField { field: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

//! Picker client library
//!
//! Candidate-selection and persistence-reconciliation logic for the
//! restaurant picker: interval overlap filtering, the ordered roster,
//! remote sync with degrade-to-local-cache fallback, and the randomized
//! reveal sequencer. The binary in `main.rs` is a thin terminal
//! presentation over this library's public contract.

pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;

// Re-export the public contract
pub use error::{PickerError, PickerResult, StoreFailure};
pub use services::{Coordinator, FileLocalCache, HttpRemoteStore, LoadSource, SyncOutcome};
pub use session::Session;

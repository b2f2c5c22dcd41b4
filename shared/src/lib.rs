//! Shared types for the restaurant picker
//!
//! Contains the data model exchanged between the picker client and the
//! collection webserver, plus logging setup used by both binaries.
//! Component-internal types (service traits, sync outcomes) live in their
//! respective components.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::{SharedError, SharedResult};
pub use types::{BudgetFilter, PriceRange, Restaurant};

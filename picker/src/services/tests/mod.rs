//! Unit tests for the persistence services
//!
//! The coordinator is tested against mocked trait seams; the cache is
//! tested against real temporary files.

pub mod coordinator;

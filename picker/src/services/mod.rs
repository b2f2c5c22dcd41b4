//! Service implementations behind the trait seams

pub mod coordinator;
pub mod local_cache;
pub mod remote_store;

#[cfg(test)]
mod tests;

pub use coordinator::{Coordinator, LoadReport, LoadSource, SyncOutcome};
pub use local_cache::FileLocalCache;
pub use remote_store::HttpRemoteStore;

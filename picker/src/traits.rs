//! Service trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::StoreFailure;
use shared::Restaurant;

/// Remote collection store (the two contracted webserver endpoints).
///
/// The remote is the sole source of truth whenever it is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteStore: Send + Sync + 'static {
    /// Fetch the full collection.
    async fn fetch(&self) -> Result<Vec<Restaurant>, StoreFailure>;

    /// Replace the remote collection with `snapshot` (full-replace write,
    /// not a delta).
    async fn replace(&self, snapshot: &[Restaurant]) -> Result<(), StoreFailure>;
}

/// Durable local fallback slot.
///
/// Read only when the remote load fails, written only when the remote save
/// fails; never merged with remote data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalCache: Send + Sync + 'static {
    /// Read the most recent snapshot, `None` if the slot was never written.
    async fn read(&self) -> Result<Option<Vec<Restaurant>>, StoreFailure>;

    /// Overwrite the slot wholesale with `snapshot`.
    async fn write(&self, snapshot: &[Restaurant]) -> Result<(), StoreFailure>;
}

/// Presentation hook for the reveal sequence.
///
/// Receives each transient intermediate draw; the committed final choice is
/// returned by the sequencer itself, not pushed through the sink.
pub trait RevealSink {
    fn reveal(&mut self, candidate: &Restaurant);
}

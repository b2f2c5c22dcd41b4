//! Persistence coordinator: remote-first with degrade-to-cache fallback

use tracing::{debug, warn};

use crate::traits::{LocalCache, RemoteStore};
use shared::Restaurant;

/// Where an initial load's collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The remote store answered; it is the source of truth.
    Remote,
    /// The remote failed; the most recent local snapshot was used.
    CacheFallback,
    /// The remote failed and no local snapshot exists; starting empty.
    Empty,
}

/// Result of an initial load. Carries the source so the presentation can
/// surface a degradation notice exactly once.
#[derive(Debug)]
pub struct LoadReport {
    pub restaurants: Vec<Restaurant>,
    pub source: LoadSource,
}

/// Result of a full-replace save attempt.
///
/// Saving never errors: persistence failure is non-fatal and the in-memory
/// collection keeps the mutation regardless. Data loss is scoped to "lost
/// on reload" when the outcome is [`SyncOutcome::Lost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Snapshot written to the remote store.
    Remote,
    /// Remote write failed; snapshot written to the local cache instead.
    CacheFallback,
    /// Both writes failed; the snapshot survives only in memory.
    Lost,
}

/// Keeps the external store consistent with the in-memory roster, owning
/// the decision of which source of truth to trust on load.
pub struct Coordinator<R, C> {
    remote: R,
    cache: C,
}

impl<R, C> Coordinator<R, C>
where
    R: RemoteStore,
    C: LocalCache,
{
    pub fn new(remote: R, cache: C) -> Self {
        Self { remote, cache }
    }

    /// One remote fetch attempt, falling back to the cache snapshot.
    ///
    /// The cache is read only on remote failure and never merged with
    /// remote data.
    pub async fn load(&self) -> LoadReport {
        match self.remote.fetch().await {
            Ok(restaurants) => {
                debug!(count = restaurants.len(), "loaded collection from remote store");
                LoadReport {
                    restaurants,
                    source: LoadSource::Remote,
                }
            }
            Err(failure) => {
                warn!(%failure, "remote load failed; falling back to local cache");
                match self.cache.read().await {
                    Ok(Some(restaurants)) => LoadReport {
                        restaurants,
                        source: LoadSource::CacheFallback,
                    },
                    Ok(None) => LoadReport {
                        restaurants: Vec::new(),
                        source: LoadSource::Empty,
                    },
                    Err(cache_failure) => {
                        warn!(%cache_failure, "local cache unreadable; starting empty");
                        LoadReport {
                            restaurants: Vec::new(),
                            source: LoadSource::Empty,
                        }
                    }
                }
            }
        }
    }

    /// One full-replace remote write attempt, degrading to a wholesale
    /// cache write. At most one attempt per side; no retries.
    pub async fn save(&self, snapshot: &[Restaurant]) -> SyncOutcome {
        match self.remote.replace(snapshot).await {
            Ok(()) => {
                debug!(count = snapshot.len(), "collection synced to remote store");
                SyncOutcome::Remote
            }
            Err(failure) => {
                warn!(%failure, "remote save failed; writing snapshot to local cache");
                match self.cache.write(snapshot).await {
                    Ok(()) => SyncOutcome::CacheFallback,
                    Err(cache_failure) => {
                        warn!(%cache_failure, "cache write failed; collection is in-memory only");
                        SyncOutcome::Lost
                    }
                }
            }
        }
    }
}

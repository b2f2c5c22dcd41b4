//! The explicitly-owned per-run session
//!
//! Ties the roster to the persistence coordinator with injected services,
//! the shape the rest of the workspace follows: construct concrete services
//! at the binary boundary, hand them to a generic owner. One session exists
//! per run; there is no process-wide singleton.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::core::roster::Roster;
use crate::core::sequencer::Sequencer;
use crate::error::PickerResult;
use crate::services::coordinator::{Coordinator, LoadSource, SyncOutcome};
use crate::traits::{LocalCache, RemoteStore, RevealSink};
use shared::{BudgetFilter, Restaurant};

/// Session owning the in-memory collection and its persistence.
///
/// Mutations complete in memory first; the corresponding sync is spawned
/// fire-and-forget afterwards, so renders never wait on persistence.
/// Overlapping syncs may finish out of order; each one carries the full
/// snapshot, so the remote side is last-write-wins. Single active client
/// per remote store is an explicit constraint of this design.
pub struct Session<R, C>
where
    R: RemoteStore,
    C: LocalCache,
{
    roster: Roster,
    coordinator: Arc<Coordinator<R, C>>,
    sequencer: Sequencer,
    syncs: JoinSet<SyncOutcome>,
}

impl<R, C> Session<R, C>
where
    R: RemoteStore,
    C: LocalCache,
{
    pub fn new(remote: R, cache: C) -> Self {
        Self::with_sequencer(remote, cache, Sequencer::default())
    }

    pub fn with_sequencer(remote: R, cache: C, sequencer: Sequencer) -> Self {
        Self {
            roster: Roster::new(),
            coordinator: Arc::new(Coordinator::new(remote, cache)),
            sequencer,
            syncs: JoinSet::new(),
        }
    }

    /// Initialize the roster from the coordinator, replacing any prior
    /// state. Returns where the collection came from so the presentation
    /// can surface a degradation notice.
    pub async fn load(&mut self) -> LoadSource {
        let report = self.coordinator.load().await;
        self.roster = Roster::from_records(report.restaurants);
        report.source
    }

    /// Add a restaurant, then queue a fire-and-forget sync.
    pub fn add(
        &mut self,
        name: &str,
        category: &str,
        min_price: u32,
        max_price: Option<u32>,
    ) -> PickerResult<Restaurant> {
        let record = self.roster.add(name, category, min_price, max_price)?;
        self.queue_sync();
        Ok(record)
    }

    /// Delete by id, queueing a sync only when something was removed.
    pub fn delete(&mut self, id: u32) -> bool {
        let removed = self.roster.delete(id);
        if removed {
            self.queue_sync();
        }
        removed
    }

    pub fn query(&self, filter: &BudgetFilter) -> Vec<&Restaurant> {
        self.roster.query(filter)
    }

    pub fn distinct_categories(&self) -> std::collections::BTreeSet<String> {
        self.roster.distinct_categories()
    }

    pub fn records(&self) -> &[Restaurant] {
        self.roster.records()
    }

    /// Query, then run the reveal sequence over the matching candidates.
    ///
    /// Returns `Ok(None)` when nothing matches (the presentation shows its
    /// "no match" state instead of a reveal). While a sequence is running
    /// the trigger stays disabled: exclusivity rides on `&mut self`, so a
    /// second pick cannot start until the running one commits, and a pick
    /// cannot be cancelled once started.
    pub async fn pick(
        &mut self,
        filter: &BudgetFilter,
        sink: &mut dyn RevealSink,
    ) -> PickerResult<Option<Restaurant>> {
        let candidates: Vec<Restaurant> =
            self.roster.query(filter).into_iter().cloned().collect();
        if candidates.is_empty() {
            return Ok(None);
        }

        let committed = self.sequencer.run(&candidates, sink).await;
        Ok(Some(committed))
    }

    /// Await all outstanding sync tasks.
    ///
    /// A long-lived interactive presentation never needs this; a
    /// short-lived CLI calls it once before exit so fire-and-forget syncs
    /// are not killed with the process.
    pub async fn flush(&mut self) -> PickerResult<Vec<SyncOutcome>> {
        let mut outcomes = Vec::new();
        while let Some(joined) = self.syncs.join_next().await {
            outcomes.push(joined?);
        }
        Ok(outcomes)
    }

    /// Spawn a sync of the current snapshot. The mutation that triggered it
    /// is already visible to renders; completion order is not guaranteed.
    fn queue_sync(&mut self) {
        let coordinator = Arc::clone(&self.coordinator);
        let snapshot = self.roster.snapshot();
        self.syncs.spawn(async move { coordinator.save(&snapshot).await });
    }
}

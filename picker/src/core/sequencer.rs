//! Picker sequencer: randomized reveal ending in one committed choice

use std::time::Duration;

use rand::Rng;

use crate::traits::RevealSink;
use shared::Restaurant;

/// Number of intermediate draws shown before the result commits.
pub const DEFAULT_REVEAL_DRAWS: usize = 10;
/// Pause between intermediate draws.
pub const DEFAULT_REVEAL_CADENCE: Duration = Duration::from_millis(100);

/// Drives the timed reveal sequence: a fixed number of uniform draws with
/// replacement surfaced to the sink as transient updates, then one final
/// independent uniform draw that becomes the committed result.
#[derive(Debug, Clone)]
pub struct Sequencer {
    draws: usize,
    cadence: Duration,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DRAWS, DEFAULT_REVEAL_CADENCE)
    }
}

impl Sequencer {
    pub fn new(draws: usize, cadence: Duration) -> Self {
        Self { draws, cadence }
    }

    /// Run the reveal sequence and return the committed choice.
    ///
    /// Callers guarantee a non-empty candidate set; the presentation shows a
    /// "no match" state instead of sequencing over nothing. Draws are
    /// uniform over the candidate indices with no weighting.
    ///
    /// # Panics
    ///
    /// Panics if `candidates` is empty.
    pub async fn run(&self, candidates: &[Restaurant], sink: &mut dyn RevealSink) -> Restaurant {
        assert!(!candidates.is_empty(), "reveal sequence needs at least one candidate");

        for _ in 0..self.draws {
            tokio::time::sleep(self.cadence).await;
            let index = rand::thread_rng().gen_range(0..candidates.len());
            sink.reveal(&candidates[index]);
        }

        // The committed draw is independent of the reveals; it need not
        // equal the last transient one.
        let index = rand::thread_rng().gen_range(0..candidates.len());
        candidates[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PriceRange;

    struct Recorder {
        seen: Vec<u32>,
    }

    impl RevealSink for Recorder {
        fn reveal(&mut self, candidate: &Restaurant) {
            self.seen.push(candidate.id);
        }
    }

    fn restaurant(id: u32, name: &str) -> Restaurant {
        Restaurant::new(id, name, "Noodles", PriceRange::new(50, Some(100)).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn singleton_candidate_always_wins() {
        let candidates = vec![restaurant(1, "Lucky Noodles")];
        let sequencer = Sequencer::new(5, Duration::ZERO);
        let mut sink = Recorder { seen: Vec::new() };

        let committed = sequencer.run(&candidates, &mut sink).await;

        assert_eq!(committed.id, 1);
        assert!(sink.seen.iter().all(|&id| id == 1));
    }

    #[tokio::test]
    async fn sink_sees_exactly_the_configured_number_of_draws() {
        let candidates = vec![restaurant(1, "Lucky Noodles"), restaurant(2, "Stone Oven")];
        let sequencer = Sequencer::new(7, Duration::ZERO);
        let mut sink = Recorder { seen: Vec::new() };

        let committed = sequencer.run(&candidates, &mut sink).await;

        assert_eq!(sink.seen.len(), 7);
        assert!(candidates.iter().any(|r| r.id == committed.id));
        assert!(sink.seen.iter().all(|id| candidates.iter().any(|r| r.id == *id)));
    }
}

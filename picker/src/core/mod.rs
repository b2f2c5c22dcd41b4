//! Core picker logic: overlap filtering, the roster, and the reveal
//! sequencer. Everything here is independent of the persistence services.

pub mod overlap;
pub mod roster;
pub mod sequencer;

pub use overlap::overlaps;
pub use roster::Roster;
pub use sequencer::Sequencer;

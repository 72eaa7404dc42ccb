//! The playable duel: turn controller, play policies, pacing and snapshots.

pub mod duel;
pub mod pacing;
pub mod policy;
pub mod snapshot;

pub use duel::{Duel, StepOutcome};
pub use pacing::{NoPacing, PacingBeat, PacingHook, SleepPacing};
pub use policy::{policy_for, AwaitInput, FirstTwoCards, PlayDecision, PlayPolicy};
pub use snapshot::{GameSnapshot, SideView};

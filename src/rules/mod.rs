//! Game rules: stat resolution, combat and the rules-engine trait.
//!
//! - `stats`: pure mapping from two cards to a champion's attack/defense
//! - `combat`: one battle phase between two sides
//! - `engine`: `RulesEngine` action surface and `GameResult`
//! - `error`: `RequestError`, why an external request was rejected

pub mod combat;
pub mod engine;
pub mod error;
pub mod stats;

pub use combat::{resolve_combat, CombatOutcome};
pub use engine::{GameResult, RulesEngine};
pub use error::RequestError;
pub use stats::{calculate_champion_stats, stats_for_ranks};

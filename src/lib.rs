//! # champion-duel
//!
//! A two-player card game engine. Each side draws from its own shuffled
//! 52-card deck, combines pairs of hand cards into champions, and sends
//! ready champions into combat until one side's life reaches zero.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `Duel` owns the whole `GameState`. Stat resolution
//!    and combat receive player state by reference.
//!
//! 2. **Stable Identity**: Every card and champion carries an `EntityId`.
//!    Duplicate ranks are told apart by id, never by value.
//!
//! 3. **Deterministic**: The same seed and request sequence replay the same
//!    game, event for event.
//!
//! ## Architecture
//!
//! - **One Play-Phase Path**: Human and scripted sides both go through a
//!   `PlayPolicy`. A human side answers `Await` and the turn loop suspends
//!   until `summon`/`advance` requests arrive.
//!
//! - **Events, Not Polling**: Every mutation emits a `GameEvent` tagged with
//!   a channel (`system`, `side-A`, `side-B`).
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, state, actions, RNG, configuration
//! - `cards`: Cards, the deck factory and champions
//! - `rules`: Stat resolution, combat, `RulesEngine` and request errors
//! - `events`: Game events, the bounded log and subscribers
//! - `game`: The `Duel` turn controller, play policies, pacing, snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap,
    GameRng, GameRngState,
    Controller, GameConfig, PacingDelays,
    Phase, Action, ActionRecord,
    GameState, PlayerState,
};

pub use crate::cards::{Card, Champion, ChampionStats, Rank, Suit};

pub use crate::rules::{
    RulesEngine, GameResult, RequestError, CombatOutcome,
    calculate_champion_stats, resolve_combat,
};

pub use crate::events::{Channel, EventRecord, EventSink, GameEvent, Severity};

pub use crate::game::{
    Duel, GameSnapshot,
    PlayDecision, PlayPolicy, AwaitInput, FirstTwoCards,
    PacingHook, NoPacing, SleepPacing,
};

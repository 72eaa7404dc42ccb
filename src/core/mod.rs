//! Core engine types: entities, players, state, actions, RNG, configuration.
//!
//! This module contains the building blocks every other module shares.
//! Nothing here knows how combat or stat resolution work.

pub mod action;
pub mod config;
pub mod entity;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{Controller, GameConfig, PacingDelays};
pub use entity::{EntityAllocator, EntityId};
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState, Selection, MAX_SELECTION};

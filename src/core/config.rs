//! Game configuration types.
//!
//! `GameConfig` collects every tunable of a duel: starting life, hand
//! sizes, who controls each side, the RNG seed and the pacing delays a
//! presentation layer may honor between phases.
//!
//! ```
//! use champion_duel::core::{Controller, GameConfig, PlayerId};
//!
//! let config = GameConfig::default()
//!     .with_seed(7)
//!     .with_controller(PlayerId::ONE, Controller::Scripted)
//!     .with_turn_limit(200);
//!
//! assert_eq!(config.starting_life, 20);
//! assert_eq!(config.opening_hand, 8);
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Who drives a side's play phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Waits for external select/summon/advance requests.
    Human,
    /// Summons the first two hand cards and proceeds automatically.
    Scripted,
}

/// Delays, in milliseconds, a pacing hook may wait after each beat.
///
/// Defaults mirror the pauses of the browser version of the game.
/// They never influence game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingDelays {
    /// After champions are readied.
    pub ready_ms: u64,
    /// After the draw.
    pub draw_ms: u64,
    /// After a scripted summon.
    pub summon_ms: u64,
    /// After a scripted play phase completes.
    pub play_ms: u64,
    /// After combat resolves.
    pub battle_ms: u64,
    /// After the end phase, before the next turn.
    pub end_ms: u64,
}

impl Default for PacingDelays {
    fn default() -> Self {
        Self {
            ready_ms: 1000,
            draw_ms: 1000,
            summon_ms: 1000,
            play_ms: 1500,
            battle_ms: 2000,
            end_ms: 500,
        }
    }
}

impl PacingDelays {
    /// All delays zero.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            ready_ms: 0,
            draw_ms: 0,
            summon_ms: 0,
            play_ms: 0,
            battle_ms: 0,
            end_ms: 0,
        }
    }
}

/// Complete configuration for a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Life each side starts with.
    pub starting_life: i64,

    /// Cards drawn per side before the first turn.
    pub opening_hand: usize,

    /// Cards drawn in each draw phase.
    pub draws_per_turn: usize,

    /// Side that takes the first turn.
    pub first_player: PlayerId,

    /// Controller per side.
    pub controllers: PlayerMap<Controller>,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Ends the game as a draw once this many turns have been played.
    /// `None` for unlimited.
    pub turn_limit: Option<u32>,

    /// Number of events the in-memory log retains.
    pub event_log_capacity: usize,

    /// Delays for pacing hooks.
    pub pacing: PacingDelays,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            opening_hand: 8,
            draws_per_turn: 1,
            first_player: PlayerId::ONE,
            controllers: PlayerMap::new(|p| {
                if p == PlayerId::ONE {
                    Controller::Human
                } else {
                    Controller::Scripted
                }
            }),
            seed: None,
            turn_limit: None,
            event_log_capacity: 50,
            pacing: PacingDelays::default(),
        }
    }
}

impl GameConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set a side's controller.
    #[must_use]
    pub fn with_controller(mut self, player: PlayerId, controller: Controller) -> Self {
        self.controllers[player] = controller;
        self
    }

    /// Set a turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Set the event log capacity.
    #[must_use]
    pub fn with_event_log_capacity(mut self, capacity: usize) -> Self {
        self.event_log_capacity = capacity;
        self
    }

    /// Set pacing delays.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingDelays) -> Self {
        self.pacing = pacing;
        self
    }

    /// Controller of a side.
    #[must_use]
    pub fn controller(&self, player: PlayerId) -> Controller {
        self.controllers[player]
    }
}

//! Turn phases.
//!
//! A turn walks `Ready → Draw → Play → Battle → End` for the active side,
//! then hands over to the opponent's `Ready`. `Start` exists only between
//! `start_game()` and the first turn; `GameOver` is terminal.

use serde::{Deserialize, Serialize};

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Decks built, opening hands drawn, first turn not yet begun.
    #[default]
    Start,
    /// Active side's champions lose summoning sickness.
    Ready,
    /// Active side draws.
    Draw,
    /// Active side may summon; the human side suspends here.
    Play,
    /// Active side's ready champions attack.
    Battle,
    /// Bookkeeping, then the turn passes.
    End,
    /// Terminal.
    GameOver,
}

impl Phase {
    /// Lowercase name used in log lines and snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Ready => "ready",
            Phase::Draw => "draw",
            Phase::Play => "play",
            Phase::Battle => "battle",
            Phase::End => "end",
            Phase::GameOver => "game-over",
        }
    }

    /// The phase that follows this one within the turn cycle.
    ///
    /// `End` wraps to `Ready` (of the other side); `GameOver` stays put.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Start => Phase::Ready,
            Phase::Ready => Phase::Draw,
            Phase::Draw => Phase::Play,
            Phase::Play => Phase::Battle,
            Phase::Battle => Phase::End,
            Phase::End => Phase::Ready,
            Phase::GameOver => Phase::GameOver,
        }
    }

    /// Check if this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Rules engine trait for the duel.
//!
//! `RulesEngine` is the action-level surface of a game:
//! - What actions are legal
//! - How actions modify state
//! - Win/draw conditions

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, PlayerId};

use super::error::RequestError;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// No winner (turn limit reached).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins!"),
            GameResult::Draw => f.write_str("Draw."),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must leave state untouched when it returns `Err`
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Apply an action on behalf of a player.
    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), RequestError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether an action is currently legal for a player.
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(player).contains(action)
    }
}

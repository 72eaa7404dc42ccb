//! External requests and their history.
//!
//! An `Action` is one request from the presentation layer: select or
//! deselect a hand card, summon two cards, or advance the turn. Accepted
//! actions are recorded as `ActionRecord`s so a game can be replayed from
//! its seed.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;

/// A request a side can make.
///
/// ## Example
///
/// ```
/// use champion_duel::core::{Action, EntityId};
///
/// let summon = Action::Summon(EntityId(4), EntityId(9));
/// assert_eq!(summon.cards(), vec![EntityId(4), EntityId(9)]);
/// assert!(Action::Advance.cards().is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Add a hand card to the selection.
    Select(EntityId),
    /// Remove a card from the selection.
    Deselect(EntityId),
    /// Combine two hand cards into a champion.
    Summon(EntityId, EntityId),
    /// Proceed: from play to battle, or resume the turn loop.
    Advance,
}

impl Action {
    /// Cards referenced by this action.
    #[must_use]
    pub fn cards(&self) -> Vec<EntityId> {
        match *self {
            Action::Select(card) | Action::Deselect(card) => vec![card],
            Action::Summon(a, b) => vec![a, b],
            Action::Advance => Vec::new(),
        }
    }

    /// Short verb for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Select(_) => "select",
            Action::Deselect(_) => "deselect",
            Action::Summon(..) => "summon",
            Action::Advance => "advance",
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

use thiserror::Error;

use crate::core::{EntityId, Phase};

/// Reasons an external request is rejected.
///
/// A rejected request never changes game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("the game has not started")]
    GameNotStarted,

    #[error("the game is over")]
    GameOver,

    #[error("expected the {expected} phase, but the game is in the {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("it is not a human-controlled side's turn")]
    NotHumanTurn,

    #[error("card {0} is not in hand")]
    CardNotInHand(EntityId),

    #[error("card {0} is not selected")]
    NotSelected(EntityId),

    #[error("two cards are already selected")]
    SelectionFull,

    #[error("a champion needs two different cards")]
    DuplicateCard,

    #[error("select exactly two cards to summon")]
    SelectionIncomplete,
}

//! Play-phase policies.
//!
//! Both sides go through the same decision point. A human-controlled side
//! answers `Await` and the controller suspends until an external request
//! arrives; a scripted side answers immediately.

use crate::core::{Controller, EntityId, PlayerId, PlayerState};

/// What a side does when its play phase begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDecision {
    /// Suspend until `summon` / `advance` requests arrive.
    Await,
    /// Summon these two hand cards, then move on to battle.
    Summon(EntityId, EntityId),
    /// Move on to battle without summoning.
    Proceed,
}

/// Decides a side's play phase.
pub trait PlayPolicy: Send + Sync {
    fn decide(&self, player: PlayerId, state: &PlayerState) -> PlayDecision;
}

/// Waits for external input.
#[derive(Clone, Copy, Debug, Default)]
pub struct AwaitInput;

impl PlayPolicy for AwaitInput {
    fn decide(&self, _player: PlayerId, _state: &PlayerState) -> PlayDecision {
        PlayDecision::Await
    }
}

/// Summons the first two cards in hand, if there are two.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTwoCards;

impl PlayPolicy for FirstTwoCards {
    fn decide(&self, _player: PlayerId, state: &PlayerState) -> PlayDecision {
        match state.hand.as_slice() {
            [first, second, ..] => PlayDecision::Summon(first.id, second.id),
            _ => PlayDecision::Proceed,
        }
    }
}

/// Default policy for a controller.
#[must_use]
pub fn policy_for(controller: Controller) -> Box<dyn PlayPolicy> {
    match controller {
        Controller::Human => Box::new(AwaitInput),
        Controller::Scripted => Box::new(FirstTwoCards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn hand(ids: &[u32]) -> PlayerState {
        let mut p = PlayerState::new(20);
        p.hand = ids
            .iter()
            .map(|&id| Card::new(EntityId(id), Rank::Four, Suit::Diamonds))
            .collect();
        p
    }

    #[test]
    fn test_await_input() {
        assert_eq!(
            AwaitInput.decide(PlayerId::ONE, &hand(&[1, 2, 3])),
            PlayDecision::Await
        );
    }

    #[test]
    fn test_first_two_cards() {
        assert_eq!(
            FirstTwoCards.decide(PlayerId::TWO, &hand(&[7, 3, 9])),
            PlayDecision::Summon(EntityId(7), EntityId(3))
        );
        assert_eq!(
            FirstTwoCards.decide(PlayerId::TWO, &hand(&[7])),
            PlayDecision::Proceed
        );
        assert_eq!(
            FirstTwoCards.decide(PlayerId::TWO, &hand(&[])),
            PlayDecision::Proceed
        );
    }

    #[test]
    fn test_policy_for_controller() {
        let state = hand(&[1, 2]);
        assert_eq!(
            policy_for(Controller::Human).decide(PlayerId::ONE, &state),
            PlayDecision::Await
        );
        assert_eq!(
            policy_for(Controller::Scripted).decide(PlayerId::ONE, &state),
            PlayDecision::Summon(EntityId(1), EntityId(2))
        );
    }
}

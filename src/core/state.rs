//! Game state: per-player zones and the shared turn state.
//!
//! ## PlayerState
//!
//! One side's life total, deck, hand, battlefield and card selection.
//!
//! ## GameState
//!
//! Complete game state including:
//! - Both player states
//! - Active player, phase, turn number and result
//! - Entity allocator and RNG
//! - Accepted-action history

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::entity::{EntityAllocator, EntityId};
use super::phase::Phase;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Champion};
use crate::rules::GameResult;

/// Maximum number of cards a side may have selected.
pub const MAX_SELECTION: usize = 2;

/// Card selection: at most two ids, kept inline.
pub type Selection = SmallVec<[EntityId; MAX_SELECTION]>;

/// One side's zones and life total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Life total. The side loses at 0 or below.
    pub life: i64,

    /// Draw pile; index 0 is the next card drawn.
    pub deck: Vec<Card>,

    /// Cards in hand, in draw order.
    pub hand: Vec<Card>,

    /// Champions in summon order.
    pub battlefield: Vec<Champion>,

    /// Cards chosen for the next summon (human side only).
    pub selected_cards: Selection,
}

impl PlayerState {
    /// Fresh state with the given life and an empty deck.
    #[must_use]
    pub fn new(life: i64) -> Self {
        Self {
            life,
            ..Self::default()
        }
    }

    /// Check if this side is still in the game.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Move the front card of the deck into the hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            return None;
        }
        let card = self.deck.remove(0);
        self.hand.push(card);
        Some(card)
    }

    /// Find a hand card by id.
    #[must_use]
    pub fn hand_card(&self, id: EntityId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Check if a card is in hand.
    #[must_use]
    pub fn holds(&self, id: EntityId) -> bool {
        self.hand_card(id).is_some()
    }

    /// Remove a card from hand by id.
    ///
    /// Returns the card if it was found.
    pub fn take_from_hand(&mut self, id: EntityId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Check if a card is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected_cards.contains(&id)
    }

    /// Clear summoning sickness for every champion.
    ///
    /// Returns how many champions were readied.
    pub fn ready_champions(&mut self) -> usize {
        for champion in &mut self.battlefield {
            champion.ready();
        }
        self.battlefield.len()
    }

    /// Champions that may attack this turn, in battlefield order.
    pub fn ready_attackers(&self) -> impl Iterator<Item = &Champion> {
        self.battlefield.iter().filter(|c| c.can_attack)
    }

    /// Find a champion by id.
    #[must_use]
    pub fn champion(&self, id: EntityId) -> Option<&Champion> {
        self.battlefield.iter().find(|c| c.id == id)
    }
}

/// Full game state.
///
/// Owned exclusively by the turn controller; everything else receives it
/// by reference.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Both sides.
    pub players: PlayerMap<PlayerState>,

    /// Side whose turn it is.
    pub active_player: PlayerId,

    /// Current phase.
    pub phase: Phase,

    /// True between `start_game()` and game over.
    pub started: bool,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Final result once the game is over.
    pub result: Option<GameResult>,

    /// Accepted external requests, for replay.
    pub action_history: Vector<ActionRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Entity ID allocator.
    pub entities: EntityAllocator,
}

impl GameState {
    /// Create an empty, not-yet-started game state.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            players: PlayerMap::with_default(),
            active_player: PlayerId::ONE,
            phase: Phase::Start,
            started: false,
            turn_number: 1,
            action_sequence: 0,
            result: None,
            action_history: Vector::new(),
            rng,
            entities: EntityAllocator::new(),
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Get a player's state mutably.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// State of the side whose turn it is.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        &self.players[self.active_player]
    }

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        self.entities.alloc()
    }

    /// Check if the game has reached its terminal phase.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// First side found with life at or below zero.
    #[must_use]
    pub fn defeated_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| !p.is_alive())
            .map(|(id, _)| id)
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, player: PlayerId, action: super::Action) {
        let sequence = self.next_sequence();
        self.action_history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Advance to the opponent's turn.
    pub fn pass_turn(&mut self) {
        self.active_player = self.active_player.opponent();
        self.turn_number += 1;
        self.action_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{create_deck, ChampionStats, Rank, Suit};
    use crate::core::Action;

    fn card(id: u32, rank: Rank) -> Card {
        Card::new(EntityId(id), rank, Suit::Hearts)
    }

    #[test]
    fn test_player_state_draw_from_front() {
        let mut player = PlayerState::new(20);
        player.deck = vec![card(1, Rank::Two), card(2, Rank::Three)];

        assert_eq!(player.draw(), Some(card(1, Rank::Two)));
        assert_eq!(player.hand, vec![card(1, Rank::Two)]);
        assert_eq!(player.deck, vec![card(2, Rank::Three)]);
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut player = PlayerState::new(20);
        assert_eq!(player.draw(), None);
        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_take_from_hand_by_id() {
        let mut player = PlayerState::new(20);
        // Same rank and suit, different identity
        player.hand = vec![card(1, Rank::Five), card(2, Rank::Five)];

        assert_eq!(player.take_from_hand(EntityId(2)), Some(card(2, Rank::Five)));
        assert_eq!(player.hand, vec![card(1, Rank::Five)]);
        assert_eq!(player.take_from_hand(EntityId(99)), None);
    }

    #[test]
    fn test_ready_champions() {
        let mut player = PlayerState::new(20);
        player.battlefield.push(Champion::summon(
            EntityId(10),
            card(1, Rank::Two),
            card(2, Rank::Three),
            ChampionStats::new(3, 2),
        ));

        assert_eq!(player.ready_attackers().count(), 0);
        assert_eq!(player.ready_champions(), 1);
        assert_eq!(player.ready_attackers().count(), 1);
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(GameRng::new(42));

        assert_eq!(state.phase, Phase::Start);
        assert!(!state.started);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.active_player, PlayerId::ONE);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_alloc_entity_shared_with_decks() {
        let mut state = GameState::new(GameRng::new(42));
        let deck = create_deck(&mut state.entities);
        let next = state.alloc_entity();

        assert!(deck.iter().all(|c| c.id != next));
        assert_eq!(next, EntityId(52));
    }

    #[test]
    fn test_defeated_player() {
        let mut state = GameState::new(GameRng::new(1));
        state.players = PlayerMap::new(|_| PlayerState::new(20));
        assert_eq!(state.defeated_player(), None);

        state.player_mut(PlayerId::TWO).life = 0;
        assert_eq!(state.defeated_player(), Some(PlayerId::TWO));
    }

    #[test]
    fn test_record_action_and_pass_turn() {
        let mut state = GameState::new(GameRng::new(1));

        state.record_action(PlayerId::ONE, Action::Advance);
        state.record_action(PlayerId::ONE, Action::Select(EntityId(3)));
        assert_eq!(state.action_history.len(), 2);
        assert_eq!(state.action_history[1].sequence, 1);

        state.pass_turn();
        assert_eq!(state.active_player, PlayerId::TWO);
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.next_sequence(), 0);
    }
}

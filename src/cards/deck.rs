//! Deck factory: the ordered 52-card deck and its shuffle.

use crate::core::{EntityAllocator, GameRng};

use super::card::{Card, Rank, Suit};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build all 52 (suit, rank) combinations in a fixed order.
///
/// Suits go Hearts, Diamonds, Clubs, Spades; ranks Ace through King
/// within each suit. Every card gets a fresh id from `alloc`.
///
/// ```
/// use champion_duel::cards::{create_deck, Rank, Suit};
/// use champion_duel::core::EntityAllocator;
///
/// let mut alloc = EntityAllocator::new();
/// let deck = create_deck(&mut alloc);
///
/// assert_eq!(deck.len(), 52);
/// assert_eq!((deck[0].rank, deck[0].suit), (Rank::Ace, Suit::Hearts));
/// assert_eq!((deck[51].rank, deck[51].suit), (Rank::King, Suit::Spades));
/// ```
pub fn create_deck(alloc: &mut EntityAllocator) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(alloc.alloc(), rank, suit));
        }
    }
    deck
}

/// Shuffle a deck in place (Fisher-Yates).
///
/// Each permutation is equally likely given an unbiased `rng`.
pub fn shuffle_deck(deck: &mut [Card], rng: &mut GameRng) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        deck.swap(i, j);
    }
}

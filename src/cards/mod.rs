//! Card system: cards, the deck factory and champions.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (rank, suit) value with a unique `EntityId`
//! - `Rank` / `Suit`: The 13 ranks and 4 suits of a standard deck
//! - `Champion`: Mutable battlefield unit built from two cards
//! - `ChampionStats`: Attack/defense pair from the stat resolver

pub mod card;
pub mod champion;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use champion::{Champion, ChampionStats};
pub use deck::{create_deck, shuffle_deck, DECK_SIZE};

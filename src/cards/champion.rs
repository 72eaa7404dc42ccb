//! Champions - battlefield units made from two cards.
//!
//! A champion is born summoning sick (`can_attack == false`) and loses the
//! sickness at its owner's next ready phase. Its `defense` drops as it
//! takes combat damage; at zero or below it is destroyed.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

use super::card::Card;

/// Attack and defense derived from a pair of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChampionStats {
    pub attack: i64,
    pub defense: i64,
}

impl ChampionStats {
    #[must_use]
    pub const fn new(attack: i64, defense: i64) -> Self {
        Self { attack, defense }
    }
}

/// A champion on a battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Unique entity ID.
    pub id: EntityId,

    /// Display name, e.g. "Ace & King Combo".
    pub name: String,

    /// Damage dealt in combat. Always at least 1.
    pub attack: i64,

    /// Remaining toughness. Destroyed at 0 or below.
    pub defense: i64,

    /// False while summoning sick.
    pub can_attack: bool,

    /// The two cards consumed to create it.
    pub components: [Card; 2],
}

impl Champion {
    /// Create a summoning-sick champion from two cards and their stats.
    #[must_use]
    pub fn summon(id: EntityId, first: Card, second: Card, stats: ChampionStats) -> Self {
        Self {
            id,
            name: format!("{} & {} Combo", first.rank, second.rank),
            attack: stats.attack,
            defense: stats.defense,
            can_attack: false,
            components: [first, second],
        }
    }

    /// Check if this champion has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.defense <= 0
    }

    /// Clear summoning sickness.
    pub fn ready(&mut self) {
        self.can_attack = true;
    }

    /// Subtract damage from defense.
    pub fn take_damage(&mut self, amount: i64) {
        self.defense -= amount;
    }
}

impl std::fmt::Display for Champion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.defense)
    }
}

//! Entity identification system.
//!
//! Every card and champion has a unique `EntityId`, issued by the game
//! state's allocator when the object is created. Two cards with the same
//! rank and suit (one in each player's deck) are still distinct entities.
//!
//! ## Usage
//!
//! ```
//! use champion_duel::core::EntityId;
//!
//! let card = EntityId(10);
//! assert_eq!(card.raw(), 10);
//! assert_eq!(format!("{}", card), "Entity(10)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card or champion.
///
/// Identity is always by id, never by card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic allocator for entity IDs.
///
/// Lives inside `GameState`; survives `start_game()` so ids are never
/// reused within one engine instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

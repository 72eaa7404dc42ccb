//! Champion stat resolution.
//!
//! Two cards combine into an (attack, defense) pair. Rules are checked in
//! order and the first match wins:
//!
//! | Pair                       | Stats                      |
//! |----------------------------|----------------------------|
//! | Ace + King                 | 10 / 10                    |
//! | Ace + Queen                | 9 / 9                      |
//! | Ace + Jack                 | 8 / 8                      |
//! | Ace + anything else        | (other value + 1) both     |
//! | anything else              | max value / min value      |
//!
//! Both stats are floored at 1 afterwards.

use crate::cards::{Card, ChampionStats, Rank};

/// Stats for a pair of ranks. Order-independent.
///
/// ```
/// use champion_duel::cards::{ChampionStats, Rank};
/// use champion_duel::rules::stats_for_ranks;
///
/// assert_eq!(stats_for_ranks(Rank::King, Rank::Ace), ChampionStats::new(10, 10));
/// assert_eq!(stats_for_ranks(Rank::Seven, Rank::Six), ChampionStats::new(7, 6));
/// assert_eq!(stats_for_ranks(Rank::Ace, Rank::Five), ChampionStats::new(6, 6));
/// ```
#[must_use]
pub fn stats_for_ranks(a: Rank, b: Rank) -> ChampionStats {
    let other_than_ace = match (a, b) {
        (Rank::Ace, other) | (other, Rank::Ace) if other != Rank::Ace => Some(other),
        _ => None,
    };

    let (attack, defense) = match other_than_ace {
        Some(Rank::King) => (10, 10),
        Some(Rank::Queen) => (9, 9),
        Some(Rank::Jack) => (8, 8),
        Some(other) => (other.value() + 1, other.value() + 1),
        None => (a.value().max(b.value()), a.value().min(b.value())),
    };

    ChampionStats::new(attack.max(1), defense.max(1))
}

/// Stats for the champion made from two cards.
#[must_use]
pub fn calculate_champion_stats(a: &Card, b: &Card) -> ChampionStats {
    stats_for_ranks(a.rank, b.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::EntityId;

    #[test]
    fn test_ace_specials_both_orders() {
        for (other, expected) in [(Rank::King, 10), (Rank::Queen, 9), (Rank::Jack, 8)] {
            assert_eq!(stats_for_ranks(Rank::Ace, other), ChampionStats::new(expected, expected));
            assert_eq!(stats_for_ranks(other, Rank::Ace), ChampionStats::new(expected, expected));
        }
    }

    #[test]
    fn test_ace_with_numeral() {
        assert_eq!(stats_for_ranks(Rank::Ace, Rank::Two), ChampionStats::new(3, 3));
        assert_eq!(stats_for_ranks(Rank::Ten, Rank::Ace), ChampionStats::new(11, 11));
    }

    #[test]
    fn test_default_rule() {
        assert_eq!(stats_for_ranks(Rank::Seven, Rank::Six), ChampionStats::new(7, 6));
        assert_eq!(stats_for_ranks(Rank::Six, Rank::Seven), ChampionStats::new(7, 6));
        assert_eq!(stats_for_ranks(Rank::Three, Rank::Three), ChampionStats::new(3, 3));
        assert_eq!(stats_for_ranks(Rank::King, Rank::Two), ChampionStats::new(10, 2));
    }

    #[test]
    fn test_two_aces_fall_through() {
        assert_eq!(stats_for_ranks(Rank::Ace, Rank::Ace), ChampionStats::new(1, 1));
    }

    #[test]
    fn test_every_pair_at_least_one() {
        for a in Rank::ALL {
            for b in Rank::ALL {
                let stats = stats_for_ranks(a, b);
                assert!(stats.attack >= 1 && stats.defense >= 1, "{a} + {b}");
                assert_eq!(stats, stats_for_ranks(b, a));
            }
        }
    }

    #[test]
    fn test_card_wrapper() {
        let ace = Card::new(EntityId(0), Rank::Ace, Suit::Spades);
        let king = Card::new(EntityId(1), Rank::King, Suit::Hearts);
        assert_eq!(calculate_champion_stats(&ace, &king), ChampionStats::new(10, 10));
    }
}

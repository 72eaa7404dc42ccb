//! Combat resolution.
//!
//! One battle phase is a single pass: every ready attacker swings once,
//! strongest first, at the strongest defender still standing. Destroyed
//! champions stay on the battlefield until the pass ends, then both sides
//! are pruned together.

use std::cmp::Reverse;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::core::{EntityId, PlayerId, PlayerState};
use crate::events::{ChampionView, GameEvent};

/// How a combat pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The attacking side had no ready champions.
    NoAttackers,
    /// Every attacker swung and both players survived.
    Resolved,
    /// Direct damage took the defender to 0 or below.
    Lethal { winner: PlayerId },
}

impl CombatOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            CombatOutcome::Lethal { winner } => Some(*winner),
            _ => None,
        }
    }
}

/// Resolve one battle phase with `attacker_id`'s side attacking.
///
/// Events are appended to `events` in the order they happen.
pub fn resolve_combat(
    attacker_id: PlayerId,
    attacker: &mut PlayerState,
    defender: &mut PlayerState,
    events: &mut Vec<GameEvent>,
) -> CombatOutcome {
    let defender_id = attacker_id.opponent();

    let mut order: Vec<usize> = attacker
        .battlefield
        .iter()
        .enumerate()
        .filter(|(_, c)| c.can_attack)
        .map(|(i, _)| i)
        .collect();

    if order.is_empty() {
        events.push(GameEvent::NoAttackers {
            player: attacker_id,
        });
        return CombatOutcome::NoAttackers;
    }

    events.push(GameEvent::AttackDeclared {
        player: attacker_id,
    });

    // sort_by_key is stable: equal attack keeps battlefield order
    order.sort_by_key(|&i| Reverse(attacker.battlefield[i].attack));

    let mut fallen_attackers: FxHashSet<EntityId> = FxHashSet::default();
    let mut fallen_defenders: FxHashSet<EntityId> = FxHashSet::default();
    let mut outcome = CombatOutcome::Resolved;

    for index in order {
        let striker = &attacker.battlefield[index];
        if fallen_attackers.contains(&striker.id) {
            continue;
        }

        match strongest_standing(defender, &fallen_defenders) {
            None => {
                let amount = striker.attack;
                events.push(GameEvent::DirectDamage {
                    attacker: ChampionView::from(striker),
                    target: defender_id,
                    amount,
                });
                defender.life -= amount;
                events.push(GameEvent::LifeChanged {
                    player: defender_id,
                    life: defender.life,
                });
                trace!(amount, life = defender.life, "direct damage");

                if !defender.is_alive() {
                    outcome = CombatOutcome::Lethal {
                        winner: attacker_id,
                    };
                    break;
                }
            }
            Some(target) => {
                let attack_dealt = striker.attack;
                let attack_taken = defender.battlefield[target].attack;

                events.push(GameEvent::Clash {
                    attacker: ChampionView::from(striker),
                    defender: ChampionView::from(&defender.battlefield[target]),
                });

                let blocker = &mut defender.battlefield[target];
                blocker.take_damage(attack_dealt);
                let striker = &mut attacker.battlefield[index];
                striker.take_damage(attack_taken);

                trace!(
                    attacker = %striker.id,
                    attacker_defense = striker.defense,
                    defender = %defender.battlefield[target].id,
                    defender_defense = defender.battlefield[target].defense,
                    "clash"
                );

                if striker.is_destroyed() {
                    fallen_attackers.insert(striker.id);
                    events.push(GameEvent::ChampionDestroyed {
                        player: attacker_id,
                        champion: ChampionView::from(&*striker),
                    });
                }
                let blocker = &defender.battlefield[target];
                if blocker.is_destroyed() {
                    fallen_defenders.insert(blocker.id);
                    events.push(GameEvent::ChampionDestroyed {
                        player: defender_id,
                        champion: ChampionView::from(blocker),
                    });
                }
            }
        }
    }

    attacker.battlefield.retain(|c| !c.is_destroyed());
    defender.battlefield.retain(|c| !c.is_destroyed());

    debug!(
        ?outcome,
        attackers_lost = fallen_attackers.len(),
        defenders_lost = fallen_defenders.len(),
        "combat resolved"
    );

    outcome
}

/// Index of the highest-attack defender not yet destroyed this pass.
/// Ties go to the earlier battlefield position.
fn strongest_standing(defender: &PlayerState, fallen: &FxHashSet<EntityId>) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, champion) in defender.battlefield.iter().enumerate() {
        if fallen.contains(&champion.id) {
            continue;
        }
        if best.map_or(true, |(_, attack)| champion.attack > attack) {
            best = Some((i, champion.attack));
        }
    }
    best.map(|(i, _)| i)
}

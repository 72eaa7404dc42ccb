//! Game event types.
//!
//! Every state mutation in a duel produces a `GameEvent`. Events carry
//! enough data for a renderer to update without reading engine internals,
//! and a `Display` form that reads like a game log line.
//!
//! ## Channels
//!
//! Each event is routed on a `Channel`: `system` for table-wide messages,
//! or one of the two sides (`side-A`, `side-B`) for messages about that
//! side's own cards and life.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Champion};
use crate::core::{EntityId, Phase, PlayerId};
use crate::rules::GameResult;

/// Routing tag for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Table-wide messages.
    System,
    /// Messages about one side.
    Side(PlayerId),
}

impl Channel {
    /// Label used by renderers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::System => "system",
            Channel::Side(player) => player.side_label(),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How noteworthy an event is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Normal game progress.
    Info,
    /// A request was ignored or an action could not happen.
    Notice,
}

/// Champion data captured at the moment an event fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionView {
    pub id: EntityId,
    pub name: String,
    pub attack: i64,
    pub defense: i64,
}

impl From<&Champion> for ChampionView {
    fn from(champion: &Champion) -> Self {
        Self {
            id: champion.id,
            name: champion.name.clone(),
            attack: champion.attack,
            defense: champion.defense,
        }
    }
}

impl std::fmt::Display for ChampionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.defense)
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Decks built and shuffled.
    GameStarted { first_player: PlayerId },

    /// Both opening hands drawn.
    OpeningHandsDrawn { cards: usize },

    /// A side's turn begins.
    TurnStarted { player: PlayerId, turn: u32 },

    /// The state machine entered a phase.
    PhaseChanged { player: PlayerId, phase: Phase },

    /// Summoning sickness cleared for a side's champions.
    ChampionsReadied { player: PlayerId, count: usize },

    /// A card moved from deck to hand.
    CardDrawn { player: PlayerId, card: Card },

    /// A draw was skipped because the deck is empty.
    DeckEmpty { player: PlayerId },

    /// A hand card was added to the selection.
    CardSelected { player: PlayerId, card: EntityId },

    /// A card was removed from the selection.
    CardDeselected { player: PlayerId, card: EntityId },

    /// A new, summoning-sick champion entered the battlefield.
    ChampionSummoned { player: PlayerId, champion: ChampionView },

    /// A scripted side could not summon.
    SummonSkipped { player: PlayerId },

    /// A side begins its attacks.
    AttackDeclared { player: PlayerId },

    /// A side had no ready champions in its battle phase.
    NoAttackers { player: PlayerId },

    /// Two champions exchanged blows. Stats are from before the exchange.
    Clash {
        attacker: ChampionView,
        defender: ChampionView,
    },

    /// An unblocked champion hit a player.
    DirectDamage {
        attacker: ChampionView,
        target: PlayerId,
        amount: i64,
    },

    /// A side's life total changed.
    LifeChanged { player: PlayerId, life: i64 },

    /// A champion's defense reached zero.
    ChampionDestroyed { player: PlayerId, champion: ChampionView },

    /// A request was ignored.
    Notice {
        player: Option<PlayerId>,
        message: String,
    },

    /// The game ended.
    GameOver { result: GameResult },
}

impl GameEvent {
    /// Channel this event is routed on.
    #[must_use]
    pub fn channel(&self) -> Channel {
        match self {
            GameEvent::GameStarted { .. }
            | GameEvent::OpeningHandsDrawn { .. }
            | GameEvent::DeckEmpty { .. }
            | GameEvent::Clash { .. }
            | GameEvent::DirectDamage { .. }
            | GameEvent::Notice { .. }
            | GameEvent::GameOver { .. } => Channel::System,

            GameEvent::PhaseChanged { phase, .. }
                if matches!(phase, Phase::Battle | Phase::End | Phase::GameOver) =>
            {
                Channel::System
            }

            GameEvent::TurnStarted { player, .. }
            | GameEvent::PhaseChanged { player, .. }
            | GameEvent::ChampionsReadied { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::CardSelected { player, .. }
            | GameEvent::CardDeselected { player, .. }
            | GameEvent::ChampionSummoned { player, .. }
            | GameEvent::SummonSkipped { player }
            | GameEvent::AttackDeclared { player }
            | GameEvent::NoAttackers { player }
            | GameEvent::LifeChanged { player, .. }
            | GameEvent::ChampionDestroyed { player, .. } => Channel::Side(*player),
        }
    }

    /// Severity of this event.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            GameEvent::Notice { .. }
            | GameEvent::DeckEmpty { .. }
            | GameEvent::SummonSkipped { .. }
            | GameEvent::NoAttackers { .. } => Severity::Notice,
            _ => Severity::Info,
        }
    }

    /// Build a notice.
    pub fn notice(player: Option<PlayerId>, message: impl Into<String>) -> Self {
        GameEvent::Notice {
            player,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { first_player } => {
                write!(f, "Game starting. {first_player} moves first.")
            }
            GameEvent::OpeningHandsDrawn { cards } => {
                write!(f, "Initial hands drawn ({cards} cards each).")
            }
            GameEvent::TurnStarted { player, turn } => {
                write!(f, "--- {player}'s Turn ({turn}) ---")
            }
            GameEvent::PhaseChanged { player, phase } => match phase {
                Phase::Battle => f.write_str("Battle Phase!"),
                Phase::End => f.write_str("End Phase."),
                _ => write!(f, "{player}: {phase} phase"),
            },
            GameEvent::ChampionsReadied { player, count } => {
                write!(f, "{player}: Readying champions... ({count} ready)")
            }
            GameEvent::CardDrawn { player, .. } => write!(f, "{player} draws a card."),
            GameEvent::DeckEmpty { player } => {
                write!(f, "{player} has no cards left in deck!")
            }
            GameEvent::CardSelected { player, card } => {
                write!(f, "{player} selects {card}.")
            }
            GameEvent::CardDeselected { player, card } => {
                write!(f, "{player} deselects {card}.")
            }
            GameEvent::ChampionSummoned { player, champion } => write!(
                f,
                "{player} summoned a {}/{} champion! It is summoning sick.",
                champion.attack, champion.defense
            ),
            GameEvent::SummonSkipped { player } => {
                write!(f, "{player} could not summon a champion.")
            }
            GameEvent::AttackDeclared { player } => write!(f, "{player} attacks!"),
            GameEvent::NoAttackers { player } => {
                write!(f, "{player} has no champions ready to attack.")
            }
            GameEvent::Clash { attacker, defender } => {
                write!(f, "{attacker} attacks {defender}!")
            }
            GameEvent::DirectDamage {
                attacker,
                target,
                amount,
            } => write!(f, "{attacker} attacks {target} directly for {amount} damage!"),
            GameEvent::LifeChanged { player, life } => write!(f, "{player} life: {life}"),
            GameEvent::ChampionDestroyed { champion, .. } => {
                write!(f, "{} was destroyed!", champion.name)
            }
            GameEvent::Notice { message, .. } => f.write_str(message),
            GameEvent::GameOver { result } => write!(f, "GAME OVER: {result}"),
        }
    }
}

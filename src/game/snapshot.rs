//! Viewer-filtered state snapshots for renderers.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Champion};
use crate::core::{EntityId, GameState, Phase, PlayerId, PlayerState};
use crate::rules::GameResult;

/// One side as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub player: PlayerId,
    pub life: i64,
    pub deck_size: usize,
    pub hand_size: usize,
    /// `None` when the viewer may not see this hand.
    pub hand: Option<Vec<Card>>,
    pub battlefield: Vec<Champion>,
    pub selected: Vec<EntityId>,
}

impl SideView {
    fn capture(player: PlayerId, state: &PlayerState, reveal_hand: bool) -> Self {
        Self {
            player,
            life: state.life,
            deck_size: state.deck.len(),
            hand_size: state.hand.len(),
            hand: reveal_hand.then(|| state.hand.clone()),
            battlefield: state.battlefield.clone(),
            selected: if reveal_hand {
                state.selected_cards.to_vec()
            } else {
                Vec::new()
            },
        }
    }
}

/// Everything a renderer needs for one viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub viewer: PlayerId,
    pub turn: u32,
    pub active_player: PlayerId,
    pub phase: Phase,
    pub started: bool,
    pub result: Option<GameResult>,
    /// The viewer's side.
    pub own: SideView,
    pub opponent: SideView,
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(state: &GameState, viewer: PlayerId) -> Self {
        let rival = viewer.opponent();
        Self {
            viewer,
            turn: state.turn_number,
            active_player: state.active_player,
            phase: state.phase,
            started: state.started,
            result: state.result.clone(),
            own: SideView::capture(viewer, state.player(viewer), true),
            opponent: SideView::capture(rival, state.player(rival), false),
        }
    }
}

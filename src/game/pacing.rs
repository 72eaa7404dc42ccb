//! Pacing hooks.
//!
//! The controller calls a `PacingHook` after each beat of a turn so a
//! presentation layer can slow the game down for viewing. Hooks never see
//! or change game state.

use std::time::Duration;

use crate::core::{PacingDelays, PlayerId};

/// Points in a turn where a pause may happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacingBeat {
    Ready,
    Draw,
    Summon,
    Play,
    Battle,
    End,
}

impl PacingBeat {
    /// Configured delay for this beat.
    #[must_use]
    pub fn delay(self, delays: &PacingDelays) -> Duration {
        let ms = match self {
            PacingBeat::Ready => delays.ready_ms,
            PacingBeat::Draw => delays.draw_ms,
            PacingBeat::Summon => delays.summon_ms,
            PacingBeat::Play => delays.play_ms,
            PacingBeat::Battle => delays.battle_ms,
            PacingBeat::End => delays.end_ms,
        };
        Duration::from_millis(ms)
    }
}

pub trait PacingHook: Send {
    fn pause(&mut self, player: PlayerId, beat: PacingBeat, delays: &PacingDelays);
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl PacingHook for NoPacing {
    fn pause(&mut self, _player: PlayerId, _beat: PacingBeat, _delays: &PacingDelays) {}
}

/// Blocks the calling thread for the configured delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacing;

impl PacingHook for SleepPacing {
    fn pause(&mut self, _player: PlayerId, beat: PacingBeat, delays: &PacingDelays) {
        let delay = beat.delay(delays);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

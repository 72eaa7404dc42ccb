//! The turn/phase controller.
//!
//! `Duel` owns the `GameState` and drives each turn through
//! Ready → Draw → Play → Battle → End. The loop runs until the game needs
//! external input (a human side's play phase) or the game is over.
//!
//! ## Example
//!
//! ```
//! use champion_duel::core::{GameConfig, Phase, PlayerId};
//! use champion_duel::game::Duel;
//!
//! let mut duel = Duel::new(GameConfig::default().with_seed(42));
//! duel.start_game();
//!
//! // Player 1 is human by default and waits in its play phase.
//! assert_eq!(duel.state().phase, Phase::Play);
//! assert_eq!(duel.state().active_player, PlayerId::ONE);
//! assert_eq!(duel.state().player(PlayerId::ONE).hand.len(), 9);
//!
//! duel.advance().unwrap();
//! assert_eq!(duel.state().turn_number, 3);
//! ```

use tracing::{debug, info};

use crate::cards::{create_deck, shuffle_deck, Champion};
use crate::core::{
    Action, Controller, EntityId, GameConfig, GameRng, GameState, Phase, PlayerId, PlayerMap,
    PlayerState, MAX_SELECTION,
};
use crate::events::{ChampionView, EventLog, EventRecord, EventSink, GameEvent};
use crate::rules::{
    calculate_champion_stats, resolve_combat, CombatOutcome, GameResult, RequestError,
    RulesEngine,
};

use super::pacing::{NoPacing, PacingBeat, PacingHook};
use super::policy::{policy_for, PlayDecision, PlayPolicy};
use super::snapshot::GameSnapshot;

/// Result of running one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the next phase.
    Continue,
    /// Suspended in a play phase until external input arrives.
    AwaitingInput,
    /// The game has ended.
    GameOver,
}

/// A two-player champion duel.
pub struct Duel {
    config: GameConfig,
    state: GameState,
    policies: PlayerMap<Box<dyn PlayPolicy>>,
    pacing: Box<dyn PacingHook>,
    log: EventLog,
    sinks: Vec<Box<dyn EventSink>>,
    next_event: u64,
}

impl Default for Duel {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Debug for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duel")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("events", &self.log.len())
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl Duel {
    /// Create a duel. Nothing happens until `start_game()`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(GameRng::from_seed_or_entropy(config.seed));
        let policies = PlayerMap::new(|p| policy_for(config.controller(p)));
        let log = EventLog::new(config.event_log_capacity);
        Self {
            config,
            state,
            policies,
            pacing: Box::new(NoPacing),
            log,
            sinks: Vec::new(),
            next_event: 0,
        }
    }

    /// Replace the pacing hook.
    #[must_use]
    pub fn with_pacing(mut self, hook: impl PacingHook + 'static) -> Self {
        self.pacing = Box::new(hook);
        self
    }

    /// Replace a side's play policy.
    ///
    /// Request methods still check the configured `Controller`.
    #[must_use]
    pub fn with_policy(mut self, player: PlayerId, policy: impl PlayPolicy + 'static) -> Self {
        self.policies[player] = Box::new(policy);
        self
    }

    /// Register a subscriber for every future event.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result.as_ref()
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &EventRecord> {
        self.log.iter()
    }

    /// Take every retained event.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        self.log.drain()
    }

    /// State as seen by one side.
    #[must_use]
    pub fn snapshot_for(&self, viewer: PlayerId) -> GameSnapshot {
        GameSnapshot::capture(&self.state, viewer)
    }

    // === Requests ===

    /// Reset everything, deal fresh decks and run until the first suspension.
    pub fn start_game(&mut self) {
        let mut state = GameState::new(GameRng::from_seed_or_entropy(self.config.seed));
        state.players = PlayerMap::new(|_| PlayerState::new(self.config.starting_life));

        {
            let GameState {
                players,
                entities,
                rng,
                ..
            } = &mut state;
            for player in PlayerId::all() {
                let mut deck = create_deck(entities);
                shuffle_deck(&mut deck, rng);
                players[player].deck = deck;
            }
        }

        state.active_player = self.config.first_player;
        state.started = true;
        self.state = state;
        self.log.clear();
        self.next_event = 0;

        debug!(seed = self.state.rng.seed(), "starting game");
        self.emit(GameEvent::GameStarted {
            first_player: self.config.first_player,
        });

        for player in PlayerId::all() {
            for _ in 0..self.config.opening_hand {
                if self.state.player_mut(player).draw().is_none() {
                    self.emit(GameEvent::DeckEmpty { player });
                    break;
                }
            }
        }
        self.emit(GameEvent::OpeningHandsDrawn {
            cards: self.config.opening_hand,
        });

        self.run();
    }

    /// Toggle a hand card in the human selection.
    ///
    /// A card that is already selected is deselected instead.
    pub fn select_card(&mut self, card: EntityId) -> Result<(), RequestError> {
        let player = self.guard(self.human_play_turn())?;
        let side = self.state.player(player);
        if side.is_selected(card) {
            self.unselect(player, card);
            return Ok(());
        }

        let check = if !side.holds(card) {
            Err(RequestError::CardNotInHand(card))
        } else if side.selected_cards.len() >= MAX_SELECTION {
            Err(RequestError::SelectionFull)
        } else {
            Ok(())
        };
        self.guard(check)?;

        self.state.player_mut(player).selected_cards.push(card);
        self.state.record_action(player, Action::Select(card));
        self.emit(GameEvent::CardSelected { player, card });
        Ok(())
    }

    /// Remove a card from the human selection.
    pub fn deselect_card(&mut self, card: EntityId) -> Result<(), RequestError> {
        let player = self.guard(self.human_play_turn())?;
        let selected = self.state.player(player).is_selected(card);
        self.guard(if selected {
            Ok(())
        } else {
            Err(RequestError::NotSelected(card))
        })?;

        self.unselect(player, card);
        Ok(())
    }

    /// Combine two hand cards into a champion for the human side.
    ///
    /// Returns the new champion's id.
    pub fn summon(&mut self, first: EntityId, second: EntityId) -> Result<EntityId, RequestError> {
        let player = self.guard(self.human_play_turn())?;
        let check = Self::check_pair(self.state.player(player), first, second);
        self.guard(check)?;

        let id = self.summon_cards(player, first, second)?;
        self.state.record_action(player, Action::Summon(first, second));
        Ok(id)
    }

    /// Summon the two currently selected cards.
    pub fn summon_selected(&mut self) -> Result<EntityId, RequestError> {
        let player = self.guard(self.human_play_turn())?;
        let pair = match self.state.player(player).selected_cards.as_slice() {
            [first, second] => Ok((*first, *second)),
            _ => Err(RequestError::SelectionIncomplete),
        };
        let (first, second) = self.guard(pair)?;
        self.summon(first, second)
    }

    /// Proceed.
    ///
    /// In a human play phase this resolves battle and end, runs the other
    /// side's turn and stops at the next suspension. Elsewhere it resumes
    /// the turn loop.
    pub fn advance(&mut self) -> Result<(), RequestError> {
        let check = if self.state.is_over() {
            Err(RequestError::GameOver)
        } else if !self.state.started {
            Err(RequestError::GameNotStarted)
        } else {
            Ok(())
        };
        self.guard(check)?;

        let player = self.state.active_player;
        self.state.record_action(player, Action::Advance);
        if self.state.phase == Phase::Play {
            self.next_phase();
        }

        self.run();
        Ok(())
    }

    /// Apply an action on behalf of the side whose turn it is.
    pub fn apply(&mut self, action: Action) -> Result<(), RequestError> {
        let player = self.state.active_player;
        self.apply_action(player, action)
    }

    // === Turn loop ===

    /// Run phases until input is needed or the game ends.
    fn run(&mut self) -> StepOutcome {
        loop {
            match self.step() {
                StepOutcome::Continue => continue,
                outcome => return outcome,
            }
        }
    }

    /// Process the current phase and move to the next.
    fn step(&mut self) -> StepOutcome {
        match self.state.phase {
            Phase::Start => self.next_phase(),
            Phase::Ready => self.ready_phase(),
            Phase::Draw => self.draw_phase(),
            Phase::Play => self.play_phase(),
            Phase::Battle => self.battle_phase(),
            Phase::End => self.end_phase(),
            Phase::GameOver => StepOutcome::GameOver,
        }
    }

    fn ready_phase(&mut self) -> StepOutcome {
        if let Some(loser) = self.state.defeated_player() {
            return self.finish(GameResult::Winner(loser.opponent()));
        }
        if let Some(limit) = self.config.turn_limit {
            if self.state.turn_number > limit {
                return self.finish(GameResult::Draw);
            }
        }

        let player = self.state.active_player;
        self.emit(GameEvent::TurnStarted {
            player,
            turn: self.state.turn_number,
        });
        let count = self.state.player_mut(player).ready_champions();
        self.emit(GameEvent::ChampionsReadied { player, count });
        self.pause(PacingBeat::Ready);

        self.next_phase()
    }

    fn draw_phase(&mut self) -> StepOutcome {
        let player = self.state.active_player;
        for _ in 0..self.config.draws_per_turn {
            match self.state.player_mut(player).draw() {
                Some(card) => self.emit(GameEvent::CardDrawn { player, card }),
                None => self.emit(GameEvent::DeckEmpty { player }),
            }
        }
        self.pause(PacingBeat::Draw);

        self.next_phase()
    }

    fn play_phase(&mut self) -> StepOutcome {
        let player = self.state.active_player;
        let decision = self.policies[player].decide(player, self.state.player(player));
        debug!(%player, ?decision, "play decision");

        match decision {
            PlayDecision::Await => return StepOutcome::AwaitingInput,
            PlayDecision::Summon(first, second) => {
                let summoned = Self::check_pair(self.state.player(player), first, second)
                    .and_then(|()| self.summon_cards(player, first, second));
                match summoned {
                    Ok(_) => self.pause(PacingBeat::Summon),
                    Err(err) => {
                        self.emit(GameEvent::notice(Some(player), err.to_string()));
                        self.emit(GameEvent::SummonSkipped { player });
                    }
                }
            }
            PlayDecision::Proceed => self.emit(GameEvent::SummonSkipped { player }),
        }
        self.pause(PacingBeat::Play);

        self.next_phase()
    }

    fn battle_phase(&mut self) -> StepOutcome {
        let attacker_id = self.state.active_player;
        let mut events = Vec::new();
        let (attacker, defender) = self.state.players.pair_mut(attacker_id);
        let outcome = resolve_combat(attacker_id, attacker, defender, &mut events);
        for event in events {
            self.emit(event);
        }
        self.pause(PacingBeat::Battle);

        if let CombatOutcome::Lethal { winner } = outcome {
            return self.finish(GameResult::Winner(winner));
        }

        self.next_phase()
    }

    fn end_phase(&mut self) -> StepOutcome {
        self.pause(PacingBeat::End);
        self.state.pass_turn();
        self.next_phase()
    }

    fn finish(&mut self, result: GameResult) -> StepOutcome {
        info!(%result, turn = self.state.turn_number, "game over");
        self.state.result = Some(result.clone());
        self.state.started = false;
        for (_, side) in self.state.players.iter_mut() {
            side.selected_cards.clear();
        }
        self.set_phase(Phase::GameOver);
        self.emit(GameEvent::GameOver { result });
        StepOutcome::GameOver
    }

    // === Helpers ===

    fn next_phase(&mut self) -> StepOutcome {
        self.set_phase(self.state.phase.next());
        StepOutcome::Continue
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = %self.state.phase, to = %phase, "phase transition");
        if self.state.phase == Phase::Play {
            let player = self.state.active_player;
            self.state.player_mut(player).selected_cards.clear();
        }
        self.state.phase = phase;
        if matches!(phase, Phase::Draw | Phase::Play | Phase::Battle | Phase::End) {
            self.emit(GameEvent::PhaseChanged {
                player: self.state.active_player,
                phase,
            });
        }
    }

    fn pause(&mut self, beat: PacingBeat) {
        self.pacing
            .pause(self.state.active_player, beat, &self.config.pacing);
    }

    /// The current side, if it is human-controlled and resting in its play
    /// phase.
    fn human_play_turn(&self) -> Result<PlayerId, RequestError> {
        if self.state.is_over() {
            return Err(RequestError::GameOver);
        }
        if !self.state.started {
            return Err(RequestError::GameNotStarted);
        }
        if self.state.phase != Phase::Play {
            return Err(RequestError::WrongPhase {
                expected: Phase::Play,
                actual: self.state.phase,
            });
        }
        let player = self.state.active_player;
        if self.config.controller(player) != Controller::Human {
            return Err(RequestError::NotHumanTurn);
        }
        Ok(player)
    }

    fn check_pair(side: &PlayerState, first: EntityId, second: EntityId) -> Result<(), RequestError> {
        if first == second {
            return Err(RequestError::DuplicateCard);
        }
        for card in [first, second] {
            if !side.holds(card) {
                return Err(RequestError::CardNotInHand(card));
            }
        }
        Ok(())
    }

    /// Move two validated hand cards onto the battlefield as a champion.
    fn summon_cards(
        &mut self,
        player: PlayerId,
        first: EntityId,
        second: EntityId,
    ) -> Result<EntityId, RequestError> {
        let side = self.state.player_mut(player);
        let slot = side
            .hand
            .iter()
            .position(|c| c.id == first)
            .ok_or(RequestError::CardNotInHand(first))?;
        let a = side.hand.remove(slot);
        let Some(b) = side.take_from_hand(second) else {
            side.hand.insert(slot, a);
            return Err(RequestError::CardNotInHand(second));
        };

        let id = self.state.alloc_entity();
        let champion = Champion::summon(id, a, b, calculate_champion_stats(&a, &b));
        let view = ChampionView::from(&champion);
        let side = self.state.player_mut(player);
        side.battlefield.push(champion);
        side.selected_cards.clear();

        self.emit(GameEvent::ChampionSummoned {
            player,
            champion: view,
        });
        Ok(id)
    }

    fn unselect(&mut self, player: PlayerId, card: EntityId) {
        self.state
            .player_mut(player)
            .selected_cards
            .retain(|id| *id != card);
        self.state.record_action(player, Action::Deselect(card));
        self.emit(GameEvent::CardDeselected { player, card });
    }

    /// Pass `Ok` through; turn `Err` into a notice before returning it.
    fn guard<T>(&mut self, check: Result<T, RequestError>) -> Result<T, RequestError> {
        check.map_err(|err| {
            info!(error = %err, phase = %self.state.phase, "request rejected");
            self.emit(GameEvent::notice(None, err.to_string()));
            err
        })
    }

    fn emit(&mut self, event: GameEvent) {
        let record = EventRecord {
            sequence: self.next_event,
            turn: self.state.turn_number,
            event,
        };
        self.next_event += 1;

        info!(
            target: "champion_duel::events",
            channel = %record.event.channel(),
            turn = record.turn,
            "{}",
            record.event
        );
        for sink in &mut self.sinks {
            sink.on_event(&record);
        }
        self.log.push(record);
    }
}

impl RulesEngine for Duel {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        match self.human_play_turn() {
            Ok(active) if active == player => {}
            _ => return Vec::new(),
        }

        let side = self.state.player(player);
        let mut actions = Vec::new();

        for card in &side.hand {
            if side.is_selected(card.id) {
                actions.push(Action::Deselect(card.id));
            } else if side.selected_cards.len() < MAX_SELECTION {
                actions.push(Action::Select(card.id));
            }
        }
        for (i, first) in side.hand.iter().enumerate() {
            for second in &side.hand[i + 1..] {
                actions.push(Action::Summon(first.id, second.id));
            }
        }
        actions.push(Action::Advance);

        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), RequestError> {
        if self.state.started && !self.state.is_over() && player != self.state.active_player {
            return self.guard(Err(RequestError::NotHumanTurn));
        }

        match action {
            Action::Select(card) => self.select_card(card),
            Action::Deselect(card) => self.deselect_card(card),
            Action::Summon(first, second) => self.summon(first, second).map(|_| ()),
            Action::Advance => self.advance(),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.result.clone()
    }
}

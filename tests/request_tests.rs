//! External request handling.
//!
//! Every rejected request must leave the game untouched and leave a notice
//! in the event log.

use champion_duel::core::{Action, Controller, EntityId, GameConfig, Phase, PlayerId};
use champion_duel::events::{Channel, GameEvent, Severity};
use champion_duel::game::{Duel, GameSnapshot};
use champion_duel::rules::{RequestError, RulesEngine};

fn started(seed: u64) -> Duel {
    let mut duel = Duel::new(GameConfig::default().with_seed(seed));
    duel.start_game();
    duel
}

fn hand_ids(duel: &Duel) -> Vec<EntityId> {
    duel.state()
        .player(PlayerId::ONE)
        .hand
        .iter()
        .map(|c| c.id)
        .collect()
}

/// Run a request that must fail and check nothing changed but the log.
fn assert_rejected<T: std::fmt::Debug>(
    duel: &mut Duel,
    expected: RequestError,
    request: impl FnOnce(&mut Duel) -> Result<T, RequestError>,
) {
    let before: [GameSnapshot; 2] = [
        duel.snapshot_for(PlayerId::ONE),
        duel.snapshot_for(PlayerId::TWO),
    ];
    let history = duel.state().action_history.len();

    let err = request(duel).unwrap_err();

    assert_eq!(err, expected);
    assert_eq!(duel.snapshot_for(PlayerId::ONE), before[0]);
    assert_eq!(duel.snapshot_for(PlayerId::TWO), before[1]);
    assert_eq!(duel.state().action_history.len(), history);

    let last = duel.events().last().unwrap();
    assert_eq!(last.event, GameEvent::notice(None, expected.to_string()));
    assert_eq!(last.event.channel(), Channel::System);
    assert_eq!(last.event.severity(), Severity::Notice);
}

#[test]
fn test_requests_before_start() {
    let mut duel = Duel::new(GameConfig::default().with_seed(1));

    assert_rejected(&mut duel, RequestError::GameNotStarted, |d| d.advance());
    assert_rejected(&mut duel, RequestError::GameNotStarted, |d| {
        d.summon(EntityId(0), EntityId(1))
    });
    assert_rejected(&mut duel, RequestError::GameNotStarted, |d| {
        d.summon_selected()
    });
}

#[test]
fn test_summon_validation() {
    let mut duel = started(2);
    let hand = hand_ids(&duel);
    let foreign = duel.state().player(PlayerId::TWO).hand[0].id;

    assert_rejected(&mut duel, RequestError::DuplicateCard, |d| {
        d.summon(hand[0], hand[0])
    });
    assert_rejected(&mut duel, RequestError::CardNotInHand(foreign), |d| {
        d.summon(hand[0], foreign)
    });
    assert_rejected(&mut duel, RequestError::CardNotInHand(EntityId(5000)), |d| {
        d.summon(EntityId(5000), hand[1])
    });
    assert_rejected(&mut duel, RequestError::SelectionIncomplete, |d| {
        d.summon_selected()
    });
}

#[test]
fn test_selection_validation() {
    let mut duel = started(3);
    let hand = hand_ids(&duel);
    let foreign = duel.state().player(PlayerId::TWO).hand[0].id;

    assert_rejected(&mut duel, RequestError::CardNotInHand(foreign), |d| {
        d.select_card(foreign)
    });
    assert_rejected(&mut duel, RequestError::NotSelected(hand[0]), |d| {
        d.deselect_card(hand[0])
    });

    duel.select_card(hand[0]).unwrap();
    duel.select_card(hand[1]).unwrap();
    assert_rejected(&mut duel, RequestError::SelectionFull, |d| {
        d.select_card(hand[2])
    });
}

#[test]
fn test_consumed_cards_cannot_be_reused() {
    let mut duel = started(4);
    let hand = hand_ids(&duel);

    duel.summon(hand[0], hand[1]).unwrap();

    assert_rejected(&mut duel, RequestError::CardNotInHand(hand[0]), |d| {
        d.summon(hand[0], hand[2])
    });
    assert_rejected(&mut duel, RequestError::CardNotInHand(hand[1]), |d| {
        d.select_card(hand[1])
    });
}

#[test]
fn test_multiple_summons_per_play_phase() {
    let mut duel = started(5);
    let hand = hand_ids(&duel);

    duel.summon(hand[0], hand[1]).unwrap();
    duel.summon(hand[2], hand[3]).unwrap();

    let side = duel.state().player(PlayerId::ONE);
    assert_eq!(side.battlefield.len(), 2);
    assert_eq!(side.hand.len(), 5);
    assert!(side.battlefield.iter().all(|c| !c.can_attack));
}

#[test]
fn test_no_human_side() {
    let config = GameConfig::default()
        .with_seed(6)
        .with_controller(PlayerId::ONE, Controller::Scripted)
        .with_turn_limit(2);
    let mut duel = Duel::new(config);
    duel.start_game();

    assert_eq!(duel.state().phase, Phase::GameOver);
    assert_rejected(&mut duel, RequestError::GameOver, |d| {
        d.summon(EntityId(0), EntityId(1))
    });
}

#[test]
fn test_apply_action_dispatch() {
    let mut duel = started(7);
    let hand = hand_ids(&duel);

    assert_rejected(&mut duel, RequestError::NotHumanTurn, |d| {
        d.apply_action(PlayerId::TWO, Action::Select(hand[0]))
    });

    duel.apply_action(PlayerId::ONE, Action::Select(hand[0])).unwrap();
    duel.apply_action(PlayerId::ONE, Action::Deselect(hand[0])).unwrap();
    duel.apply_action(PlayerId::ONE, Action::Summon(hand[0], hand[1]))
        .unwrap();
    assert_eq!(duel.state().player(PlayerId::ONE).battlefield.len(), 1);

    let recorded: Vec<Action> = duel
        .state()
        .action_history
        .iter()
        .map(|r| r.action)
        .collect();
    assert_eq!(
        recorded,
        vec![
            Action::Select(hand[0]),
            Action::Deselect(hand[0]),
            Action::Summon(hand[0], hand[1]),
        ]
    );

    duel.apply(Action::Advance).unwrap();
    assert_eq!(duel.state().turn_number, 3);
}

#[test]
fn test_every_legal_action_is_accepted() {
    let duel = started(8);
    for action in duel.legal_actions(PlayerId::ONE) {
        let mut fresh = started(8);
        assert!(
            fresh.apply_action(PlayerId::ONE, action).is_ok(),
            "{action:?} rejected"
        );
    }
}

#[test]
fn test_snapshot_hides_opponent_hand() {
    let duel = started(9);
    let snapshot = duel.snapshot_for(PlayerId::ONE);

    assert_eq!(snapshot.phase, Phase::Play);
    assert_eq!(snapshot.own.hand.as_ref().map(Vec::len), Some(9));
    assert_eq!(snapshot.opponent.hand, None);
    assert_eq!(snapshot.opponent.hand_size, 8);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"hand_size\":8"));
}

//! Full-duel integration tests: phase sequencing, opponent turns,
//! termination, determinism.

use cannon_duel::{
    Action, Direction, GameConfig, GameSession, MoveError, Phase, PlayerId, Position, TurnEvent,
    Wind,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One full turn cycle produces the expected event shape and comes back
/// to the Shoot phase with the counter bumped.
#[test]
fn test_full_turn_cycle() {
    init_logging();
    let mut session = GameSession::new(GameConfig::default(), 42);

    // Shoot at the opponent's corner.
    let report = session.advance(Some(Position::new(0, 0)));
    assert_eq!(report.phase, Phase::Move);
    assert!(matches!(report.events.as_slice(), [TurnEvent::Shot { shooter: PlayerId::One, .. }]));

    // Stand fast: a zero-cost move to our own cell.
    let report = session.advance(Some(Position::new(9, 9)));
    assert_eq!(report.phase, Phase::Next);

    // The opponent's whole turn, then the wind drift.
    let report = session.advance(None);
    assert_eq!(report.phase, Phase::Shoot);
    assert_eq!(session.turn(), 2);

    assert!(matches!(report.events.first(), Some(TurnEvent::Shot { shooter: PlayerId::Two, .. })));
    assert!(matches!(report.events.last(), Some(TurnEvent::WindShifted(_))));
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, TurnEvent::Moved { player: PlayerId::Two, .. } | TurnEvent::Held(PlayerId::Two))));
}

/// The history records every effective action with its turn number.
#[test]
fn test_history_records_turn_cycle() {
    init_logging();
    let mut session = GameSession::new(GameConfig::default(), 42);

    session.advance(Some(Position::new(0, 0)));
    session.advance(Some(Position::new(8, 8)));
    session.advance(None);

    let history = session.history();
    assert!(history.len() >= 3);
    assert_eq!(history[0].player, PlayerId::One);
    assert!(matches!(history[0].action, Action::Shoot(_)));
    assert_eq!(history[1].player, PlayerId::One);
    assert!(matches!(history[1].action, Action::Move(_)));
    assert_eq!(history[2].player, PlayerId::Two);
    assert!(matches!(history[2].action, Action::Shoot(_)));
    assert!(history.iter().all(|record| record.turn == 1));
}

/// Reducing the opponent to zero hit points ends the match at once and
/// makes every later `advance` inert.
#[test]
fn test_lethal_hit_ends_match() {
    init_logging();
    let config = GameConfig::default().with_max_hp(1);
    let mut session = GameSession::new(config, 42);

    // Calm opening wind: the shot lands exactly on the opponent.
    let report = session.advance(Some(Position::new(0, 0)));

    let outcome = session.outcome().expect("match should be over");
    assert_eq!(outcome.winner, PlayerId::One);
    assert_eq!(outcome.turn, 1);
    assert!(session.is_over());
    assert!(report.events.iter().any(|e| matches!(e, TurnEvent::GameOver(_))));

    // Inert from here on: no state change, outcome re-reported.
    let players_before = (*session.player(PlayerId::One), *session.player(PlayerId::Two));
    let wind_before = session.wind();
    let report = session.advance(Some(Position::new(5, 5)));

    assert_eq!(report.events.len(), 1);
    assert!(matches!(report.events[0], TurnEvent::GameOver(_)));
    assert_eq!(
        (*session.player(PlayerId::One), *session.player(PlayerId::Two)),
        players_before
    );
    assert_eq!(session.wind(), wind_before);
    assert_eq!(session.turn(), 1);
}

/// A self-hit can lose the match for the shooter.
#[test]
fn test_self_hit_can_lose_the_match() {
    init_logging();
    let config = GameConfig::default()
        .with_max_hp(1)
        .with_starting_positions(Position::new(5, 5), Position::new(0, 0))
        .with_initial_wind(Wind::new(Direction::North, 0));
    let mut session = GameSession::new(config, 42);

    // Shooting our own cell under calm wind is suicide.
    session.advance(Some(Position::new(5, 5)));

    let outcome = session.outcome().expect("match should be over");
    assert_eq!(outcome.winner, PlayerId::Two);
}

/// Empty magazines skip the shot but keep the duel flowing.
#[test]
fn test_ammo_exhaustion_keeps_duel_flowing() {
    init_logging();
    let config = GameConfig::default().with_max_ammo(1);
    let mut session = GameSession::new(config, 42);

    // Turn 1: both sides spend their only round.
    session.advance(Some(Position::new(0, 0)));
    session.advance(Some(Position::new(9, 9)));
    session.advance(None);

    // Turn 2: the human's shot is skipped but the phase still advances.
    let report = session.advance(Some(Position::new(0, 0)));
    assert_eq!(report.phase, Phase::Move);
    assert_eq!(report.events.as_slice(), &[TurnEvent::OutOfAmmo(PlayerId::One)]);

    // The opponent's shot is skipped the same way.
    session.advance(Some(Position::new(9, 9)));
    let report = session.advance(None);
    assert!(report.events.contains(&TurnEvent::OutOfAmmo(PlayerId::Two)));
}

/// A rejected human move reports a distinct reason and holds the phase.
#[test]
fn test_move_rejection_reasons_are_distinct() {
    init_logging();
    let config = GameConfig::default().with_max_fuel(2);
    let mut session = GameSession::new(config, 42);
    session.advance(Some(Position::new(0, 0)));

    let report = session.advance(Some(Position::new(4, 4)));
    assert_eq!(report.phase, Phase::Move);
    assert_eq!(
        report.events.as_slice(),
        &[TurnEvent::MoveRejected(MoveError::OutOfFuel { required: 5, available: 2 })]
    );
    assert_eq!(report.info().as_deref(), Some("Not enough fuel: need 5, have 2"));
}

/// Same seed, same inputs: the duel replays move for move.
#[test]
fn test_seeded_replay_is_identical() {
    init_logging();
    let script = [
        Some(Position::new(0, 0)),
        Some(Position::new(8, 8)),
        None,
        Some(Position::new(1, 1)),
        Some(Position::new(7, 6)),
        None,
        Some(Position::new(3, 3)),
        Some(Position::new(6, 6)),
        None,
    ];

    let mut first = GameSession::new(GameConfig::default(), 12345);
    let mut second = GameSession::new(GameConfig::default(), 12345);

    for &selected in &script {
        let a = first.advance(selected);
        let b = second.advance(selected);
        assert_eq!(a, b);
    }

    assert_eq!(first.player(PlayerId::One), second.player(PlayerId::One));
    assert_eq!(first.player(PlayerId::Two), second.player(PlayerId::Two));
    assert_eq!(first.wind(), second.wind());
    assert_eq!(first.history(), second.history());
    assert_eq!(first.grid(), second.grid());
}

/// Different seeds diverge somewhere within a few turns.
#[test]
fn test_different_seeds_diverge() {
    init_logging();
    let mut first = GameSession::new(GameConfig::default(), 1);
    let mut second = GameSession::new(GameConfig::default(), 2);

    let mut diverged = false;
    for turn in 0..20u8 {
        let shot = Some(Position::new(turn % 10, 4));
        first.advance(shot);
        second.advance(shot);
        first.advance(Some(first.player(PlayerId::One).position));
        second.advance(Some(second.player(PlayerId::One).position));
        let a = first.advance(None);
        let b = second.advance(None);
        if a != b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "independent seeds should not shadow each other for 20 turns");
}

/// Drive a low-hp duel to completion and check invariants every step.
#[test]
fn test_duel_to_completion_holds_invariants() {
    init_logging();
    let config = GameConfig::default().with_max_hp(2);
    let max_wind = config.max_wind_strength;
    let mut session = GameSession::new(config, 7);

    for _ in 0..400 {
        if session.is_over() {
            break;
        }

        // Always aim where the opponent is standing right now; the wind
        // decides whether that still connects.
        let aim = session.player(PlayerId::Two).position;
        match session.phase() {
            Phase::Shoot => session.advance(Some(aim)),
            Phase::Move => session.advance(Some(session.player(PlayerId::One).position)),
            Phase::Next => session.advance(None),
        };

        let grid_size = session.grid().size();
        for id in PlayerId::both() {
            let player = session.player(id);
            assert!(player.position.row < grid_size);
            assert!(player.position.col < grid_size);
            assert!(player.hp <= session.config().max_hp);
            assert!(player.fuel <= session.config().max_fuel);
        }
        assert!(session.wind().strength <= max_wind);
    }

    if let Some(outcome) = session.outcome() {
        assert!(session.player(outcome.winner).is_alive());
        assert!(!session.player(outcome.winner.opponent()).is_alive());
        assert!(outcome.turn <= session.turn());
    }
}

/// The grid only ever loses cells.
#[test]
fn test_grid_destruction_is_monotonic() {
    init_logging();
    let mut session = GameSession::new(GameConfig::default(), 99);
    let mut last_available = session.grid().available_count();

    for turn in 0..30u8 {
        if session.is_over() {
            break;
        }
        session.advance(Some(Position::new((turn * 3) % 10, (turn * 7) % 10)));
        session.advance(Some(session.player(PlayerId::One).position));
        session.advance(None);

        let available = session.grid().available_count();
        assert!(available <= last_available);
        last_available = available;
    }
}

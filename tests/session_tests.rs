//! Session integration tests.
//!
//! These tests drive a `Session` the way a presentation layer would:
//! clicks, clock ticks, resets and level selection.

use std::time::Duration;

use memory_maze::cards::{CardIndex, PairId};
use memory_maze::core::{EngineConfig, EngineError, GameMode, GameState, GameStatus, LevelRejection};
use memory_maze::levels::{LevelCatalog, LevelId};
use memory_maze::resolution::{ImmediateResolution, ResolutionKind, ResolutionSystem};
use memory_maze::rules::{FlipOutcome, IgnoreReason};
use memory_maze::session::Session;

fn timed_session(seed: u64) -> Session {
    Session::new(LevelCatalog::builtin(), EngineConfig::default().with_seed(seed)).unwrap()
}

fn cards_of(state: &GameState, pair: u32) -> Vec<CardIndex> {
    state
        .deck()
        .iter()
        .filter(|c| c.pair == PairId::new(pair))
        .map(|c| c.index)
        .collect()
}

/// Solve every pair of the current deal, ticking past each delay.
fn solve_all<R: ResolutionSystem>(session: &mut Session<R>) {
    let pairs = session.state().deck_size() / 2;
    for pair in 0..pairs as u32 {
        let cards = cards_of(session.state(), pair);
        session.on_card_click(cards[0]).unwrap();
        session.on_card_click(cards[1]).unwrap();
        session.tick(Duration::from_millis(350));
    }
}

// =============================================================================
// Timing Tests
// =============================================================================

/// A matched pair stays face up for 350 ms.
#[test]
fn test_match_resolves_after_delay() {
    let mut session = timed_session(1);
    let pair = cards_of(session.state(), 0);

    session.on_card_click(pair[0]).unwrap();
    let outcome = session.on_card_click(pair[1]).unwrap();
    assert_eq!(outcome, FlipOutcome::PairFlipped(ResolutionKind::Match));

    assert!(session.tick(Duration::from_millis(349)).is_empty());
    assert!(session.is_busy());
    assert!(!session.state().is_solved(pair[0]));

    assert_eq!(session.tick(Duration::from_millis(1)), vec![ResolutionKind::Match]);
    assert!(!session.is_busy());
    assert!(session.state().is_solved(pair[0]));
    assert!(session.state().is_solved(pair[1]));
}

/// A mismatched pair stays face up for 550 ms.
#[test]
fn test_mismatch_resolves_after_delay() {
    let mut session = timed_session(2);
    let a = cards_of(session.state(), 0)[0];
    let b = cards_of(session.state(), 1)[0];

    session.on_card_click(a).unwrap();
    session.on_card_click(b).unwrap();

    assert!(session.tick(Duration::from_millis(400)).is_empty());
    assert_eq!(session.visible_faces().iter().filter(|f| f.is_some()).count(), 2);

    assert_eq!(session.tick(Duration::from_millis(150)), vec![ResolutionKind::Mismatch]);
    assert!(session.visible_faces().iter().all(Option::is_none));
    assert!(session.state().solved().is_empty());
}

/// Clicks while a pair is pending are ignored and cost no step.
#[test]
fn test_click_while_busy() {
    let mut session = timed_session(3);
    let a = cards_of(session.state(), 0)[0];
    let b = cards_of(session.state(), 1)[0];
    let c = cards_of(session.state(), 1)[1];

    session.on_card_click(a).unwrap();
    session.on_card_click(b).unwrap();
    let outcome = session.on_card_click(c).unwrap();

    assert_eq!(outcome, FlipOutcome::Ignored(IgnoreReason::Busy));
    assert_eq!(session.state().step_count(), 2);
    assert_eq!(session.resolver().pending_count(), 1);
}

/// Reset while a pair is pending abandons its resolution.
#[test]
fn test_reset_abandons_pending() {
    let mut session = timed_session(4);
    let pair = cards_of(session.state(), 0);
    session.on_card_click(pair[0]).unwrap();
    session.on_card_click(pair[1]).unwrap();

    session.on_reset().unwrap();
    assert!(session.resolver().is_idle());

    assert!(session.tick(Duration::from_secs(1)).is_empty());
    assert!(session.state().solved().is_empty());
    assert!(session.state().flipped().is_empty());
    assert_eq!(session.state().step_count(), 0);
}

/// Time until the next resolution counts down with ticks.
#[test]
fn test_time_until_next() {
    let mut session = timed_session(5);
    assert_eq!(session.resolver().time_until_next(), None);

    let a = cards_of(session.state(), 0)[0];
    let b = cards_of(session.state(), 1)[0];
    session.on_card_click(a).unwrap();
    session.on_card_click(b).unwrap();
    session.tick(Duration::from_millis(200));

    assert_eq!(session.resolver().time_until_next(), Some(Duration::from_millis(350)));
}

// =============================================================================
// Progression Tests
// =============================================================================

/// Winning each level in turn unlocks the whole ladder.
#[test]
fn test_full_ladder() {
    let mut session = timed_session(6);

    for level in 1..=5 {
        session.on_level_select(LevelId::new(level)).unwrap();
        solve_all(&mut session);

        assert_eq!(session.state().status(), GameStatus::Won, "level {}", level);
        assert_eq!(session.unlocked_level(), LevelId::new(level + 1));
    }

    // Unlocked past the end, but there is nothing to select
    let err = session.on_level_select(LevelId::new(6)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidLevel {
            reason: LevelRejection::NotInCatalog,
            ..
        }
    ));
    assert_eq!(session.current_level(), LevelId::new(5));
    assert_eq!(session.progress().selectable(session.catalog()).count(), 5);
}

/// Replaying an earlier level never lowers the unlock line.
#[test]
fn test_replay_keeps_unlock() {
    let mut session = timed_session(7);
    solve_all(&mut session);
    session.on_level_select(LevelId::new(2)).unwrap();
    solve_all(&mut session);
    assert_eq!(session.unlocked_level(), LevelId::new(3));

    session.on_level_select(LevelId::new(1)).unwrap();
    solve_all(&mut session);
    assert_eq!(session.unlocked_level(), LevelId::new(3));
}

/// Selecting a locked level reports the unlock line and changes nothing.
#[test]
fn test_locked_level() {
    let mut session = timed_session(8);
    let before = session.state().clone();

    let err = session.on_level_select(LevelId::new(3)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidLevel {
            reason: LevelRejection::Locked { unlocked },
            ..
        } if unlocked == LevelId::new(1)
    ));
    assert_eq!(session.state(), &before);
}

/// Losing a level keeps the unlock line and a reset starts over.
#[test]
fn test_loss_then_reset() {
    let mut session = Session::with_resolver(
        LevelCatalog::builtin(),
        EngineConfig::default().with_seed(9),
        ImmediateResolution::new(),
    )
    .unwrap();
    let a = cards_of(session.state(), 0)[0];
    let b = cards_of(session.state(), 1)[0];

    let mut last = FlipOutcome::Revealed;
    while session.state().status() == GameStatus::Playing {
        last = session.on_card_click(a).unwrap();
        if session.state().status() == GameStatus::Playing {
            session.on_card_click(b).unwrap();
            session.tick(Duration::ZERO);
        }
    }

    assert_eq!(last, FlipOutcome::OutOfSteps);
    assert_eq!(session.state().status(), GameStatus::Lost);
    assert_eq!(session.state().step_count(), 7);
    assert!(!session.check_win());
    assert_eq!(session.unlocked_level(), LevelId::new(1));

    session.on_reset().unwrap();
    assert_eq!(session.state().status(), GameStatus::Playing);
    assert_eq!(session.state().step_count(), 0);
}

/// Out-of-range clicks are errors; the session is unchanged.
#[test]
fn test_invalid_click() {
    let mut session = timed_session(10);
    let before = session.state().clone();

    let err = session.on_card_click(CardIndex::new(99)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidCardId { .. }));
    assert_eq!(session.state(), &before);
}

// =============================================================================
// Free Play and Custom Catalogs
// =============================================================================

/// Free play switches mode and returns to levels on select.
#[test]
fn test_free_play_round_trip() {
    let mut session = timed_session(11);
    session.start_free_play(6).unwrap();

    assert_eq!(session.state().mode(), GameMode::FreePlay { grid_size: 6 });
    assert_eq!(session.state().deck_size(), 36);
    assert_eq!(session.state().max_steps(), None);

    solve_all(&mut session);
    assert_eq!(session.state().status(), GameStatus::Won);
    assert_eq!(session.unlocked_level(), LevelId::new(1));

    session.on_level_select(LevelId::new(1)).unwrap();
    assert_eq!(session.state().mode(), GameMode::Level(LevelId::new(1)));
}

/// Free play has no step budget and its own delays.
#[test]
fn test_free_play_cannot_be_lost() {
    let mut session = timed_session(13);
    session.start_free_play(2).unwrap();
    let a = cards_of(session.state(), 0)[0];
    let b = cards_of(session.state(), 1)[0];

    for _ in 0..20 {
        session.on_card_click(a).unwrap();
        session.on_card_click(b).unwrap();
        assert!(session.tick(Duration::from_millis(999)).is_empty());
        assert_eq!(session.tick(Duration::from_millis(1)), vec![ResolutionKind::Mismatch]);
    }
    assert_eq!(session.state().status(), GameStatus::Playing);
    assert_eq!(session.state().step_count(), 40);

    // Matches resolve on the next tick without waiting
    let pair = cards_of(session.state(), 0);
    session.on_card_click(pair[0]).unwrap();
    session.on_card_click(pair[1]).unwrap();
    assert_eq!(session.tick(Duration::ZERO), vec![ResolutionKind::Match]);
    assert!(session.state().is_solved(pair[0]));
}

/// A catalog loaded from JSON drives the session.
#[test]
fn test_json_catalog() {
    let json = r#"[
        {"id": 10, "grid_size": 2, "title": "Colors",
         "pairs": [["red", "rouge"], ["blue", "bleu"]]},
        {"id": 20, "grid_size": 2, "title": "Animals", "how_to_play": "Match the names.",
         "pairs": [["cat", "chat"], ["dog", "chien"]]}
    ]"#;
    let catalog = LevelCatalog::from_json(json).unwrap();
    let mut session = Session::new(catalog, EngineConfig::default().with_seed(12)).unwrap();

    assert_eq!(session.current_level(), LevelId::new(10));
    solve_all(&mut session);

    // Winning level 10 unlocks "level 11", which is below 20
    assert_eq!(session.unlocked_level(), LevelId::new(11));
    assert!(session.on_level_select(LevelId::new(20)).is_err());
}

/// Winning a level with the highest possible id unlocks nothing further.
#[test]
fn test_win_on_highest_level_id() {
    let json = r#"[{"id": 4294967295, "grid_size": 2, "title": "Top",
                    "pairs": [["a", "A"], ["b", "B"]]}]"#;
    let catalog = LevelCatalog::from_json(json).unwrap();
    let mut session = Session::with_resolver(
        catalog,
        EngineConfig::default().with_seed(14),
        ImmediateResolution::new(),
    )
    .unwrap();

    solve_all(&mut session);

    assert_eq!(session.state().status(), GameStatus::Won);
    assert_eq!(session.unlocked_level(), LevelId::new(u32::MAX));
    assert!(session.check_win());
}

/// A well-formed catalog with a bad level is a definition error.
#[test]
fn test_json_catalog_invalid_level() {
    let json = r#"[{"id": 1, "grid_size": 3, "title": "Odd",
                    "pairs": [["a", "a"], ["b", "b"], ["c", "c"], ["d", "d"]]}]"#;
    assert!(matches!(
        LevelCatalog::from_json(json),
        Err(EngineError::InvalidDefinition(_))
    ));
    assert!(matches!(
        LevelCatalog::from_json("not json"),
        Err(EngineError::Json(_))
    ));
}

/// Configuration read from JSON keeps defaults for missing fields.
#[test]
fn test_json_config() {
    let config = EngineConfig::from_json(r#"{"seed": 5, "match_delay_ms": 100}"#).unwrap();
    let mut session = Session::new(LevelCatalog::builtin(), config).unwrap();
    let pair = cards_of(session.state(), 1);

    session.on_card_click(pair[0]).unwrap();
    session.on_card_click(pair[1]).unwrap();
    assert_eq!(session.tick(Duration::from_millis(100)), vec![ResolutionKind::Match]);
    assert_eq!(session.state().max_steps(), Some(7));
}

/// A non-positive step factor is rejected up front.
#[test]
fn test_bad_config() {
    let config = EngineConfig::default().with_step_factor(0.0);
    assert!(matches!(
        Session::new(LevelCatalog::builtin(), config),
        Err(EngineError::Config(_))
    ));
}

//! Engine dispatch and best-score persistence

use std::fs;

use just_divide::core::{ActionError, Board, GameSession, PlaceError, SessionConfig, SessionState};
use just_divide::engine::{
    BestScoreStore, Engine, EngineConfig, JsonFileBestScore, MemoryBestScore, MessageKind,
};
use just_divide::types::{Difficulty, GameAction, Pos, BEST_SCORE_KEY};

fn scripted_session(best_score: u32) -> GameSession {
    let mut state = SessionState::new();
    state.board.set(Pos::new(0, 0), Some(6));
    state.queue.extend([6, 5, 7]);
    GameSession::from_state(
        SessionConfig {
            best_score,
            ..SessionConfig::default()
        },
        state,
    )
}

#[test]
fn new_best_is_written_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores").join("best.json");

    let mut engine = Engine::with_session(scripted_session(0), JsonFileBestScore::new(&path));
    engine.dispatch(GameAction::Place { row: 0, col: 1 }).unwrap();
    assert_eq!(engine.message().text, "Equal tiles! 6 & 6 vanish (+12)");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json[BEST_SCORE_KEY], 12);

    // A later run picks it up.
    let engine = Engine::new(EngineConfig::default(), JsonFileBestScore::new(&path));
    assert_eq!(engine.snapshot().best_score, 12);
}

#[test]
fn no_save_without_a_new_best() {
    let mut engine = Engine::with_session(scripted_session(50), MemoryBestScore::with_value(50));
    engine.dispatch(GameAction::Place { row: 0, col: 1 }).unwrap();
    assert_eq!(engine.store().saves(), 0);
    assert_eq!(engine.snapshot().best_score, 50);
}

#[test]
fn corrupt_store_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileBestScore::new(&path);
    assert!(store.load_best_score().is_err());

    let mut engine = Engine::new(EngineConfig::default(), JsonFileBestScore::new(&path));
    assert_eq!(engine.snapshot().best_score, 0);
    assert!(engine.dispatch(GameAction::Place { row: 2, col: 2 }).is_ok());
}

#[test]
fn foreign_keys_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, r#"{"volume": 3, "jd_best_score": 1}"#).unwrap();

    let mut store = JsonFileBestScore::new(&path);
    assert_eq!(store.load_best_score().unwrap(), 1);
    store.save_best_score(30).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["volume"], 3);
    assert_eq!(json[BEST_SCORE_KEY], 30);
}

#[test]
fn errors_surface_as_messages() {
    let mut state = SessionState::new();
    state.board = Board::new();
    state.queue.extend([4, 6]);
    state.trash_uses = 0;
    let session = GameSession::from_state(SessionConfig::default(), state);
    let mut engine = Engine::with_session(session, MemoryBestScore::new());

    assert_eq!(engine.dispatch(GameAction::Trash), Err(ActionError::NoTrashRemaining));
    assert_eq!(engine.message().text, "No TRASH uses left!");
    assert_eq!(engine.message().kind, MessageKind::Error);

    engine.dispatch(GameAction::Place { row: 1, col: 1 }).unwrap();
    assert_eq!(
        engine.dispatch(GameAction::Place { row: 1, col: 1 }),
        Err(ActionError::Place(PlaceError::OccupiedCell))
    );
    assert_eq!(engine.message().text, "Choose an empty slot.");
}

#[test]
fn new_game_keeps_difficulty() {
    let config = EngineConfig {
        seed: 7,
        difficulty: Difficulty::Easy,
    };
    let mut engine = Engine::new(config, MemoryBestScore::with_value(3));
    engine.dispatch(GameAction::Place { row: 0, col: 0 }).unwrap();
    engine.dispatch(GameAction::NewGame).unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.difficulty, Difficulty::Easy);
    assert_eq!(snap.best_score, 3);
    assert_eq!(snap.undo_depth, 0);
    assert_eq!(engine.message().text, "Place the top tile on the grid to start!");
}

#[test]
fn tick_advances_snapshot_clock() {
    let mut engine = Engine::new(EngineConfig::default(), MemoryBestScore::new());
    assert!(engine.tick());
    assert!(engine.tick());
    assert_eq!(engine.snapshot().elapsed_seconds, 2);
}

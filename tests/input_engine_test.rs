//! Key presses driven through the input handler into the engine

use crossterm::event::{KeyCode, KeyEvent};

use just_divide::engine::{Engine, EngineConfig, MemoryBestScore};
use just_divide::input::{should_quit, InputHandler};
use just_divide::types::{Pos, DEFAULT_TRASH_USES};

fn press(
    input: &mut InputHandler,
    engine: &mut Engine<MemoryBestScore>,
    code: KeyCode,
) -> bool {
    match input.handle_key_event(KeyEvent::from(code)) {
        Some(action) => engine.dispatch(action).is_ok(),
        None => false,
    }
}

#[test]
fn keyboard_session() {
    let mut engine = Engine::new(EngineConfig::default(), MemoryBestScore::new());
    let mut input = InputHandler::new();

    // Move to (1, 2) and place the head there.
    press(&mut input, &mut engine, KeyCode::Down);
    press(&mut input, &mut engine, KeyCode::Right);
    press(&mut input, &mut engine, KeyCode::Char('d'));
    assert_eq!(input.cursor(), Pos::new(1, 2));
    let head = engine.snapshot().head;
    assert!(press(&mut input, &mut engine, KeyCode::Enter));
    assert_eq!(engine.snapshot().board[1][2], head);

    // Placing on the same cell is rejected.
    assert!(!press(&mut input, &mut engine, KeyCode::Char(' ')));

    assert!(press(&mut input, &mut engine, KeyCode::Char('x')));
    assert_eq!(engine.snapshot().trash_uses, DEFAULT_TRASH_USES - 1);

    assert!(press(&mut input, &mut engine, KeyCode::Char('g')));
    assert!(engine.snapshot().hints_on);

    assert!(press(&mut input, &mut engine, KeyCode::Char('z')));
    assert_eq!(engine.snapshot().trash_uses, DEFAULT_TRASH_USES);
    // Undo restores the state from before the trash, when hints were off.
    assert!(!engine.snapshot().hints_on);

    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
}

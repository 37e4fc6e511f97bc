//! Key mapping from terminal events to input commands.

use crate::types::{Difficulty, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` step for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What a single key press asks for.
///
/// Cursor movement and "place at cursor" need the cursor position, so they
/// stay separate from the actions that go straight to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    PlaceAtCursor,
    Action(GameAction),
}

/// Map keyboard input to input commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Move(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputCommand::PlaceAtCursor),

        // Queue
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(InputCommand::Action(GameAction::Keep))
        }
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(InputCommand::Action(GameAction::Trash))
        }
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(InputCommand::Action(GameAction::Undo))
        }

        // Session
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputCommand::Action(GameAction::ToggleHints)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Action(GameAction::NewGame)),
        KeyCode::Char('1') => Some(InputCommand::Action(GameAction::SetDifficulty(Difficulty::Easy))),
        KeyCode::Char('2') => Some(InputCommand::Action(GameAction::SetDifficulty(Difficulty::Medium))),
        KeyCode::Char('3') => Some(InputCommand::Action(GameAction::SetDifficulty(Difficulty::Hard))),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

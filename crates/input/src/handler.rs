//! Grid cursor input handler.
//!
//! Keeps the cursor inside the board and resolves "place at cursor" into a
//! [`GameAction::Place`] for the current cell.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, Direction, InputCommand};
use crate::types::{GameAction, Pos, GRID_SIZE};

/// Tracks the cursor between key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandler {
    cursor: Pos,
    size: usize,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_size(GRID_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            cursor: Pos::new(0, 0),
            size: size.max(1),
        }
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// Move the cursor to `pos`, clamped to the grid.
    pub fn set_cursor(&mut self, pos: Pos) {
        self.cursor = Pos::new(pos.row.min(self.size - 1), pos.col.min(self.size - 1));
    }

    /// Step the cursor; stops at the edges instead of wrapping.
    pub fn move_cursor(&mut self, dir: Direction) {
        let (dr, dc) = dir.delta();
        let max = self.size - 1;
        let row = self.cursor.row.saturating_add_signed(dr).min(max);
        let col = self.cursor.col.saturating_add_signed(dc).min(max);
        self.cursor = Pos::new(row, col);
    }

    /// Apply a command. Returns the engine action it produces, if any.
    pub fn apply(&mut self, command: InputCommand) -> Option<GameAction> {
        match command {
            InputCommand::Move(dir) => {
                self.move_cursor(dir);
                None
            }
            InputCommand::PlaceAtCursor => Some(GameAction::Place {
                row: self.cursor.row,
                col: self.cursor.col,
            }),
            InputCommand::Action(action) => Some(action),
        }
    }

    /// Map and apply one key event. Release events are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let command = handle_key_event(key)?;
        self.apply(command)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! Read-only view of a session for renderers.
//!
//! `GameSnapshot` is `Copy` and holds no references, so a renderer can keep
//! one around and refill it every frame with [`GameSession::snapshot_into`].

use crate::session::GameSession;
use crate::types::{Cell, Difficulty, TileValue, GRID_SIZE, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub keep: Option<TileValue>,
    pub head: Option<TileValue>,
    pub preview: [Option<TileValue>; PREVIEW_LEN],
    pub score: u32,
    pub best_score: u32,
    pub level: u32,
    pub trash_uses: u32,
    pub game_over: bool,
    pub hints_on: bool,
    /// Cells worth highlighting; all false when hints are off
    pub hints: [[bool; GRID_SIZE]; GRID_SIZE],
    pub elapsed_seconds: u32,
    pub difficulty: Difficulty,
    pub undo_depth: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_SIZE]; GRID_SIZE],
            keep: None,
            head: None,
            preview: [None; PREVIEW_LEN],
            score: 0,
            best_score: 0,
            level: 1,
            trash_uses: 0,
            game_over: false,
            hints_on: false,
            hints: [[false; GRID_SIZE]; GRID_SIZE],
            elapsed_seconds: 0,
            difficulty: Difficulty::default(),
            undo_depth: 0,
        }
    }
}

impl GameSession {
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let state = self.state();

        out.board = state.board.to_rows();
        out.keep = state.keep;
        out.head = state.head();
        out.preview = [None; PREVIEW_LEN];
        for (slot, value) in out.preview.iter_mut().zip(state.queue.iter().skip(1)) {
            *slot = Some(*value);
        }
        out.score = state.score;
        out.best_score = self.best_score();
        out.level = state.level;
        out.trash_uses = state.trash_uses;
        out.game_over = state.game_over;
        out.hints_on = state.hints_on;
        out.hints = self.hints().unwrap_or([[false; GRID_SIZE]; GRID_SIZE]);
        out.elapsed_seconds = state.clock.seconds();
        out.difficulty = self.difficulty();
        out.undo_depth = self.undo_depth();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionConfig, SessionState};

    #[test]
    fn snapshot_exposes_head_and_two_preview_tiles() {
        let mut state = SessionState::new();
        state.queue.extend([6, 9, 12, 15]);
        let session = GameSession::from_state(SessionConfig::default(), state);

        let snap = session.snapshot();
        assert_eq!(snap.head, Some(6));
        assert_eq!(snap.preview, [Some(9), Some(12)]);
        assert!(snap.playable());
    }

    #[test]
    fn snapshot_into_overwrites_previous_frame() {
        let mut state = SessionState::new();
        state.queue.extend([6]);
        let session = GameSession::from_state(SessionConfig::default(), state);

        let mut snap = GameSnapshot {
            preview: [Some(1), Some(2)],
            score: 99,
            ..GameSnapshot::default()
        };
        session.snapshot_into(&mut snap);
        assert_eq!(snap.preview, [None, None]);
        assert_eq!(snap.score, 0);
    }
}

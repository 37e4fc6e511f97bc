//! Scoring module - level progression
//!
//! Level is derived from score: one level per `POINTS_PER_LEVEL` points,
//! starting at level 1. Gaining levels awards trash uses, and every
//! `MILESTONE_EVERY`-th level is announced as a difficulty milestone.

use crate::types::{MILESTONE_EVERY, POINTS_PER_LEVEL, TRASH_PER_LEVEL};

/// Level reached at `score`
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Result of re-deriving the level after a score change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub from: u32,
    pub to: u32,
    /// Trash uses earned by this change
    pub trash_awarded: u32,
    /// Whether the new level is a difficulty milestone
    pub milestone: bool,
}

/// Compare the stored level with the one implied by `score`
///
/// Returns `None` when the level did not rise. Levels never go down here:
/// a lower derived level (only possible through inconsistent input) is ignored.
pub fn level_change(current_level: u32, score: u32) -> Option<LevelChange> {
    let to = level_for_score(score);
    if to <= current_level {
        return None;
    }
    Some(LevelChange {
        from: current_level,
        to,
        trash_awarded: TRASH_PER_LEVEL * (to - current_level),
        milestone: to % MILESTONE_EVERY == 0,
    })
}

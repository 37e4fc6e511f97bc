//! Merge module - cascading equal/divisible merges
//!
//! After a tile lands, the cell it landed on becomes the *focus*. Each pass
//! scans the focus's neighbors (up, down, left, right) and applies the first
//! rule that fits:
//!
//! - **Equal**: both tiles vanish, awarding `a + b`.
//! - **Divisible**: the smaller tile vanishes and the larger becomes the
//!   quotient, awarding `quotient * 2`. The focus follows the quotient.
//!
//! Passes repeat until one finds nothing to do. Every step empties at least one
//! occupied cell, so a cascade is bounded by the number of tiles on the board.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Pos, TileValue, GRID_CELLS};

/// Whether two adjacent tiles would react with each other
#[inline]
pub fn can_merge(a: TileValue, b: TileValue) -> bool {
    if a == 0 || b == 0 {
        return false;
    }
    a == b || a.max(b) % a.min(b) == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    /// Equal tiles annihilated
    Equal,
    /// Larger tile divided by the smaller one
    Divide { quotient: TileValue },
}

/// One applied merge inside a cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStep {
    pub kind: MergeKind,
    /// Focus cell at the time of the merge
    pub focus: Pos,
    /// Neighbor the focus merged with
    pub neighbor: Pos,
    pub focus_value: TileValue,
    pub neighbor_value: TileValue,
    /// Points awarded for this step
    pub points: u32,
}

impl MergeStep {
    pub fn larger(&self) -> TileValue {
        self.focus_value.max(self.neighbor_value)
    }

    pub fn smaller(&self) -> TileValue {
        self.focus_value.min(self.neighbor_value)
    }
}

/// Result of resolving one placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub steps: ArrayVec<MergeStep, GRID_CELLS>,
    /// Sum of `points` over all steps
    pub score_delta: u32,
    /// Where the cascade stopped
    pub final_focus: Option<Pos>,
}

impl MergeOutcome {
    pub fn merged(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Run the merge cascade starting at `origin` until the board is stable
pub fn resolve(board: &mut Board, origin: Pos) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    let mut focus = origin;

    while let Some(step) = merge_once(board, focus) {
        outcome.score_delta += step.points;
        if let MergeKind::Divide { .. } = step.kind {
            focus = if step.focus_value >= step.neighbor_value {
                step.focus
            } else {
                step.neighbor
            };
        }
        outcome.steps.push(step);
    }

    outcome.final_focus = Some(focus);
    outcome
}

/// Apply the first merge available around `focus`, if any
fn merge_once(board: &mut Board, focus: Pos) -> Option<MergeStep> {
    for neighbor in board.neighbors_of(focus) {
        let (Some(a), Some(b)) = (board.value(focus), board.value(neighbor)) else {
            continue;
        };

        if a == b {
            board.set(focus, None);
            board.set(neighbor, None);
            return Some(MergeStep {
                kind: MergeKind::Equal,
                focus,
                neighbor,
                focus_value: a,
                neighbor_value: b,
                points: a + b,
            });
        }

        let (larger_pos, smaller_pos) = if a >= b {
            (focus, neighbor)
        } else {
            (neighbor, focus)
        };
        let (larger, smaller) = (a.max(b), a.min(b));

        if larger % smaller == 0 {
            let quotient = larger / smaller;
            board.set(smaller_pos, None);
            board.set(larger_pos, (quotient != 1).then_some(quotient));
            return Some(MergeStep {
                kind: MergeKind::Divide { quotient },
                focus,
                neighbor,
                focus_value: a,
                neighbor_value: b,
                points: quotient * 2,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    fn board_with(tiles: &[(usize, usize, TileValue)]) -> Board {
        let mut rows = [[None; GRID_SIZE]; GRID_SIZE];
        for &(r, c, v) in tiles {
            rows[r][c] = Some(v);
        }
        Board::from_rows(rows)
    }

    #[test]
    fn test_can_merge() {
        assert!(can_merge(6, 6));
        assert!(can_merge(8, 4));
        assert!(can_merge(3, 12));
        assert!(!can_merge(5, 7));
        assert!(!can_merge(6, 9));
    }

    #[test]
    fn test_no_neighbors_no_merge() {
        let mut board = board_with(&[(0, 0, 6)]);
        let out = resolve(&mut board, Pos::new(0, 0));
        assert!(!out.merged());
        assert_eq!(out.score_delta, 0);
        assert_eq!(board.value(Pos::new(0, 0)), Some(6));
    }

    #[test]
    fn test_equal_tiles_vanish() {
        let mut board = board_with(&[(2, 2, 9), (2, 3, 9)]);
        let out = resolve(&mut board, Pos::new(2, 2));
        assert_eq!(out.score_delta, 18);
        assert_eq!(out.steps.len(), 1);
        assert_eq!(out.steps[0].kind, MergeKind::Equal);
        assert!(board.is_empty());
    }

    #[test]
    fn test_divide_moves_focus_to_quotient() {
        // 4 placed at (1,0) next to 8 at (1,1): quotient 2 lands at (1,1).
        let mut board = board_with(&[(1, 1, 8), (1, 0, 4)]);
        let out = resolve(&mut board, Pos::new(1, 0));
        assert_eq!(out.score_delta, 4);
        assert_eq!(board.value(Pos::new(1, 0)), None);
        assert_eq!(board.value(Pos::new(1, 1)), Some(2));
        assert_eq!(out.final_focus, Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_up_neighbor_fires_before_left() {
        // Focus (1,1) with 3 above and 6 to the left; 12 / 3 fires first.
        let mut board = board_with(&[(1, 1, 12), (0, 1, 3), (1, 0, 6)]);
        let out = resolve(&mut board, Pos::new(1, 1));
        assert_eq!(out.steps[0].neighbor, Pos::new(0, 1));
        assert_eq!(out.steps[0].kind, MergeKind::Divide { quotient: 4 });
        // 4 does not react with 6, so the cascade stops.
        assert_eq!(out.steps.len(), 1);
        assert_eq!(board.value(Pos::new(1, 1)), Some(4));
        assert_eq!(board.value(Pos::new(1, 0)), Some(6));
    }
}

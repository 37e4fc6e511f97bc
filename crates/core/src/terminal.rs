//! Dead-board detection.

use crate::board::Board;
use crate::merge::can_merge;

/// True iff the board is full and no adjacent pair can merge
///
/// Returns false as soon as it finds an empty cell or a mergeable pair.
pub fn is_terminal(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }

    for pos in Board::positions() {
        let Some(v) = board.value(pos) else {
            continue;
        };
        for n in board.neighbors_of(pos) {
            if let Some(v2) = board.value(n) {
                if can_merge(v, v2) {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pos, GRID_SIZE};

    /// Full board where every orthogonal pair is coprime and unequal.
    fn dead_rows() -> [[Option<u32>; GRID_SIZE]; GRID_SIZE] {
        [
            [Some(5), Some(7), Some(5), Some(7)],
            [Some(7), Some(5), Some(7), Some(5)],
            [Some(5), Some(7), Some(5), Some(7)],
            [Some(7), Some(5), Some(7), Some(5)],
        ]
    }

    #[test]
    fn empty_board_is_not_terminal() {
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn checkerboard_of_coprimes_is_terminal() {
        assert!(is_terminal(&Board::from_rows(dead_rows())));
    }

    #[test]
    fn one_gap_is_never_terminal() {
        let mut board = Board::from_rows(dead_rows());
        board.set(Pos::new(2, 2), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn single_divisible_pair_keeps_board_alive() {
        let mut board = Board::from_rows(dead_rows());
        // 35 sits next to 5 and 7.
        board.set(Pos::new(3, 3), Some(35));
        assert!(!is_terminal(&board));
    }
}

//! Hint highlighting.
//!
//! A hint marks an empty cell where the current tile would be legal *and*
//! immediately react with a neighbor. On an empty board every cell is marked.

use crate::board::Board;
use crate::merge::can_merge;
use crate::types::{TileValue, GRID_SIZE};

/// Row-major mask of hinted cells
pub type HintMask = [[bool; GRID_SIZE]; GRID_SIZE];

/// Compute the cells worth highlighting for tile `value`
pub fn hint_mask(board: &Board, value: TileValue) -> HintMask {
    let mut mask = [[false; GRID_SIZE]; GRID_SIZE];
    let empty_board = board.is_empty();

    for pos in Board::positions() {
        if board.is_occupied(pos) {
            continue;
        }
        let hinted = empty_board
            || board
                .neighbors_of(pos)
                .iter()
                .filter_map(|&n| board.value(n))
                .any(|v2| can_merge(value, v2));
        mask[pos.row][pos.col] = hinted;
    }
    mask
}

/// Number of hinted cells in `mask`
pub fn hint_count(mask: &HintMask) -> usize {
    mask.iter().flatten().filter(|&&on| on).count()
}

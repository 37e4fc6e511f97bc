//! Action errors.
//!
//! Every error is a validation rejection: the action that produced it left the
//! session untouched.

use thiserror::Error;

/// Why a tile could not be put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("target cell is outside the grid")]
    OutOfBounds,
    #[error("target cell is already occupied")]
    OccupiedCell,
    #[error("target cell has no occupied neighbor")]
    IsolatedPlacement,
}

/// Rejection reported by a session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error("no trash uses remaining")]
    NoTrashRemaining,
    #[error("undo history is empty")]
    EmptyUndoLog,
    #[error("game is over")]
    GameOver,
}

impl ActionError {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ActionError::Place(PlaceError::OutOfBounds) => "out_of_bounds",
            ActionError::Place(PlaceError::OccupiedCell) => "occupied_cell",
            ActionError::Place(PlaceError::IsolatedPlacement) => "isolated_placement",
            ActionError::NoTrashRemaining => "no_trash_remaining",
            ActionError::EmptyUndoLog => "empty_undo_log",
            ActionError::GameOver => "game_over",
        }
    }

    /// Player-facing text.
    pub fn message(self) -> &'static str {
        match self {
            ActionError::Place(PlaceError::OutOfBounds) => "That cell is off the board.",
            ActionError::Place(PlaceError::OccupiedCell) => "Choose an empty slot.",
            ActionError::Place(PlaceError::IsolatedPlacement) => {
                "Place tile next to at least one existing tile."
            }
            ActionError::NoTrashRemaining => "No TRASH uses left!",
            ActionError::EmptyUndoLog => "Nothing to undo.",
            ActionError::GameOver => "Game over. Undo or start a new game.",
        }
    }
}

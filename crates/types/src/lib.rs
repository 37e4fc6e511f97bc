//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a square grid of [`GRID_SIZE`] x [`GRID_SIZE`] cells,
//! addressed as `(row, col)` with `(0, 0)` in the top-left corner.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_UNDO` | 10 | Undo snapshots kept before the oldest is evicted |
//! | `DEFAULT_TRASH_USES` | 10 | Trash allowance of a fresh session |
//! | `INITIAL_QUEUE_LEN` | 20 | Tiles drawn when a session starts |
//! | `REFILL_QUEUE_LEN` | 10 | Tiles drawn when the queue runs dry |
//! | `PREVIEW_LEN` | 2 | Lookahead tiles shown after the head |
//! | `POINTS_PER_LEVEL` | 10 | Score needed per level |
//! | `TRASH_PER_LEVEL` | 2 | Trash uses awarded per level gained |
//! | `MILESTONE_EVERY` | 5 | Levels between difficulty milestones |
//!
//! # Examples
//!
//! ```
//! use just_divide_types::{Difficulty, GameAction, GRID_SIZE};
//!
//! let difficulty = Difficulty::from_str("HARD").unwrap();
//! assert!(difficulty.values().contains(&35));
//!
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Maximum number of undo snapshots retained
pub const MAX_UNDO: usize = 10;

/// Trash allowance at the start of a session
pub const DEFAULT_TRASH_USES: u32 = 10;

/// Number of tiles queued when a session starts
pub const INITIAL_QUEUE_LEN: usize = 20;

/// Number of tiles queued when the queue is found empty
pub const REFILL_QUEUE_LEN: usize = 10;

/// Lookahead tiles shown after the playable head
pub const PREVIEW_LEN: usize = 2;

/// Score per level step (`level = score / POINTS_PER_LEVEL + 1`)
pub const POINTS_PER_LEVEL: u32 = 10;

/// Trash uses awarded for every level gained
pub const TRASH_PER_LEVEL: u32 = 2;

/// A difficulty milestone is announced on every level divisible by this
pub const MILESTONE_EVERY: u32 = 5;

/// Elapsed-time clock period in milliseconds
pub const TICK_MS: u32 = 1000;

/// Storage key under which the best score is persisted
pub const BEST_SCORE_KEY: &str = "jd_best_score";

/// A tile value. Always positive when on the grid.
pub type TileValue = u32;

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(value)`: Cell holding a tile
pub type Cell = Option<TileValue>;

/// Grid coordinate, `row` then `col`, both in `0..GRID_SIZE` when valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the grid
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

const EASY_VALUES: [TileValue; 11] = [2, 3, 4, 6, 8, 9, 12, 15, 16, 18, 20];
const MEDIUM_VALUES: [TileValue; 14] = [2, 3, 4, 5, 6, 8, 9, 10, 12, 15, 18, 20, 24, 30];
const HARD_VALUES: [TileValue; 13] = [5, 7, 10, 11, 13, 15, 18, 20, 24, 25, 30, 32, 35];

/// Difficulty profile selecting the tile-value domain for future draws
///
/// - **Easy**: small, highly composite values
/// - **Medium**: the balanced default set
/// - **Hard**: larger values with several primes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// The value domain tiles are drawn from
    pub fn values(&self) -> &'static [TileValue] {
        match self {
            Difficulty::Easy => &EASY_VALUES,
            Difficulty::Medium => &MEDIUM_VALUES,
            Difficulty::Hard => &HARD_VALUES,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use just_divide_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Player actions accepted by the engine
///
/// These are produced by the input layer (or a test driver) and consumed by
/// one handler each. Every action returns a result and never blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Play the queue head onto the grid at `(row, col)`
    Place { row: usize, col: usize },
    /// Move the queue head into the keep slot (or swap with it)
    Keep,
    /// Discard the queue head, spending one trash use
    Trash,
    /// Revert the most recent successful action
    Undo,
    /// Change the value domain for future draws
    SetDifficulty(Difficulty),
    /// Toggle highlighting of productive cells
    ToggleHints,
    /// Abandon the current session and start a fresh one
    NewGame,
}

impl GameAction {
    /// Parse a parameterless action from string
    ///
    /// `Place` needs coordinates and `SetDifficulty` needs a profile, so only
    /// the difficulty names map to `SetDifficulty` here.
    ///
    /// # Examples
    ///
    /// ```
    /// use just_divide_types::{Difficulty, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("keep"), Some(GameAction::Keep));
    /// assert_eq!(GameAction::from_str("toggleHints"), Some(GameAction::ToggleHints));
    /// assert_eq!(
    ///     GameAction::from_str("hard"),
    ///     Some(GameAction::SetDifficulty(Difficulty::Hard))
    /// );
    /// assert_eq!(GameAction::from_str("place"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keep" => Some(GameAction::Keep),
            "trash" => Some(GameAction::Trash),
            "undo" => Some(GameAction::Undo),
            "togglehints" => Some(GameAction::ToggleHints),
            "newgame" => Some(GameAction::NewGame),
            other => Difficulty::from_str(other).map(GameAction::SetDifficulty),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Place { .. } => "place",
            GameAction::Keep => "keep",
            GameAction::Trash => "trash",
            GameAction::Undo => "undo",
            GameAction::SetDifficulty(_) => "setDifficulty",
            GameAction::ToggleHints => "toggleHints",
            GameAction::NewGame => "newGame",
        }
    }

    /// Whether the action mutates session state and can be undone
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            GameAction::Place { .. } | GameAction::Keep | GameAction::Trash
        )
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and turn
//! logic. It has **zero dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical tile streams
//! - **Testable**: Every rule is exercised headless
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with placement validation and neighbor enumeration
//! - [`merge`]: cascading equal/divisible merge resolution
//! - [`terminal`]: dead-board detection
//! - [`rng`]: seeded tile source with difficulty profiles
//! - [`scoring`]: level progression and trash awards
//! - [`undo`]: bounded snapshot history
//! - [`hints`]: productive-cell highlighting
//! - [`clock`]: elapsed-time counter with pause/resume
//! - [`session`]: turn orchestration tying it all together
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Placement**: the first tile goes anywhere; later tiles must touch an
//!   occupied cell orthogonally.
//! - **Equal**: adjacent equal tiles vanish, scoring their sum.
//! - **Divide**: adjacent divisible tiles collapse into the quotient, scoring
//!   twice the quotient; the cascade continues from the quotient.
//! - **Keep / Trash**: park the current tile, or spend a trash use to drop it.
//! - **Levels**: every 10 points is a level, each worth 2 trash uses.
//! - **Game over**: a full board with no mergeable neighbors.
//!
//! # Example
//!
//! ```
//! use just_divide_core::{GameSession, SessionConfig, SessionState};
//!
//! let mut state = SessionState::new();
//! state.queue.extend([8, 4]);
//! let mut game = GameSession::from_state(SessionConfig::default(), state);
//!
//! game.place_active(1, 1).unwrap();
//! let report = game.place_active(1, 0).unwrap();
//!
//! // 8 / 4 = 2, worth 4 points.
//! assert_eq!(report.score_delta, 4);
//! assert_eq!(game.board().value((1, 1).into()), Some(2));
//! ```

pub mod board;
pub mod clock;
pub mod error;
pub mod hints;
pub mod merge;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod terminal;
pub mod undo;

pub use just_divide_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{format_elapsed, ElapsedClock};
pub use error::{ActionError, PlaceError};
pub use hints::{hint_mask, HintMask};
pub use merge::{can_merge, resolve, MergeKind, MergeOutcome, MergeStep};
pub use rng::{SimpleRng, TileSource};
pub use scoring::{level_change, level_for_score, LevelChange};
pub use session::{
    GameEvent, GameSession, SessionConfig, SessionState, SessionStatus, TurnReport,
};
pub use snapshot::GameSnapshot;
pub use terminal::is_terminal;
pub use undo::UndoLog;

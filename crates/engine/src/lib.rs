//! Engine module - drives a session on behalf of a front end.
//!
//! The core crate is pure; this layer adds the pieces a playable game needs
//! around it without leaking I/O into the rules:
//!
//! - [`Engine`]: one handler for every [`GameAction`](crate::types::GameAction),
//!   structured logging of outcomes, and best-score persistence
//! - [`store`]: the [`BestScoreStore`] seam with memory and JSON-file backends
//! - [`message`]: the banner text shown after each action
//!
//! # Example
//!
//! ```
//! use just_divide_engine::{Engine, EngineConfig, MemoryBestScore};
//! use just_divide_engine::types::GameAction;
//!
//! let mut engine = Engine::new(EngineConfig::default(), MemoryBestScore::new());
//! engine.dispatch(GameAction::Place { row: 0, col: 0 }).unwrap();
//! assert_eq!(engine.snapshot().undo_depth, 1);
//! ```

mod engine;
pub mod message;
pub mod store;

pub use just_divide_core as core;
pub use just_divide_types as types;

pub use engine::{Engine, EngineConfig};
pub use message::{Message, MessageKind};
pub use store::{BestScoreStore, JsonFileBestScore, MemoryBestScore};

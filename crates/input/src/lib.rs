//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`InputCommand`]s and tracks the grid cursor that turns a
//! "place here" key into a concrete [`crate::types::GameAction::Place`].

pub mod handler;
pub mod map;

pub use just_divide_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, Direction, InputCommand};

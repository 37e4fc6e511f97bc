//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`core::GameSnapshot`] into a framebuffer of styled cells, and the renderer
//! flushes that framebuffer to the terminal with diffing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use just_divide_core as core;
pub use just_divide_engine as engine;
pub use just_divide_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{tile_color, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

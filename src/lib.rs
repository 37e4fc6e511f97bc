//! Just Divide (workspace facade crate).
//!
//! Re-exports the member crates under `just_divide::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use just_divide_core as core;
pub use just_divide_engine as engine;
pub use just_divide_input as input;
pub use just_divide_term as term;
pub use just_divide_types as types;

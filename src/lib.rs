//! tetris-mini (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_mini::{core, input, term, types}` so the
//! binary, integration tests and benchmarks share one import path.

pub use tetris_mini_core as core;
pub use tetris_mini_input as input;
pub use tetris_mini_term as term;
pub use tetris_mini_types as types;

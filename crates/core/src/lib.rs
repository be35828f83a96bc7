//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the grid, the active piece and the per-frame simulation.
//! It has no dependencies on terminals or input devices:
//!
//! - **Deterministic**: the same seed produces the same variant sequence
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any renderer that draws coloured tiles on a grid can use it
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 settled cells and line clearing
//! - [`piece`]: shape table, collision check, move/rotate/fall
//! - [`rng`]: seedable variant selection
//! - [`game_state`]: frame loop, locking, scoring, pause/restart
//! - [`snapshot`]: plain value handed to renderers each frame
//!
//! # Rules
//!
//! - Pieces spawn at the shape table's origin (top-left corner)
//! - Rotation turns about the piece's second cell; no wall kicks
//! - Gravity moves the piece one row every 300ms, or every 50ms while down is held
//! - A piece that cannot fall locks immediately and the next one spawns
//! - Each cleared row scores 100
//!
//! # Example
//!
//! ```
//! use tetris_mini_core::GameState;
//! use tetris_mini_types::{FrameInput, Point};
//!
//! let mut game = GameState::new(124);
//!
//! // The first piece is a vertical I in column 1.
//! assert_eq!(game.active().points()[0], Point::new(1, 0));
//!
//! let left = FrameInput { left: true, ..FrameInput::default() };
//! game.frame(16, &left);
//! assert_eq!(game.active().points()[0], Point::new(0, 0));
//! assert_eq!(game.score(), 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tetris_mini_types as types;

pub use game_state::GameState;
pub use grid::{ClearedRows, CommitOutcome, Grid};
pub use piece::{Piece, PiecePoints, SHAPES};
pub use rng::VariantPicker;
pub use snapshot::{ActiveSnapshot, GameSnapshot};

//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the core snapshot is drawn into a
//! plain framebuffer which is then flushed to the terminal through crossterm.
//! Grid cells are two characters wide to keep tiles roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_mini_core as core;
pub use tetris_mini_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{variant_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

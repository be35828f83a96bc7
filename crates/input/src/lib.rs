//! Terminal input for the game loop.
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and collects them into one
//! [`crate::types::FrameInput`] per frame.

pub mod handler;
pub mod map;

pub use tetris_mini_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};

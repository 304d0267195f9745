//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Direction`] steps and detects the
//! quit chord. Console input does not go through here: line-mode symbols are
//! mapped by [`crate::types::Direction::from_symbol`].

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};

//! Terminal maze runner (workspace facade crate).
//!
//! The maze rules live in dedicated crates under `crates/`; this package re-exports
//! them as `tui_maze::{core,input,term,types}` and adds the session plumbing the
//! binary needs.

pub mod config;
pub mod session;

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;

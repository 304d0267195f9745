//! Core maze logic module - pure, deterministic, and testable
//!
//! This module contains the maze rules: description parsing, grid invariants,
//! player movement and the solved/unsolvable state machine. It has **no
//! dependencies** on terminals or input devices, making it:
//!
//! - **Deterministic**: the same description and inputs always end the same way
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: both presenters drive the exact same engine
//!
//! # Module Structure
//!
//! - [`cell`]: typed cells with monotonic traversal state
//! - [`grid`]: rectangular grid with exactly one start and one end
//! - [`parser`]: description text → validated grid
//! - [`engine`]: player position, move validation, play state
//! - [`render`]: read-only projection into display tokens
//! - [`error`]: error taxonomy for loading and playing
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{load_description, render, MazeEngine};
//! use tui_maze_types::{DisplayToken, MoveOutcome};
//!
//! let grid = load_description("3 4\n####\n#S E\n####\n").unwrap();
//! let mut engine = MazeEngine::new(grid);
//!
//! assert_eq!(engine.input('d'), MoveOutcome::Moved);
//! assert_eq!(engine.input('d'), MoveOutcome::Solved);
//!
//! let frame = render(&engine);
//! assert_eq!(frame.get(1, 3), Some(DisplayToken::Player));
//! assert_eq!(frame.get(1, 2), Some(DisplayToken::PathVisited));
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod parser;
pub mod render;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use cell::{Cell, Position};
pub use engine::{MazeEngine, Player};
pub use error::{MalformedReason, MazeError, Mismatch};
pub use grid::Grid;
pub use parser::{load_description, load_file};
pub use render::{render, render_into, token_at, RenderFrame};

//! Terminal presenters for the maze.
//!
//! Two ways to show the same engine:
//! - [`console`]: line-oriented text with SGR colors, driven by any reader/writer
//! - [`maze_view`] + [`renderer`]: a framebuffer of colored tiles flushed to a
//!   raw-mode terminal with diff rendering
//!
//! Neither presenter owns game rules; both only read the engine's render frame.

pub mod console;
pub mod fb;
pub mod maze_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use console::{write_frame, ConsolePresenter, SOLVED_MESSAGE};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{AnchorY, MazeView, StatusView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};

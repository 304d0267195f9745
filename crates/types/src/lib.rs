//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, line console).
//!
//! # Description Symbols
//!
//! A maze description is a dimensions line followed by one text row per grid row:
//!
//! | Symbol | Cell kind | Notes |
//! |--------|-----------|-------|
//! | `#` | Wall | impassable |
//! | ` ` | Path | canonical path symbol |
//! | `.` | Path | accepted alias, never emitted |
//! | `S` | Start | exactly one per maze |
//! | `E` | End | exactly one per maze |
//! | `\n` | - | row delimiter |
//!
//! # Traversal
//!
//! Path cells record how often the player walked over them:
//!
//! `Untouched → VisitedOnce → VisitedTwiceOrMore`
//!
//! The order is monotonic; a cell never goes back to a lower state.
//!
//! # Display Tokens
//!
//! Every cell (and the player) projects to a [`DisplayToken`]. A token carries two
//! independent channels so presenters can pick the one they draw with:
//!
//! | Token | Glyph | Text color | Swatch |
//! |-------|-------|------------|--------|
//! | Wall | `█` | default | gray |
//! | Path | ` ` | default | white |
//! | PathVisited | `█` | cyan | cyan |
//! | PathRevisited | `█` | dark blue | blue |
//! | Start | `█` | cyan | cyan |
//! | End | `█` | dark red | red |
//! | Player | `█` | dark green | green |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{CellKind, Direction, Traversal};
//!
//! assert_eq!(CellKind::from_symbol('#'), Some(CellKind::Wall));
//! assert_eq!(CellKind::from_symbol('.'), Some(CellKind::Path));
//! assert!(CellKind::Start.is_traversable());
//!
//! assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//!
//! assert!(Traversal::VisitedOnce < Traversal::VisitedTwiceOrMore);
//! ```

/// Wall symbol in a maze description
pub const WALL_SYMBOL: char = '#';

/// Canonical path symbol (emitted when serializing)
pub const PATH_SYMBOL: char = ' ';

/// Alternate path symbol (accepted when parsing, never emitted)
pub const PATH_ALIAS_SYMBOL: char = '.';

/// Start point symbol
pub const START_SYMBOL: char = 'S';

/// End point symbol
pub const END_SYMBOL: char = 'E';

/// Row delimiter in the grid body
pub const ROW_DELIMITER: char = '\n';

/// Largest grid (rows * cols) a description may declare.
///
/// 4096 x 1024 cells; anything larger is rejected before allocation.
pub const MAX_GRID_CELLS: usize = 4 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_symbols_are_distinct() {
        let symbols = [
            WALL_SYMBOL,
            PATH_SYMBOL,
            PATH_ALIAS_SYMBOL,
            START_SYMBOL,
            END_SYMBOL,
            ROW_DELIMITER,
        ];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn cell_kind_symbol_roundtrip_uses_canonical_path() {
        for kind in [CellKind::Wall, CellKind::Path, CellKind::Start, CellKind::End] {
            assert_eq!(CellKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(CellKind::Path.symbol(), PATH_SYMBOL);
    }

    #[test]
    fn only_wasd_map_to_directions() {
        assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
        assert_eq!(Direction::from_symbol('s'), Some(Direction::Down));
        assert_eq!(Direction::from_symbol('a'), Some(Direction::Left));
        assert_eq!(Direction::from_symbol('d'), Some(Direction::Right));
        assert_eq!(Direction::from_symbol('W'), None);
        assert_eq!(Direction::from_symbol('x'), None);
    }

    #[test]
    fn traversal_is_ordered() {
        assert!(Traversal::Untouched < Traversal::VisitedOnce);
        assert!(Traversal::VisitedOnce < Traversal::VisitedTwiceOrMore);
        assert!(!Traversal::Untouched.is_visited());
        assert!(Traversal::VisitedTwiceOrMore.is_visited());
    }

    #[test]
    fn swatch_channel_matches_token_table() {
        assert_eq!(DisplayToken::Wall.swatch(), Rgb::new(128, 128, 128));
        assert_eq!(DisplayToken::Path.swatch(), Rgb::new(255, 255, 255));
        assert_eq!(DisplayToken::PathVisited.swatch(), Rgb::new(0, 255, 255));
        assert_eq!(DisplayToken::PathRevisited.swatch(), Rgb::new(0, 0, 255));
        assert_eq!(DisplayToken::End.swatch(), Rgb::new(255, 0, 0));
        assert_eq!(DisplayToken::Player.swatch(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn text_channel_uses_sgr_codes() {
        assert_eq!(DisplayToken::Wall.text_color().sgr(), None);
        assert_eq!(DisplayToken::PathVisited.text_color().sgr(), Some(96));
        assert_eq!(DisplayToken::PathRevisited.text_color().sgr(), Some(34));
        assert_eq!(DisplayToken::End.text_color().sgr(), Some(31));
        assert_eq!(DisplayToken::Player.text_color().sgr(), Some(32));
        assert_eq!(DisplayToken::Path.glyph(), ' ');
        assert_eq!(DisplayToken::Player.glyph(), '█');
    }
}

/// The four cell kinds of a maze
///
/// - **Wall**: impassable
/// - **Path**: passable, tracks traversal history
/// - **Start**: passable, where the player begins
/// - **End**: passable, the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Path,
    Start,
    End,
}

impl CellKind {
    /// Parse a cell kind from a description symbol
    ///
    /// Both `' '` and `'.'` map to [`CellKind::Path`]. The row delimiter is not a
    /// cell symbol and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::CellKind;
    ///
    /// assert_eq!(CellKind::from_symbol('S'), Some(CellKind::Start));
    /// assert_eq!(CellKind::from_symbol(' '), Some(CellKind::Path));
    /// assert_eq!(CellKind::from_symbol('s'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            WALL_SYMBOL => Some(CellKind::Wall),
            PATH_SYMBOL | PATH_ALIAS_SYMBOL => Some(CellKind::Path),
            START_SYMBOL => Some(CellKind::Start),
            END_SYMBOL => Some(CellKind::End),
            _ => None,
        }
    }

    /// Canonical description symbol
    pub fn symbol(&self) -> char {
        match self {
            CellKind::Wall => WALL_SYMBOL,
            CellKind::Path => PATH_SYMBOL,
            CellKind::Start => START_SYMBOL,
            CellKind::End => END_SYMBOL,
        }
    }

    /// Whether the player may stand on a cell of this kind
    pub fn is_traversable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Lowercase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Wall => "wall",
            CellKind::Path => "path",
            CellKind::Start => "start",
            CellKind::End => "end",
        }
    }
}

/// How often a cell has been walked over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Traversal {
    #[default]
    Untouched,
    VisitedOnce,
    VisitedTwiceOrMore,
}

impl Traversal {
    /// True for `VisitedOnce` and `VisitedTwiceOrMore`
    pub fn is_visited(&self) -> bool {
        *self >= Traversal::VisitedOnce
    }
}

/// A unit step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a console input symbol to a direction
    ///
    /// Only lowercase `w`, `a`, `s`, `d` are recognized; anything else is `None`
    /// and callers treat it as a no-op.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Row/column offset `(delta_row, delta_col)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Result of forwarding one input to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Input ignored: unknown symbol, blocked destination, or the game already ended
    NoOp,
    /// Player moved and the game goes on
    Moved,
    /// Player reached the end cell
    Solved,
    /// Every path was visited without reaching the end cell
    Unsolvable,
}

impl MoveOutcome {
    /// True for `Solved` and `Unsolvable`
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Solved | MoveOutcome::Unsolvable)
    }
}

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Playing,
    Solved,
    DeclaredUnsolvable,
}

impl PlayState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PlayState::Playing)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground color for the text channel, as classic SGR codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Terminal default foreground
    Default,
    /// SGR 96
    Cyan,
    /// SGR 34
    DarkBlue,
    /// SGR 31
    DarkRed,
    /// SGR 32
    DarkGreen,
}

impl TextColor {
    /// SGR foreground code, `None` for the terminal default
    pub fn sgr(&self) -> Option<u8> {
        match self {
            TextColor::Default => None,
            TextColor::Cyan => Some(96),
            TextColor::DarkBlue => Some(34),
            TextColor::DarkRed => Some(31),
            TextColor::DarkGreen => Some(32),
        }
    }
}

/// What a presenter draws for one grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToken {
    Wall,
    /// Path never walked on
    Path,
    /// Path walked on once
    PathVisited,
    /// Path walked back over
    PathRevisited,
    Start,
    End,
    Player,
}

impl DisplayToken {
    /// Text channel glyph
    pub fn glyph(&self) -> char {
        match self {
            DisplayToken::Path => ' ',
            _ => '█',
        }
    }

    /// Text channel color
    pub fn text_color(&self) -> TextColor {
        match self {
            DisplayToken::Wall | DisplayToken::Path => TextColor::Default,
            DisplayToken::PathVisited | DisplayToken::Start => TextColor::Cyan,
            DisplayToken::PathRevisited => TextColor::DarkBlue,
            DisplayToken::End => TextColor::DarkRed,
            DisplayToken::Player => TextColor::DarkGreen,
        }
    }

    /// Color swatch channel
    pub fn swatch(&self) -> Rgb {
        match self {
            DisplayToken::Wall => Rgb::new(128, 128, 128),
            DisplayToken::Path => Rgb::new(255, 255, 255),
            DisplayToken::PathVisited | DisplayToken::Start => Rgb::new(0, 255, 255),
            DisplayToken::PathRevisited => Rgb::new(0, 0, 255),
            DisplayToken::End => Rgb::new(255, 0, 0),
            DisplayToken::Player => Rgb::new(0, 255, 0),
        }
    }
}

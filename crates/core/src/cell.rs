//! Cell module - one typed square of the maze
//!
//! A cell's kind and coordinates are fixed at creation. Only the traversal state
//! changes, and only upwards.

use crate::types::{CellKind, DisplayToken, Traversal};

/// Grid coordinate, row-major (row 0 is the top line of the description)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    position: Position,
    traversal: Traversal,
}

impl Cell {
    pub fn new(kind: CellKind, position: Position) -> Self {
        Self {
            kind,
            position,
            traversal: Traversal::Untouched,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_traversable(&self) -> bool {
        self.kind.is_traversable()
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// `Untouched → VisitedOnce`; no effect on walls or cells already visited
    pub fn mark_visited_once(&mut self) {
        if self.is_traversable() && self.traversal == Traversal::Untouched {
            self.traversal = Traversal::VisitedOnce;
        }
    }

    /// Raise a path cell to `VisitedTwiceOrMore`
    ///
    /// Start and end cells stop at `VisitedOnce`, walls never change.
    pub fn mark_visited_twice(&mut self) {
        if self.kind == CellKind::Path {
            self.traversal = Traversal::VisitedTwiceOrMore;
        }
    }

    /// Token drawn for this cell when the player is elsewhere
    pub fn display_token(&self) -> DisplayToken {
        match self.kind {
            CellKind::Wall => DisplayToken::Wall,
            CellKind::Start => DisplayToken::Start,
            CellKind::End => DisplayToken::End,
            CellKind::Path => match self.traversal {
                Traversal::Untouched => DisplayToken::Path,
                Traversal::VisitedOnce => DisplayToken::PathVisited,
                Traversal::VisitedTwiceOrMore => DisplayToken::PathRevisited,
            },
        }
    }
}

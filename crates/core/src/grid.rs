//! Grid module - the rectangular maze of typed cells
//!
//! Cells are stored in a flat vector, row-major (`row * cols + col`).
//! A grid always holds exactly `rows * cols` cells, exactly one start and exactly
//! one end; constructors refuse anything else.

use std::fmt;

use crate::cell::{Cell, Position};
use crate::error::MazeError;
use crate::types::{CellKind, ROW_DELIMITER};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl Grid {
    /// Build a grid from row-major cell kinds.
    ///
    /// Fails with [`MazeError::InvalidGridConstruction`] when the grid is empty,
    /// `kinds` does not hold `rows * cols` entries, or the start/end count is not
    /// exactly one each.
    pub fn from_kinds(rows: usize, cols: usize, kinds: Vec<CellKind>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::invalid_grid("grid has no cells"));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| MazeError::invalid_grid("grid dimensions overflow"))?;
        if kinds.len() != expected {
            return Err(MazeError::invalid_grid(format!(
                "{} cells given for a {}x{} grid",
                kinds.len(),
                rows,
                cols
            )));
        }

        let mut start = None;
        let mut end = None;
        let mut cells = Vec::with_capacity(expected);
        for (i, kind) in kinds.into_iter().enumerate() {
            let position = Position::new(i / cols, i % cols);
            let slot = match kind {
                CellKind::Start => Some(&mut start),
                CellKind::End => Some(&mut end),
                CellKind::Wall | CellKind::Path => None,
            };
            if let Some(slot) = slot {
                if slot.replace(position).is_some() {
                    return Err(MazeError::invalid_grid(format!(
                        "more than one {} cell",
                        kind.as_str()
                    )));
                }
            }
            cells.push(Cell::new(kind, position));
        }

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                rows,
                cols,
                cells,
                start,
                end,
            }),
            _ => Err(MazeError::invalid_grid("grid needs one start and one end cell")),
        }
    }

    /// Build a grid from text rows using the description symbols.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::invalid_grid("grid has no rows"));
        };
        let cols = first.as_ref().chars().count();

        let mut kinds = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(MazeError::invalid_grid(format!(
                    "row {} is not {} columns wide",
                    row, cols
                )));
            }
            for ch in line.chars() {
                let kind = CellKind::from_symbol(ch).ok_or_else(|| {
                    MazeError::invalid_grid(format!("unknown cell symbol {:?}", ch))
                })?;
                kinds.push(kind);
            }
        }
        Self::from_kinds(rows.len(), cols, kinds)
    }

    #[inline(always)]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: i64, col: i64) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: i64, col: i64) -> Option<&mut Cell> {
        self.index(row, col).map(move |idx| &mut self.cells[idx])
    }

    pub fn cell_at(&self, position: Position) -> Option<&Cell> {
        self.get(position.row as i64, position.col as i64)
    }

    pub fn cell_at_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.get_mut(position.row as i64, position.col as i64)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }

    /// True when every path cell has been visited at least once.
    ///
    /// Vacuously true for a grid without path cells.
    pub fn all_paths_traversed(&self) -> bool {
        self.cells
            .iter()
            .filter(|c| c.kind() == CellKind::Path)
            .all(|c| c.traversal().is_visited())
    }

    /// Serialize back to the description format.
    ///
    /// Paths are written as spaces; traversal history is not part of the format.
    pub fn to_description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.kind().symbol())?;
            }
            write!(f, "{}", ROW_DELIMITER)?;
        }
        Ok(())
    }
}

//! Maze description parser
//!
//! Turns description text into a validated [`Grid`] in a single pass:
//!
//! 1. The first line must hold two positive integers, `rows cols`.
//! 2. The remaining text is read character by character. `\n` moves to the next
//!    row; every other character must be a cell symbol.
//! 3. A second `S` or `E` is reported before the bounds check on that character,
//!    and the bounds check fires at the first character outside the declared
//!    rectangle.
//! 4. At the end, a missing start/end point is reported before any row that came
//!    up short.
//!
//! No grid is ever returned unless every rule holds.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{MalformedReason, MazeError, Mismatch};
use crate::grid::Grid;
use crate::types::{CellKind, MAX_GRID_CELLS, ROW_DELIMITER};

/// Parse a maze description held in memory.
pub fn load_description(text: &str) -> Result<Grid, MazeError> {
    if text.is_empty() {
        return Err(MazeError::malformed(MalformedReason::NoDimensions));
    }

    let (header, body) = match text.split_once(ROW_DELIMITER) {
        Some((header, body)) => (header, body),
        None => (text, ""),
    };
    let (rows, cols) = parse_dimensions(header)?;
    trace!(rows, cols, "dimensions line accepted");

    let len = rows
        .checked_mul(cols)
        .filter(|&n| n <= MAX_GRID_CELLS)
        .ok_or_else(|| MazeError::malformed(MalformedReason::DimensionsTooLarge))?;
    let mut slots: Vec<Option<CellKind>> = vec![None; len];

    let mut row = 0usize;
    let mut col = 0usize;
    let mut has_start = false;
    let mut has_end = false;

    for ch in body.chars() {
        if ch == ROW_DELIMITER {
            col = 0;
            row += 1;
            continue;
        }

        let kind = CellKind::from_symbol(ch).ok_or_else(|| {
            MazeError::malformed(MalformedReason::InvalidCharacter { ch, row, col })
        })?;
        match kind {
            CellKind::Start if has_start => {
                return Err(MazeError::malformed(MalformedReason::DuplicateStart));
            }
            CellKind::Start => has_start = true,
            CellKind::End if has_end => {
                return Err(MazeError::malformed(MalformedReason::DuplicateEnd));
            }
            CellKind::End => has_end = true,
            CellKind::Wall | CellKind::Path => {}
        }

        if row >= rows || col >= cols {
            return Err(MazeError::mismatch(Mismatch::OutOfBounds {
                row,
                col,
                rows,
                cols,
            }));
        }

        slots[row * cols + col] = Some(kind);
        col += 1;
    }

    if !has_start || !has_end {
        return Err(MazeError::malformed(MalformedReason::MissingStartOrEnd));
    }

    // Rows fill left to right, so a hole means the row ended early.
    for (row, chunk) in slots.chunks(cols).enumerate() {
        let len = chunk.iter().take_while(|slot| slot.is_some()).count();
        if len < cols {
            return Err(MazeError::mismatch(Mismatch::ShortRow { row, len, cols }));
        }
    }

    let kinds = slots.into_iter().flatten().collect();
    let grid = Grid::from_kinds(rows, cols, kinds)?;
    debug!(rows, cols, start = ?grid.start(), end = ?grid.end(), "maze description parsed");
    Ok(grid)
}

/// Read and parse a maze description file.
///
/// A missing file is [`MazeError::SourceNotFound`]; any other read failure,
/// including text that is not UTF-8, is [`MazeError::SourceRead`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Grid, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MazeError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => MazeError::SourceRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "maze description read");
    load_description(&text)
}

fn parse_dimensions(header: &str) -> Result<(usize, usize), MazeError> {
    let bad = || MazeError::malformed(MalformedReason::BadDimensions);

    // A CRLF-terminated header still counts as one line.
    let header = header.strip_suffix('\r').unwrap_or(header);
    let mut tokens = header.split_whitespace();
    let (Some(rows), Some(cols), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(bad());
    };

    let rows: usize = rows.parse().map_err(|_| bad())?;
    let cols: usize = cols.parse().map_err(|_| bad())?;
    if rows == 0 || cols == 0 {
        return Err(bad());
    }
    Ok((rows, cols))
}

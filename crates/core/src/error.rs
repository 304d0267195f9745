//! Error types for loading and playing a maze.

use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error};

/// Why a maze description was rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MalformedReason {
    #[display("no dimensions given")]
    NoDimensions,
    #[display("dimensions not in expected format")]
    BadDimensions,
    #[display("dimensions exceed the supported grid size")]
    DimensionsTooLarge,
    #[display("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter { ch: char, row: usize, col: usize },
    #[display("more than one start point")]
    DuplicateStart,
    #[display("more than one end point")]
    DuplicateEnd,
    #[display("missing start or end point")]
    MissingStartOrEnd,
}

/// How the populated grid disagrees with the declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mismatch {
    /// A character landed outside `[0, rows) x [0, cols)`.
    #[display("character at row {row}, column {col} outside declared {rows}x{cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A declared row holds fewer than `cols` characters.
    #[display("row {row} has {len} of {cols} declared columns")]
    ShortRow { row: usize, len: usize, cols: usize },
}

/// Errors from loading a description, building a grid, or playing it out.
#[derive(Debug, Display, Error)]
pub enum MazeError {
    /// The description file does not exist.
    #[display("maze description {} not found", path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },

    /// The description exists but could not be read.
    #[display("failed to read maze description {}: {source}", path.display())]
    SourceRead { path: PathBuf, source: io::Error },

    #[display("malformed maze description: {reason}")]
    MalformedDescription {
        #[error(not(source))]
        reason: MalformedReason,
    },

    #[display("maze size mismatch: {mismatch}")]
    DimensionMismatch {
        #[error(not(source))]
        mismatch: Mismatch,
    },

    /// Grid passed to the engine cannot be played.
    #[display("invalid maze grid: {reason}")]
    InvalidGridConstruction {
        #[error(not(source))]
        reason: String,
    },

    /// Every path was visited without reaching the end cell.
    #[display("maze is unsolvable: all paths traversed without reaching the end point")]
    Unsolvable,
}

impl MazeError {
    pub(crate) fn malformed(reason: MalformedReason) -> Self {
        MazeError::MalformedDescription { reason }
    }

    pub(crate) fn mismatch(mismatch: Mismatch) -> Self {
        MazeError::DimensionMismatch { mismatch }
    }

    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        MazeError::InvalidGridConstruction {
            reason: reason.into(),
        }
    }

    /// Malformed cause, when this is a content error.
    pub fn malformed_reason(&self) -> Option<MalformedReason> {
        match self {
            MazeError::MalformedDescription { reason } => Some(*reason),
            _ => None,
        }
    }

    /// True for errors raised by the text source rather than its content.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            MazeError::SourceNotFound { .. } | MazeError::SourceRead { .. }
        )
    }
}

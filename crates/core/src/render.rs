//! Render adapter - read-only projection of a session into display tokens
//!
//! The player's token wins over the cell underneath it. Nothing here knows how a
//! token is drawn; presenters pick the glyph or the swatch channel themselves.

use crate::cell::Position;
use crate::engine::MazeEngine;
use crate::types::DisplayToken;

/// Display tokens for every grid coordinate, row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderFrame {
    rows: usize,
    cols: usize,
    tokens: Vec<DisplayToken>,
}

impl RenderFrame {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<DisplayToken> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.tokens[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[DisplayToken]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.tokens[start..start + self.cols])
    }

    /// `(position, token)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, DisplayToken)> + '_ {
        let cols = self.cols;
        self.tokens
            .iter()
            .enumerate()
            .map(move |(i, &token)| (Position::new(i / cols, i % cols), token))
    }

    /// The text channel as plain glyphs, one line per row.
    pub fn to_glyph_lines(&self) -> Vec<String> {
        self.tokens
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }
}

/// Token drawn at `position`, `None` if out of bounds
pub fn token_at(engine: &MazeEngine, position: Position) -> Option<DisplayToken> {
    if engine.player().position() == position {
        return Some(engine.player().display_token());
    }
    engine
        .grid()
        .cell_at(position)
        .map(|cell| cell.display_token())
}

/// Render the session into an existing frame, reusing its allocation.
pub fn render_into(engine: &MazeEngine, out: &mut RenderFrame) {
    let grid = engine.grid();
    out.rows = grid.rows();
    out.cols = grid.cols();
    out.tokens.clear();
    out.tokens
        .extend(grid.cells().iter().map(|cell| cell.display_token()));

    let player = engine.player().position();
    if let Some(slot) = out.tokens.get_mut(player.row * out.cols + player.col) {
        *slot = engine.player().display_token();
    }
}

/// Render the session into a new frame.
pub fn render(engine: &MazeEngine) -> RenderFrame {
    let mut frame = RenderFrame::default();
    render_into(engine, &mut frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_token_covers_the_start_cell() {
        let engine = MazeEngine::from_rows(&["####", "#S #", "#E##"]).unwrap();
        let frame = render(&engine);
        assert_eq!(frame.rows(), 3);
        assert_eq!(frame.cols(), 4);
        assert_eq!(frame.get(1, 1), Some(DisplayToken::Player));
        assert_eq!(frame.get(1, 2), Some(DisplayToken::Path));
        assert_eq!(frame.get(2, 1), Some(DisplayToken::End));
        assert_eq!(frame.get(3, 0), None);
        assert_eq!(token_at(&engine, Position::new(1, 1)), Some(DisplayToken::Player));
        assert_eq!(token_at(&engine, Position::new(9, 9)), None);
    }

    #[test]
    fn start_shows_again_after_player_leaves() {
        let mut engine = MazeEngine::from_rows(&["####", "#S #", "#E##"]).unwrap();
        engine.input('d');
        let frame = render(&engine);
        assert_eq!(frame.get(1, 1), Some(DisplayToken::Start));
        assert_eq!(frame.get(1, 2), Some(DisplayToken::Player));
    }

    #[test]
    fn render_into_reuses_frame() {
        let engine = MazeEngine::from_rows(&["SE"]).unwrap();
        let mut frame = render(&engine);
        let capacity = frame.tokens.capacity();
        render_into(&engine, &mut frame);
        assert_eq!(frame.tokens.capacity(), capacity);
        assert_eq!(frame.iter().count(), 2);
        assert_eq!(frame.to_glyph_lines(), vec!["██".to_string()]);
    }
}

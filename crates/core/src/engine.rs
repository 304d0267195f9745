//! Maze engine - player position, move validation and the play state machine
//!
//! The engine owns the grid and the player for one session:
//!
//! - `Playing` → `Solved` when the player steps onto the end cell
//! - `Playing` → `DeclaredUnsolvable` when every path cell has been visited and
//!   the player is not on the end cell
//!
//! Both terminal states are final; every later move is a no-op.
//!
//! # Move validity
//!
//! [`MazeEngine::valid_move`] checks `row >= 0` and `col < cols` explicitly and
//! leaves `row >= rows` and `col < 0` to the checked grid lookup. The outcome is
//! the same for every coordinate (anything off the grid is rejected), but the
//! check order is kept as is.

use tracing::{debug, info, trace};

use crate::cell::{Cell, Position};
use crate::error::MazeError;
use crate::grid::Grid;
use crate::types::{Direction, DisplayToken, MoveOutcome, PlayState};

/// The player's avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    position: Position,
}

impl Player {
    fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn display_token(&self) -> DisplayToken {
        DisplayToken::Player
    }
}

/// One play session over a validated grid
#[derive(Debug, Clone)]
pub struct MazeEngine {
    grid: Grid,
    player: Player,
    state: PlayState,
    /// Accepted moves so far.
    moves: u32,
}

impl MazeEngine {
    /// Start a session with the player on the start cell.
    pub fn new(grid: Grid) -> Self {
        let player = Player::new(grid.start());
        debug!(rows = grid.rows(), cols = grid.cols(), start = ?grid.start(), "maze engine created");
        Self {
            grid,
            player,
            state: PlayState::Playing,
            moves: 0,
        }
    }

    /// Build the grid from text rows and start a session.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        Grid::from_rows(rows).map(Self::new)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    /// Cell at `(row, col)`, `None` if out of bounds
    pub fn cell_at(&self, row: i64, col: i64) -> Option<&Cell> {
        self.grid.get(row, col)
    }

    /// Whether the player may stand on `(row, col)`
    pub fn valid_move(&self, row: i64, col: i64) -> bool {
        row >= 0
            && col < self.grid.cols() as i64
            && self
                .grid
                .get(row, col)
                .is_some_and(|cell| cell.is_traversable())
    }

    /// Shift the player by the given offsets.
    ///
    /// A blocked destination is a silent [`MoveOutcome::NoOp`]. After a valid
    /// move the coverage check runs first: if every path cell is already visited
    /// and the player is not on the end cell, the session is declared unsolvable
    /// and no traversal marks are applied. Otherwise the destination is marked
    /// visited once, or, if it already was, the cell being left is marked as
    /// walked back over.
    pub fn move_player(&mut self, delta_row: i32, delta_col: i32) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome::NoOp;
        }

        let current = self.player.position;
        let row = current.row as i64 + delta_row as i64;
        let col = current.col as i64 + delta_col as i64;
        if !self.valid_move(row, col) {
            trace!(row, col, "move rejected");
            return MoveOutcome::NoOp;
        }

        let next = Position::new(row as usize, col as usize);
        self.player.position = next;
        self.moves += 1;
        trace!(?current, ?next, moves = self.moves, "player moved");

        if self.grid.all_paths_traversed() && !self.has_been_solved() {
            self.state = PlayState::DeclaredUnsolvable;
            info!(moves = self.moves, "all paths traversed without reaching the end point");
            return MoveOutcome::Unsolvable;
        }

        let revisit = self
            .grid
            .cell_at(next)
            .is_some_and(|cell| cell.traversal().is_visited());
        let marked = if revisit { current } else { next };
        if let Some(cell) = self.grid.cell_at_mut(marked) {
            if revisit {
                cell.mark_visited_twice();
            } else {
                cell.mark_visited_once();
            }
        }

        if self.has_been_solved() {
            self.state = PlayState::Solved;
            info!(moves = self.moves, "maze solved");
            return MoveOutcome::Solved;
        }
        MoveOutcome::Moved
    }

    /// Move one unit step.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let (delta_row, delta_col) = direction.delta();
        self.move_player(delta_row, delta_col)
    }

    /// Forward a raw input symbol (`w`, `a`, `s`, `d`); anything else is a no-op.
    pub fn input(&mut self, symbol: char) -> MoveOutcome {
        match Direction::from_symbol(symbol) {
            Some(direction) => self.step(direction),
            None => MoveOutcome::NoOp,
        }
    }

    /// True when the player stands on the end cell
    pub fn has_been_solved(&self) -> bool {
        self.player.position == self.grid.end()
    }

    /// True when every path cell has been visited at least once
    pub fn all_paths_traversed(&self) -> bool {
        self.grid.all_paths_traversed()
    }

    /// `Err(MazeError::Unsolvable)` once the session was declared unsolvable.
    pub fn check_solvable(&self) -> Result<(), MazeError> {
        match self.state {
            PlayState::DeclaredUnsolvable => Err(MazeError::Unsolvable),
            PlayState::Playing | PlayState::Solved => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellKind, Traversal};

    fn engine() -> MazeEngine {
        MazeEngine::from_rows(&[
            "#######",
            "#S#   #",
            "# ### #",
            "# #   #",
            "# # # #",
            "#   #E#",
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_move() {
        let maze = engine();
        assert!(maze.valid_move(2, 1));
        assert!(maze.valid_move(3, 5));
        assert!(!maze.valid_move(0, 0));
        assert!(!maze.valid_move(-1, -1));
        assert!(!maze.valid_move(1, 7));
        assert!(!maze.valid_move(7, 1));
        assert!(!maze.valid_move(1, -1));
    }

    #[test]
    fn test_move_player() {
        let mut maze = engine();
        let start = maze.player().position();

        assert_eq!(maze.move_player(1, 0), MoveOutcome::Moved);
        assert_eq!(maze.player().position(), Position::new(start.row + 1, start.col));

        // Wall to the right.
        assert_eq!(maze.move_player(0, 1), MoveOutcome::NoOp);
        // Wall to the left.
        assert_eq!(maze.move_player(0, -1), MoveOutcome::NoOp);
        assert_eq!(maze.player().position(), Position::new(start.row + 1, start.col));
        assert_eq!(maze.moves(), 1);
    }

    #[test]
    fn test_has_been_solved_by_direct_jump() {
        let mut maze = engine();
        assert!(!maze.has_been_solved());
        assert_eq!(maze.move_player(4, 4), MoveOutcome::Solved);
        assert!(maze.has_been_solved());
        assert_eq!(maze.state(), PlayState::Solved);
    }

    #[test]
    fn test_player_starts_on_start() {
        let maze = engine();
        assert_eq!(maze.player().row(), 1);
        assert_eq!(maze.player().col(), 1);
        assert_eq!(maze.dimensions(), (7, 7));
        assert_eq!(maze.cell_at(1, 1).map(|c| c.kind()), Some(CellKind::Start));
        assert_eq!(maze.cell_at(3, 3).map(|c| c.kind()), Some(CellKind::Path));
        assert_eq!(maze.cell_at(0, 0).map(|c| c.kind()), Some(CellKind::Wall));
        assert_eq!(maze.cell_at(5, 5).map(|c| c.kind()), Some(CellKind::End));
    }

    #[test]
    fn test_backtrack_marks_the_cell_being_left() {
        let mut maze = engine();
        maze.input('s'); // (2,1)
        maze.input('s'); // (3,1)
        maze.input('w'); // back to (2,1): (3,1) is left behind twice-walked

        let grid = maze.grid();
        assert_eq!(grid.get(2, 1).unwrap().traversal(), Traversal::VisitedOnce);
        assert_eq!(
            grid.get(3, 1).unwrap().traversal(),
            Traversal::VisitedTwiceOrMore
        );
    }

    #[test]
    fn test_leaving_start_is_never_twice_marked() {
        let mut maze = engine();
        maze.input('s'); // (2,1) once
        maze.input('w'); // back on start, start marked once
        maze.input('s'); // (2,1) already once: would mark start twice
        assert_eq!(
            maze.grid().get(1, 1).unwrap().traversal(),
            Traversal::VisitedOnce
        );
    }

    #[test]
    fn test_unknown_input_is_noop() {
        let mut maze = engine();
        for symbol in ['x', 'W', ' ', 'q'] {
            assert_eq!(maze.input(symbol), MoveOutcome::NoOp);
        }
        assert_eq!(maze.moves(), 0);
    }

    #[test]
    fn test_check_solvable() {
        let mut maze = MazeEngine::from_rows(&["#####", "#S #E", "#####"]).unwrap();
        assert!(maze.check_solvable().is_ok());
        assert_eq!(maze.input('d'), MoveOutcome::Moved);
        assert_eq!(maze.input('a'), MoveOutcome::Unsolvable);
        assert!(matches!(maze.check_solvable(), Err(MazeError::Unsolvable)));
    }
}

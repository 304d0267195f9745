//! Engine tests - movement, traversal marking and the play state machine

use tui_maze::core::{load_description, MazeEngine, MazeError, Position};
use tui_maze::types::{Direction, MoveOutcome, PlayState, Traversal};

const SMALL_MAP: &str = "7 7
#######
#S#   #
# ### #
# #   #
# # # #
#   #E#
#######
";

fn small() -> MazeEngine {
    MazeEngine::new(load_description(SMALL_MAP).unwrap())
}

fn traversal(engine: &MazeEngine, row: i64, col: i64) -> Traversal {
    engine.cell_at(row, col).unwrap().traversal()
}

fn play(engine: &mut MazeEngine, keys: &str) -> Vec<MoveOutcome> {
    keys.chars().map(|k| engine.input(k)).collect()
}

#[test]
fn test_player_starts_on_start() {
    let engine = small();
    assert_eq!(engine.player().position(), engine.grid().start());
    assert_eq!(engine.state(), PlayState::Playing);
    assert_eq!(engine.moves(), 0);
    assert_eq!(engine.dimensions(), (7, 7));
}

#[test]
fn test_solving_the_small_map() {
    let mut engine = small();
    let outcomes = play(&mut engine, "ssssddwwddss");
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Solved));
    assert!(outcomes[..11].iter().all(|o| *o == MoveOutcome::Moved));
    assert!(engine.has_been_solved());
    assert_eq!(engine.state(), PlayState::Solved);
    assert_eq!(engine.moves(), 12);
    assert!(engine.check_solvable().is_ok());
}

#[test]
fn test_reaching_end_beats_full_coverage() {
    // The only path cell is covered before the last step lands on E.
    let mut engine = MazeEngine::from_rows(&["#####", "#S E#", "#####"]).unwrap();
    assert_eq!(engine.input('d'), MoveOutcome::Moved);
    assert!(engine.all_paths_traversed());
    assert_eq!(engine.input('d'), MoveOutcome::Solved);
    assert!(engine.check_solvable().is_ok());
}

#[test]
fn test_covering_every_path_without_the_end_is_unsolvable() {
    let mut engine = MazeEngine::from_rows(&["#####", "#S #E", "#####"]).unwrap();
    assert_eq!(engine.input('d'), MoveOutcome::Moved);
    assert_eq!(engine.input('a'), MoveOutcome::Unsolvable);
    assert_eq!(engine.state(), PlayState::DeclaredUnsolvable);
    assert!(!engine.has_been_solved());
    assert!(matches!(engine.check_solvable(), Err(MazeError::Unsolvable)));
}

#[test]
fn test_unsolvable_move_applies_no_marks() {
    let mut engine = MazeEngine::from_rows(&["#####", "#S #E", "#####"]).unwrap();
    play(&mut engine, "da");
    // The player stands on S but the return trip left no trace.
    assert_eq!(engine.player().position(), Position::new(1, 1));
    assert_eq!(traversal(&engine, 1, 1), Traversal::Untouched);
    assert_eq!(traversal(&engine, 1, 2), Traversal::VisitedOnce);
}

#[test]
fn test_walls_are_idempotent() {
    let mut engine = small();
    let before = engine.grid().clone();
    for key in ['w', 'a', 'd'] {
        assert_eq!(engine.input(key), MoveOutcome::NoOp);
    }
    assert_eq!(engine.player().position(), Position::new(1, 1));
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.moves(), 0);
}

#[test]
fn test_unknown_input_is_ignored() {
    let mut engine = small();
    for key in ['x', 'W', ' ', 'q', '\n'] {
        assert_eq!(engine.input(key), MoveOutcome::NoOp);
    }
    assert_eq!(engine.moves(), 0);
}

#[test]
fn test_first_visit_marks_destination() {
    let mut engine = small();
    engine.step(Direction::Down);
    assert_eq!(traversal(&engine, 2, 1), Traversal::VisitedOnce);
    assert_eq!(traversal(&engine, 1, 1), Traversal::Untouched);
}

#[test]
fn test_backtracking_marks_the_cell_being_left() {
    let mut engine = small();
    play(&mut engine, "ssw");
    assert_eq!(engine.player().position(), Position::new(2, 1));
    assert_eq!(traversal(&engine, 2, 1), Traversal::VisitedOnce);
    assert_eq!(traversal(&engine, 3, 1), Traversal::VisitedTwiceOrMore);
}

#[test]
fn test_start_cell_never_reaches_twice() {
    let mut engine = small();
    play(&mut engine, "wswsws");
    assert!(traversal(&engine, 1, 1) <= Traversal::VisitedOnce);
}

#[test]
fn test_bounds_checks() {
    let engine = MazeEngine::from_rows(&["S E"]).unwrap();
    assert!(engine.valid_move(0, 1));
    assert!(!engine.valid_move(-1, 1));
    assert!(!engine.valid_move(1, 1));
    assert!(!engine.valid_move(0, -1));
    assert!(!engine.valid_move(0, 3));
}

#[test]
fn test_edge_moves_never_leave_the_grid() {
    let mut engine = MazeEngine::from_rows(&["S E"]).unwrap();
    assert_eq!(engine.input('a'), MoveOutcome::NoOp);
    assert_eq!(engine.input('w'), MoveOutcome::NoOp);
    assert_eq!(engine.input('s'), MoveOutcome::NoOp);
    assert_eq!(engine.player().position(), Position::new(0, 0));
}

#[test]
fn test_terminal_states_freeze_the_session() {
    let mut engine = MazeEngine::from_rows(&["S E"]).unwrap();
    play(&mut engine, "dd");
    assert_eq!(engine.state(), PlayState::Solved);
    assert_eq!(play(&mut engine, "adaw"), vec![MoveOutcome::NoOp; 4]);
    assert_eq!(engine.moves(), 2);

    let mut engine = MazeEngine::from_rows(&["S #E"]).unwrap();
    play(&mut engine, "da");
    assert_eq!(engine.state(), PlayState::DeclaredUnsolvable);
    assert_eq!(engine.input('d'), MoveOutcome::NoOp);
    assert_eq!(engine.player().position(), Position::new(0, 0));
}

#[test]
fn test_move_player_accepts_raw_offsets() {
    let mut engine = small();
    assert_eq!(engine.move_player(2, 0), MoveOutcome::Moved);
    assert_eq!(engine.player().position(), Position::new(3, 1));
    assert_eq!(engine.move_player(0, 1), MoveOutcome::NoOp);
}

//! Scenario-level tests for the Gomoku engine: run detection along every
//! axis, draw on a full board, and undo behavior.

use parlor::gomoku::{BOARD_SIZE, Board, GomokuGame};
use parlor::types::{GameOutcome, Player, Position};

/// Alternate scripted moves for both sides, returning the final state.
fn play_script(moves: &[(usize, usize)]) -> GomokuGame {
    let mut game = GomokuGame::new();
    for &(row, col) in moves {
        game = game.play(row, col).unwrap();
    }
    game
}

#[test]
fn horizontal_five_wins() {
    let game = play_script(&[
        (5, 2),
        (6, 2),
        (5, 3),
        (6, 3),
        (5, 4),
        (6, 4),
        (5, 5),
        (6, 5),
        (5, 6),
    ]);

    assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::Black)));
}

#[test]
fn vertical_five_wins() {
    let game = play_script(&[
        (2, 5),
        (2, 6),
        (3, 5),
        (3, 6),
        (4, 5),
        (4, 6),
        (5, 5),
        (5, 6),
        (6, 5),
    ]);

    assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::Black)));
}

#[test]
fn white_can_win_on_a_diagonal() {
    // Black wanders along row 10 while White builds the main diagonal.
    let game = play_script(&[
        (10, 0),
        (0, 0),
        (10, 1),
        (1, 1),
        (10, 2),
        (2, 2),
        (10, 3),
        (3, 3),
        (10, 5),
        (4, 4),
    ]);

    assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::White)));
}

#[test]
fn four_in_a_row_is_not_enough() {
    let game = play_script(&[
        (5, 2),
        (6, 2),
        (5, 3),
        (6, 3),
        (5, 4),
        (6, 4),
        (5, 5),
    ]);

    assert!(!game.is_over());
    assert_eq!(game.to_move(), Player::White);
}

#[test]
fn board_precheck_detects_runs_through_any_cell_of_the_run() {
    let mut rows = vec![".".repeat(BOARD_SIZE); BOARD_SIZE];
    rows[7] = "...BBBBB...".to_string();
    let board = Board::from_string(&rows.join("\n")).unwrap();

    for col in 3..8 {
        assert!(board.wins_at(Position::new(7, col), Player::Black));
    }
    assert!(!board.wins_at(Position::new(7, 2), Player::Black));
}

/// Color cell (r, c) black iff `(c + 2r) % 4 < 2`. The period-4 phase
/// advances by 1 horizontally, 2 vertically, 3 diagonally, and 1
/// anti-diagonally, so the longest same-color run in any direction is 2.
fn draw_tiling_is_black(row: usize, col: usize) -> bool {
    (col + 2 * row) % 4 < 2
}

#[test]
fn filling_the_board_without_five_is_a_draw() {
    let mut black_cells = Vec::new();
    let mut white_cells = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if draw_tiling_is_black(row, col) {
                black_cells.push((row, col));
            } else {
                white_cells.push((row, col));
            }
        }
    }
    // 61 black cells to 60 white cells: exactly an alternating, Black-first
    // game worth of moves.
    assert_eq!(black_cells.len(), 61);

    let mut game = GomokuGame::new();
    let mut black = black_cells.into_iter();
    let mut white = white_cells.into_iter();
    loop {
        let Some((row, col)) = (match game.to_move() {
            Player::Black => black.next(),
            Player::White => white.next(),
        }) else {
            break;
        };
        game = game.play(row, col).unwrap();
        if game.is_over() {
            break;
        }
    }

    assert!(game.board().is_full());
    assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    assert_eq!(game.moves().len(), BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn undo_round_trips_to_the_previous_state() {
    let game = play_script(&[(5, 5), (4, 4), (6, 6)]);
    let undone = game.undo().unwrap();

    assert_eq!(undone, play_script(&[(5, 5), (4, 4)]));
}

#[test]
fn rejections_leave_the_state_unchanged() {
    let game = play_script(&[(5, 5)]);

    assert!(matches!(
        game.play(5, 5),
        Err(parlor::Error::InvalidMove { .. })
    ));
    assert!(matches!(
        game.play(0, BOARD_SIZE),
        Err(parlor::Error::OutOfBounds { .. })
    ));
    assert_eq!(game, play_script(&[(5, 5)]));
}

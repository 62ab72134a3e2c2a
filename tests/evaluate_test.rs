//! Tests for board win evaluation.

use tictactoe_rewind::{Board, LINES, Player, Position, Square, evaluate};

fn board_with(xs: &[usize], os: &[usize]) -> Board {
    let mut board = Board::new();
    for &i in xs {
        board.set(Position::from_index(i).unwrap(), Square::Occupied(Player::X));
    }
    for &i in os {
        board.set(Position::from_index(i).unwrap(), Square::Occupied(Player::O));
    }
    board
}

#[test]
fn empty_board_has_no_winner() {
    let result = evaluate(&Board::new());
    assert_eq!(result.winner, None);
    assert_eq!(result.line, None);
    assert!(result.winning_positions().is_empty());
}

#[test]
fn partial_board_has_no_winner() {
    // X on a diagonal minus one cell, O scattered.
    let board = board_with(&[0, 4], &[1, 3]);
    assert_eq!(evaluate(&board).winner, None);
}

#[test]
fn two_in_a_row_is_not_a_win() {
    let board = board_with(&[0, 1], &[3, 4]);
    assert_eq!(evaluate(&board).winner, None);
}

#[test]
fn each_line_is_detected_with_its_exact_triple() {
    for (index, line) in LINES.iter().enumerate() {
        let cells: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
        let player = if index % 2 == 0 { Player::X } else { Player::O };

        let mut board = Board::new();
        for &cell in &cells {
            board.set(
                Position::from_index(cell).unwrap(),
                Square::Occupied(player),
            );
        }

        let result = evaluate(&board);
        assert_eq!(result.winner, Some(player), "line {:?}", cells);
        assert_eq!(result.line, Some(*line), "line {:?}", cells);
    }
}

#[test]
fn mixed_line_is_not_a_win() {
    // Top row X, X, O.
    let board = board_with(&[0, 1], &[2]);
    assert_eq!(evaluate(&board).winner, None);
}

#[test]
fn double_win_reports_the_last_line_in_scan_order() {
    // Unreachable under alternating play, but the data model allows it:
    // X completes both the top row (scan index 0) and the bottom row
    // (scan index 2). The overwrite loop must report the bottom row.
    let board = board_with(&[0, 1, 2, 6, 7, 8], &[3, 4]);

    let result = evaluate(&board);
    assert_eq!(result.winner, Some(Player::X));
    assert_eq!(
        result.line,
        Some([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight
        ])
    );
}

#[test]
fn double_win_across_row_and_column() {
    // X holds the top row and the left column; the column comes later
    // in scan order and wins the overwrite.
    let board = board_with(&[0, 1, 2, 3, 6], &[4, 5]);

    let result = evaluate(&board);
    assert_eq!(result.winner, Some(Player::X));
    assert_eq!(
        result.line,
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
}

#[test]
fn winner_with_noise_elsewhere_on_board() {
    // O wins the middle column; X occupies non-conflicting cells.
    let board = board_with(&[0, 2, 6], &[1, 4, 7]);

    let result = evaluate(&board);
    assert_eq!(result.winner, Some(Player::O));
    assert_eq!(
        result.line,
        Some([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter
        ])
    );
}

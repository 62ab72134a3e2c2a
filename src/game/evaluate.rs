//! Win detection over a board snapshot.

use tracing::instrument;

use super::position::Position;
use super::types::{Board, Player, Square};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in fixed scan order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of scanning a board for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// The winning player, if any line is complete.
    pub winner: Option<Player>,
    /// The completed line of positions, if any.
    pub line: Option<[Position; 3]>,
}

impl Evaluation {
    /// True when some line is complete.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning positions, empty when there is no winner.
    pub fn winning_positions(&self) -> Vec<Position> {
        self.line.map(|line| line.to_vec()).unwrap_or_default()
    }
}

/// Scans the 8 fixed lines and reports the winner and winning line.
///
/// Every matching line overwrites the previous one, so if a board
/// carries two completed lines (unreachable under alternating play),
/// the last line in scan order is reported. Callers replaying stored
/// positions rely on this ordering, so keep the overwrite loop as is.
#[instrument(level = "debug", skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let mut result = Evaluation::default();

    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                result.winner = Some(player);
                result.line = Some(line);
            }
        }
    }

    result
}

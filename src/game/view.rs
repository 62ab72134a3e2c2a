//! Read model for the presentation layer.
//!
//! The renderer never inspects `GameState` directly; it re-derives a
//! [`GameView`] each frame and draws from that.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::timeline::GameState;
use super::types::Board;

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveItem {
    /// History step this row jumps to.
    pub step: usize,
    /// Display label, e.g. `Go to move #3 ( 2,1)`.
    pub label: String,
    /// True when this row is the current step.
    pub selected: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board snapshot at the current step.
    pub board: Board,
    /// Positions of the winning line, empty when no winner.
    pub winning_line: Vec<Position>,
    /// Status line text.
    pub status: String,
    /// Move list in presentation order.
    pub moves: Vec<MoveItem>,
    /// Whether the move list is shown newest-first.
    pub sort_descending: bool,
}

impl GameState {
    /// Derives the read model for the current state.
    pub fn view(&self) -> GameView {
        let mut moves: Vec<MoveItem> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveItem {
                step,
                label: move_label(step, entry.last_move()),
                selected: step == self.current_step(),
            })
            .collect();
        if self.sort_descending() {
            moves.reverse();
        }

        GameView {
            board: self.current().board().clone(),
            winning_line: self.evaluation().winning_positions(),
            status: self.status().to_string(),
            moves,
            sort_descending: self.sort_descending(),
        }
    }
}

/// Label for one history step.
///
/// The space after `(` is part of the fixed label format.
fn move_label(step: usize, last_move: Option<Position>) -> String {
    match last_move {
        Some(pos) if step > 0 => {
            format!("Go to move #{} ( {},{})", step, pos.column(), pos.row())
        }
        _ => "Go to game start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_for_game_start() {
        assert_eq!(move_label(0, None), "Go to game start");
    }

    #[test]
    fn label_is_one_indexed_col_row() {
        // Cell 5 sits at column 3, row 2.
        assert_eq!(
            move_label(2, Position::from_index(5)),
            "Go to move #2 ( 3,2)"
        );
        assert_eq!(
            move_label(1, Some(Position::TopLeft)),
            "Go to move #1 ( 1,1)"
        );
    }
}

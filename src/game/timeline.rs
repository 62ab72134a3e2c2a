//! Game state with time-travel history.
//!
//! The state is an append-only sequence of immutable board snapshots
//! plus a cursor. Transitions never mutate a stored entry: a move
//! clones the board at the cursor, truncates any forward entries, and
//! appends a fresh snapshot. Jumping only moves the cursor, which is
//! what makes time-travel safe.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::evaluate::{Evaluation, evaluate};
use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};

/// One immutable snapshot in the move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    /// The cell whose placement produced this snapshot.
    /// `None` only for the initial empty entry.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this snapshot, if any.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Complete game state: history, cursor, and move-list sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board snapshots, oldest first. Never longer than 10 entries
    /// (the empty board plus at most 9 moves).
    history: Vec<HistoryEntry>,
    /// Cursor into `history` selecting the current snapshot.
    current_step: usize,
    /// Presentation order for the move list.
    sort_descending: bool,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    pub fn new() -> Self {
        let mut history = Vec::with_capacity(10);
        history.push(HistoryEntry {
            board: Board::new(),
            last_move: None,
        });
        Self {
            history,
            current_step: 0,
            sort_descending: false,
        }
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The cursor into the history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Presentation order of the move list.
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// True when X moves next from the current snapshot.
    ///
    /// X opens the game, so the parity of the cursor decides the turn.
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// The player to move from the current snapshot.
    pub fn to_move(&self) -> Player {
        if self.x_is_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the board at the cursor.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current().board())
    }

    /// Status of the game as seen from the cursor.
    pub fn status(&self) -> GameStatus {
        let evaluation = self.evaluation();
        if let Some(winner) = evaluation.winner {
            GameStatus::Won(winner)
        } else if self.history.len() == 10 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Places a mark at `pos` for the player to move.
    ///
    /// Silently rejected when the current board already has a winner or
    /// the cell is occupied; the state is left unchanged. A move made
    /// from a past step truncates all forward entries first, so the
    /// history stays a single line (undo-and-redo-overwrite, not
    /// multi-branch retention).
    #[instrument(level = "debug", skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) {
        let current = self.current();
        if evaluate(current.board()).has_winner() || !current.board().is_empty(pos) {
            debug!(?pos, "move rejected");
            return;
        }

        let mut board = current.board().clone();
        board.set(pos, Square::Occupied(self.to_move()));

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(pos),
        });
        self.current_step = self.history.len() - 1;
        debug!(?pos, step = self.current_step, "move applied");
    }

    /// Moves the cursor to `step`.
    ///
    /// History is untouched; forward entries are discarded only when a
    /// new move is made from a non-tip step. Out-of-range steps are
    /// ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "jump out of range");
            return;
        }
        self.current_step = step;
    }

    /// Flips the presentation order of the move list.
    pub fn toggle_sort(&mut self) {
        self.sort_descending = !self.sort_descending;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

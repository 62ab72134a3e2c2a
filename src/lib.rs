//! Tic-tac-toe with a rewindable move history.
//!
//! The core is a set of pure, synchronous state transitions over
//! immutable board snapshots:
//!
//! - **Game**: board types, win evaluation, and the time-travel
//!   timeline ([`GameState`]).
//! - **View**: the read model ([`GameView`]) the renderer re-derives
//!   each frame.
//! - **Tui**: the terminal renderer and event loop, the only layer
//!   with side effects.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.view().status, "Next Player: O");
//!
//! // Rewind to the start; the move stays in history.
//! game.jump_to(0);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - game core
pub use game::{
    Board, Evaluation, GameState, GameStatus, GameView, HistoryEntry, LINES, MoveItem, Player,
    Position, Square, evaluate,
};

// Crate-level exports - terminal UI
pub use tui::run;

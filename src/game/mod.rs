//! Pure game logic: types, win evaluation, and the time-travel timeline.

mod evaluate;
mod position;
mod timeline;
mod types;
mod view;

pub use evaluate::{Evaluation, LINES, evaluate};
pub use position::Position;
pub use timeline::{GameState, HistoryEntry};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveItem};

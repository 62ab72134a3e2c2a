//! Application state and action handling.

use tracing::debug;

use crate::game::{GameState, GameView, Position};

use super::input::{Direction, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The time-travel move list.
    Moves,
}

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor in the focused panel.
    Move(Direction),
    /// Activate the focused item: place a mark or jump to a step.
    Select,
    /// Place a mark directly on cell 1-9.
    Cell(u8),
    /// Flip the move-list display order.
    ToggleSort,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Start a fresh game.
    Restart,
    /// Quit the application.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row index into the move list in presentation order.
    moves_cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_descending: bool) -> Self {
        let mut game = GameState::new();
        if sort_descending {
            game.toggle_sort();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            moves_cursor: 0,
            should_quit: false,
        }
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The focused row of the move list, clamped to the list length.
    pub fn moves_cursor(&self) -> usize {
        self.moves_cursor.min(self.game.history().len() - 1)
    }

    /// True when the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derives the read model for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Applies one semantic action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.restart(),
            Action::ToggleSort => {
                self.game.toggle_sort();
                // Keep the focused row pointing at the same step.
                let len = self.game.history().len();
                self.moves_cursor = len - 1 - self.moves_cursor();
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            Action::Move(dir) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, dir),
                Focus::Moves => self.move_list_cursor(dir),
            },
            Action::Select => match self.focus {
                Focus::Board => self.game.apply_move(self.cursor),
                Focus::Moves => {
                    let view = self.game.view();
                    if let Some(item) = view.moves.get(self.moves_cursor()) {
                        self.game.jump_to(item.step);
                    }
                }
            },
            Action::Cell(n) => {
                if let Some(pos) = Position::from_index(n as usize - 1) {
                    self.game.apply_move(pos);
                }
            }
        }
    }

    fn move_list_cursor(&mut self, dir: Direction) {
        let last = self.game.history().len() - 1;
        self.moves_cursor = match dir {
            Direction::Up => self.moves_cursor().saturating_sub(1),
            Direction::Down => (self.moves_cursor() + 1).min(last),
            Direction::Left | Direction::Right => self.moves_cursor(),
        };
    }

    /// Starts a fresh game, keeping the sort preference.
    fn restart(&mut self) {
        debug!("restarting game");
        let descending = self.game.sort_descending();
        self.game = GameState::new();
        if descending {
            self.game.toggle_sort();
        }
        self.moves_cursor = 0;
        self.focus = Focus::Board;
    }
}

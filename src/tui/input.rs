//! Cursor movement for keyboard navigation.

use crate::game::Position;

/// Direction of a cursor movement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move one column left.
    Left,
    /// Move one column right.
    Right,
    /// Move one row up.
    Up,
    /// Move one row down.
    Down,
}

/// Moves the board cursor in the given direction, stopping at edges.
pub fn move_cursor(cursor: Position, dir: Direction) -> Position {
    use Position::*;

    match (cursor, dir) {
        // Right movement
        (TopLeft, Direction::Right) => TopCenter,
        (TopCenter, Direction::Right) => TopRight,
        (MiddleLeft, Direction::Right) => Center,
        (Center, Direction::Right) => MiddleRight,
        (BottomLeft, Direction::Right) => BottomCenter,
        (BottomCenter, Direction::Right) => BottomRight,

        // Left movement
        (TopCenter, Direction::Left) => TopLeft,
        (TopRight, Direction::Left) => TopCenter,
        (Center, Direction::Left) => MiddleLeft,
        (MiddleRight, Direction::Left) => Center,
        (BottomCenter, Direction::Left) => BottomLeft,
        (BottomRight, Direction::Left) => BottomCenter,

        // Down movement
        (TopLeft, Direction::Down) => MiddleLeft,
        (TopCenter, Direction::Down) => Center,
        (TopRight, Direction::Down) => MiddleRight,
        (MiddleLeft, Direction::Down) => BottomLeft,
        (Center, Direction::Down) => BottomCenter,
        (MiddleRight, Direction::Down) => BottomRight,

        // Up movement
        (MiddleLeft, Direction::Up) => TopLeft,
        (Center, Direction::Up) => TopCenter,
        (MiddleRight, Direction::Up) => TopRight,
        (BottomLeft, Direction::Up) => MiddleLeft,
        (BottomCenter, Direction::Up) => Center,
        (BottomRight, Direction::Up) => MiddleRight,

        // Already at an edge
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Right),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, Direction::Down),
            Position::BottomCenter
        );
    }

    #[test]
    fn cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
    }
}

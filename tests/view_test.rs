//! Tests for the renderer read model.

use tictactoe_rewind::{GameState, Position, Square};

fn play(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        game.apply_move(Position::from_index(cell).unwrap());
    }
}

#[test]
fn fresh_game_view() {
    let view = GameState::new().view();

    assert!(view.board.squares().iter().all(|s| *s == Square::Empty));
    assert!(view.winning_line.is_empty());
    assert_eq!(view.status, "Next Player: X");
    assert_eq!(view.moves.len(), 1);
    assert_eq!(view.moves[0].label, "Go to game start");
    assert!(view.moves[0].selected);
    assert!(!view.sort_descending);
}

#[test]
fn move_labels_use_one_indexed_col_row() {
    let mut game = GameState::new();
    // Cell 0 is (1,1); cell 4 is (2,2); cell 5 is (3,2).
    play(&mut game, &[0, 4, 5]);

    let view = game.view();
    let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 ( 1,1)",
            "Go to move #2 ( 2,2)",
            "Go to move #3 ( 3,2)",
        ]
    );
}

#[test]
fn selected_flag_tracks_the_cursor() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2]);
    game.jump_to(1);

    let view = game.view();
    let selected: Vec<usize> = view
        .moves
        .iter()
        .filter(|m| m.selected)
        .map(|m| m.step)
        .collect();
    assert_eq!(selected, vec![1]);
}

#[test]
fn descending_sort_reverses_presentation_only() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1]);
    game.toggle_sort();

    let view = game.view();
    assert!(view.sort_descending);
    let steps: Vec<usize> = view.moves.iter().map(|m| m.step).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    // Stored history order is untouched.
    assert_eq!(game.history()[0].last_move(), None);
    assert_eq!(game.history()[2].last_move(), Some(Position::TopCenter));
}

#[test]
fn winning_line_appears_in_the_view() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    let view = game.view();
    assert_eq!(view.status, "Winner: X");
    assert_eq!(
        view.winning_line,
        vec![Position::TopLeft, Position::Center, Position::BottomRight]
    );
}

#[test]
fn view_follows_the_cursor_into_the_past() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 4, 2, 8]);
    game.jump_to(2);

    let view = game.view();
    // At step 2 only the first two moves exist and the game is live.
    assert_eq!(view.status, "Next Player: X");
    assert!(view.winning_line.is_empty());
    assert_eq!(view.board.get(Position::Center), Square::Empty);
    // The full history is still listed for time travel.
    assert_eq!(view.moves.len(), 6);
}

#[test]
fn draw_status_in_view() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);

    assert_eq!(game.view().status, "Draw! Play again?");
}

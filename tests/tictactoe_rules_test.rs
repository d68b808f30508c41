//! Property and scenario tests for the win/draw rules.

use noughts_and_crosses::{Board, LINES, Mark, Position, Square, check_draw, check_win};
use proptest::prelude::*;

fn square_strategy() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::Player)),
        Just(Square::Occupied(Mark::Computer)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square_strategy()).prop_map(|squares| {
        let mut board = Board::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        board
    })
}

fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, c) in Position::ALL.into_iter().zip(layout.chars()) {
        let square = match c {
            'X' => Square::Occupied(Mark::Player),
            'O' => Square::Occupied(Mark::Computer),
            _ => Square::Empty,
        };
        board.set(pos, square);
    }
    board
}

proptest! {
    #[test]
    fn win_iff_some_line_is_uniform(board in board_strategy()) {
        for mark in [Mark::Player, Mark::Computer] {
            let expected = LINES.iter().any(|line| {
                line.iter().all(|&pos| board.get(pos) == Square::Occupied(mark))
            });
            prop_assert_eq!(check_win(&board, mark), expected);
        }
    }

    #[test]
    fn draw_iff_no_empty_square(board in board_strategy()) {
        let has_empty = Position::ALL.iter().any(|&pos| board.is_empty(pos));
        prop_assert_eq!(check_draw(&board), !has_empty);
    }

    #[test]
    fn reset_twice_equals_reset_once(board in board_strategy()) {
        let mut once = board.clone();
        once.reset();
        let mut twice = board;
        twice.reset();
        twice.reset();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, Board::new());
    }
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert!(!check_win(&board, Mark::Player));
    assert!(!check_win(&board, Mark::Computer));
    assert!(!check_draw(&board));
}

#[test]
fn test_completing_top_row_wins() {
    let mut board = board_from("XX.......");
    assert!(!check_win(&board, Mark::Player));

    let (row, column) = Position::TopRight.coordinates();
    assert_eq!((row, column), (0, 2));
    board.set(Position::TopRight, Square::Occupied(Mark::Player));

    assert!(check_win(&board, Mark::Player));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from("XOXXOOOXX");
    assert!(check_draw(&board));
    assert!(!check_win(&board, Mark::Player));
    assert!(!check_win(&board, Mark::Computer));
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use ultimate_tictactoe::{GameState, Move};

/// Builds a move from `(board_row, board_col, cell_row, cell_col)`.
pub fn mv(br: u8, bc: u8, cr: u8, cc: u8) -> Move {
    let tuple = (br, bc, cr, cc);
    Move::from_tuple(tuple).expect("test move in range")
}

/// Plays moves for alternating players starting from a new game.
pub fn replay(moves: &[(u8, u8, u8, u8)]) -> GameState {
    let mut game = GameState::new();
    for &tuple in moves {
        let m = Move::from_tuple(tuple).expect("test move in range");
        if let Err(e) = game.play(m) {
            panic!("move {} rejected: {}", m, e);
        }
    }
    game
}

/// X wins sub-boards (0,0), (0,1) and (0,2), O wins (1,1) on the way.
pub const X_TOP_ROW_WIN: [(u8, u8, u8, u8); 17] = [
    (0, 0, 0, 1),
    (0, 1, 0, 0),
    (0, 0, 1, 1),
    (1, 1, 0, 0),
    (0, 0, 2, 1),
    (2, 1, 0, 1),
    (0, 1, 1, 0),
    (1, 0, 0, 1),
    (0, 1, 1, 1),
    (1, 1, 0, 1),
    (0, 1, 1, 2),
    (1, 2, 0, 2),
    (0, 2, 1, 0),
    (1, 0, 0, 2),
    (0, 2, 1, 1),
    (1, 1, 0, 2),
    (0, 2, 1, 2),
];

/// Every sub-board is won, X O O / O X X / X O O, so nobody owns a line.
/// O decides the last sub-board with the final move.
pub const FULL_BOARD_DRAW: [(u8, u8, u8, u8); 44] = [
    (0, 1, 0, 2),
    (0, 2, 1, 2),
    (1, 2, 1, 0),
    (1, 0, 0, 0),
    (0, 0, 1, 1),
    (1, 1, 0, 2),
    (0, 2, 2, 2),
    (2, 2, 0, 0),
    (0, 0, 2, 1),
    (2, 1, 2, 0),
    (2, 0, 2, 2),
    (2, 2, 2, 2),
    (2, 2, 2, 1),
    (2, 1, 0, 0),
    (0, 0, 1, 0),
    (1, 0, 1, 1),
    (1, 1, 0, 1),
    (0, 1, 2, 0),
    (2, 0, 2, 1),
    (2, 1, 2, 2),
    (2, 2, 0, 1),
    (0, 1, 0, 0),
    (0, 0, 2, 2),
    (2, 2, 1, 1),
    (1, 1, 2, 2),
    (2, 1, 2, 1),
    (1, 1, 2, 1),
    (1, 0, 2, 2),
    (0, 1, 0, 1),
    (0, 1, 1, 0),
    (2, 0, 2, 0),
    (0, 2, 0, 2),
    (0, 2, 1, 0),
    (0, 0, 1, 2),
    (1, 2, 2, 2),
    (0, 2, 0, 1),
    (1, 2, 0, 0),
    (0, 0, 0, 1),
    (1, 2, 2, 0),
    (1, 1, 1, 0),
    (1, 1, 1, 1),
    (0, 0, 0, 0),
    (0, 0, 2, 0),
    (0, 2, 0, 0),
];

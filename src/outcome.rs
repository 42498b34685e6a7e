//! Terminal-condition detection: four-in-a-row and the full board

use crate::board::{Board, Cell, Direction, Side};

/// The state of a game as seen from its board alone
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Draw,
}

/// Whether `side` owns four consecutive cells in any direction
pub fn has_four_in_a_row(board: &Board, side: Side) -> bool {
    let piece = Cell::Piece(side);
    Direction::ALL.iter().any(|&direction| {
        board
            .windows(direction)
            .any(|window| window.iter().all(|&cell| cell == piece))
    })
}

/// Whether no column can take another piece
pub fn is_board_full(board: &Board) -> bool {
    board.legal_columns().is_empty()
}

/// Whether the game has ended, by a win for either side or a full board
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Side::Red)
        || has_four_in_a_row(board, Side::Yellow)
        || is_board_full(board)
}

pub fn outcome(board: &Board) -> Outcome {
    if has_four_in_a_row(board, Side::Red) {
        Outcome::Win(Side::Red)
    } else if has_four_in_a_row(board, Side::Yellow) {
        Outcome::Win(Side::Yellow)
    } else if is_board_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

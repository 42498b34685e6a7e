//! Static positional heuristic used at the leaves of the search

use crate::board::{Board, Cell, Side, Window};
use crate::{CENTER_COLUMN, HEIGHT, WINDOW_LENGTH};

/// Points for each of a side's pieces in the center column
pub const CENTER_WEIGHT: i32 = 3;

/// Scores a single window for `side`
///
/// A full window scores 100, an open three 5 and an open two 2. An open
/// three for the opponent costs 4 on top of whatever the side scored.
pub fn score_window(window: &Window, side: Side) -> i32 {
    let own = count(window, Cell::Piece(side));
    let empty = count(window, Cell::Empty);
    let opponent = count(window, Cell::Piece(side.other()));

    let mut score = 0;
    if own == WINDOW_LENGTH {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }

    if opponent == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Rates the whole board for `side` without any lookahead
pub fn score_position(board: &Board, side: Side) -> i32 {
    let center_pieces = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == Cell::Piece(side))
        .count() as i32;

    let windows: i32 = board
        .all_windows()
        .map(|window| score_window(&window, side))
        .sum();

    CENTER_WEIGHT * center_pieces + windows
}

fn count(window: &Window, cell: Cell) -> usize {
    window.iter().filter(|&&c| c == cell).count()
}

//! Depth-limited minimax search with alpha-beta pruning

use log::debug;
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::board::{Board, Side};
use crate::error::EngineError;
use crate::evaluator::score_position;
use crate::outcome::{has_four_in_a_row, is_board_full, is_terminal};

/// Leaf score of a position won by the side the search is oriented toward
pub const WIN_SCORE: f64 = 1.0e14;
/// Leaf score of a position won by the opposing side
pub const LOSS_SCORE: f64 = -1.0e13;

/// The outcome of a search: the best column (none at a leaf) and its score
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: f64,
}

/// An agent choosing moves by minimax search
///
/// # Notes
/// Scores are always oriented toward one fixed side for the whole tree,
/// while the `maximizing` flag alternates with the side to move. Every
/// hypothetical move is played on a copy of the board, so the caller's
/// board is never touched.
///
/// Before searching the children of a node a fallback column is drawn at
/// random from the legal columns. The first child searched always replaces
/// it, so the draw never changes the result of a search.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    rng: StdRng,

    /// The number of nodes searched by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Creates a new `SearchEngine` seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            node_count: 0,
        }
    }

    /// Creates a new `SearchEngine` with a reproducible tie-break draw
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move and the score of the
    /// position from `fixed_side`'s point of view. The side to move is
    /// `fixed_side` when `maximizing`, its opponent otherwise.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        fixed_side: Side,
    ) -> SearchResult {
        self.node_count += 1;

        if depth == 0 || is_terminal(board) {
            return SearchResult {
                column: None,
                score: leaf_score(board, fixed_side),
            };
        }

        let legal_columns = board.legal_columns();
        let mover = if maximizing {
            fixed_side
        } else {
            fixed_side.other()
        };

        let mut best_column = legal_columns.choose(&mut self.rng).copied();
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for &column in legal_columns.iter() {
            let row = match board.lowest_open_row(column) {
                Ok(row) => row,
                Err(_) => continue,
            };
            let mut next = *board;
            next.place(row, column, mover);

            let score = self
                .search(&next, depth - 1, alpha, beta, !maximizing, fixed_side)
                .score;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(best_score);
            }

            // the other side will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: best_column,
            score: best_score,
        }
    }

    /// Picks a column for `side` searching `depth` plies ahead
    ///
    /// A depth of zero is treated as one, as a leaf has no move to offer.
    pub fn choose_move(
        &mut self,
        board: &Board,
        depth: usize,
        side: Side,
    ) -> Result<usize, EngineError> {
        if is_board_full(board) {
            return Err(EngineError::NoLegalMove);
        }
        let depth = depth.max(1);
        let start_count = self.node_count;

        let result = self.search(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            side,
        );
        let column = result.column.ok_or(EngineError::NoLegalMove)?;

        debug!(
            "{} plays column {} (depth {}, score {}, {} nodes)",
            side,
            column,
            depth,
            result.score,
            self.node_count - start_count
        );
        Ok(column)
    }
}

/// Score of a position where the search stops
fn leaf_score(board: &Board, fixed_side: Side) -> f64 {
    if has_four_in_a_row(board, fixed_side) {
        WIN_SCORE
    } else if has_four_in_a_row(board, fixed_side.other()) {
        LOSS_SCORE
    } else if is_board_full(board) {
        0.0
    } else {
        score_position(board, fixed_side) as f64
    }
}

//! Move suggestions for a human player
//!
//! Every legal column is tried for the human, the opponent's best replies
//! are searched, and the resulting scores are turned into a probability
//! distribution with a softmax. The most likely column is suggested along
//! with a short reason.

use std::fmt;

use log::{debug, trace};

use crate::board::{Board, Side};
use crate::outcome::has_four_in_a_row;
use crate::search::SearchEngine;
use crate::CENTER_COLUMN;

/// Why a hint suggests its column
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rationale {
    /// The opponent would win by playing this column next
    BlocksImmediateWin,
    CenterControl,
    HighestWinProbability,
    NoMovesAvailable,
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rationale::BlocksImmediateWin => "(Blocks an immediate winning move for your opponent)",
            Rationale::CenterControl => "(Central position to maximise your control of the board)",
            Rationale::HighestWinProbability => "(highest calculated win probability)",
            Rationale::NoMovesAvailable => "No moves available",
        };
        f.write_str(text)
    }
}

/// A non-binding move suggestion
#[derive(Clone, Debug, PartialEq)]
pub struct Hint {
    /// The suggested column, `None` when the board is full
    pub column: Option<usize>,
    /// Estimated win chance of the suggestion in percent, to one decimal
    pub win_probability: f64,
    pub rationale: Rationale,
    /// (column, probability) for every legal column, ascending by column
    pub distribution: Vec<(usize, f64)>,
}

impl Hint {
    pub fn no_moves() -> Self {
        Self {
            column: None,
            win_probability: 0.0,
            rationale: Rationale::NoMovesAvailable,
            distribution: Vec::new(),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(
                f,
                "Hint: Try column {} (Win chance: {:.1}%). {}",
                column, self.win_probability, self.rationale
            ),
            None => write!(f, "{}", self.rationale),
        }
    }
}

/// Suggests a column for `human`, who is to move on `board`
///
/// Each candidate is scored by searching `hint_depth` plies of replies,
/// starting with the opponent's turn, with scores oriented to `human`.
pub fn compute_hint(
    search: &mut SearchEngine,
    board: &Board,
    human: Side,
    hint_depth: usize,
) -> Hint {
    let mut candidates = Vec::new();
    for column in board.legal_columns() {
        let row = match board.lowest_open_row(column) {
            Ok(row) => row,
            Err(_) => continue,
        };
        let mut next = *board;
        next.place(row, column, human);

        let score = search
            .search(
                &next,
                hint_depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                human,
            )
            .score;
        trace!("hint candidate column {} scored {}", column, score);
        candidates.push((column, score));
    }

    if candidates.is_empty() {
        return Hint::no_moves();
    }

    let scores: Vec<f64> = candidates.iter().map(|&(_, score)| score).collect();
    let distribution: Vec<(usize, f64)> = candidates
        .iter()
        .map(|&(column, _)| column)
        .zip(softmax(&scores))
        .collect();

    // first column wins ties
    let (best_column, best_probability) = distribution.iter().fold(
        distribution[0],
        |best, &candidate| if candidate.1 > best.1 { candidate } else { best },
    );

    let hint = Hint {
        column: Some(best_column),
        win_probability: (best_probability * 1000.0).round() / 10.0,
        rationale: rationale(board, best_column, human),
        distribution,
    };
    debug!("{} hint: {}", human, hint);
    hint
}

/// Numerically stable softmax: the maximum is subtracted before exponentiating
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&score| (score - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn rationale(board: &Board, column: usize, human: Side) -> Rationale {
    let opponent = human.other();
    if let Ok(row) = board.lowest_open_row(column) {
        let mut next = *board;
        next.place(row, column, opponent);
        if has_four_in_a_row(&next, opponent) {
            return Rationale::BlocksImmediateWin;
        }
    }

    if column == CENTER_COLUMN {
        Rationale::CenterControl
    } else {
        Rationale::HighestWinProbability
    }
}

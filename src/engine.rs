//! The entry points a game front-end drives

use crate::board::{Board, Side};
use crate::config::{Difficulty, EngineConfig};
use crate::error::EngineError;
use crate::hint::{self, Hint};
use crate::outcome::{self, Outcome};
use crate::search::SearchEngine;

/// Holds the configuration and the search state shared by every move
///
/// The engine never owns the authoritative board: the front-end keeps it
/// and passes it in by reference.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    search: SearchEngine,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let search = match config.seed {
            Some(seed) => SearchEngine::with_seed(seed),
            None => SearchEngine::new(),
        };
        Self { config, search }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes searched by this engine so far
    pub fn node_count(&self) -> usize {
        self.search.node_count
    }

    pub fn new_board(&self) -> Board {
        Board::new()
    }

    pub fn legal_columns(&self, board: &Board) -> Vec<usize> {
        board.legal_columns()
    }

    /// Drops a piece for `side` into `column`, returning the row it landed on
    pub fn apply_move(
        &self,
        board: &mut Board,
        column: usize,
        side: Side,
    ) -> Result<usize, EngineError> {
        board.apply_move(column, side)
    }

    pub fn has_four_in_a_row(&self, board: &Board, side: Side) -> bool {
        outcome::has_four_in_a_row(board, side)
    }

    pub fn is_board_full(&self, board: &Board) -> bool {
        outcome::is_board_full(board)
    }

    pub fn outcome(&self, board: &Board) -> Outcome {
        outcome::outcome(board)
    }

    /// Picks a column for `side`, with `depth` clamped to the configured range
    pub fn choose_move(
        &mut self,
        board: &Board,
        depth: usize,
        side: Side,
    ) -> Result<usize, EngineError> {
        let depth = self.config.clamp_depth(depth);
        self.search.choose_move(board, depth, side)
    }

    pub fn choose_move_at(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        side: Side,
    ) -> Result<usize, EngineError> {
        let depth = difficulty.depth(&self.config);
        self.choose_move(board, depth, side)
    }

    /// Suggests a column for `human` using the configured hint depth
    pub fn compute_hint(&mut self, board: &Board, human: Side) -> Hint {
        let depth = self.config.hint_depth;
        self.compute_hint_with_depth(board, human, depth)
    }

    pub fn compute_hint_with_depth(&mut self, board: &Board, human: Side, depth: usize) -> Hint {
        let depth = self.config.clamp_depth(depth);
        hint::compute_hint(&mut self.search, board, human, depth)
    }
}

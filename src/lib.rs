//! A game engine and move advisor for the board game 'Connect 4'
//!
//! The engine tracks a gravity-constrained grid, detects won and drawn
//! positions, and picks moves with a depth-limited minimax search using
//! alpha-beta pruning over a positional heuristic. The same search drives
//! move suggestions ("hints") for a human player.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Board, Difficulty, Engine, EngineConfig, Side};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7));
//! let mut board = Board::new();
//!
//! let depth = Difficulty::Easy.depth(engine.config());
//! let column = engine.choose_move(&board, depth, Side::Yellow)?;
//! board.apply_move(column, Side::Yellow)?;
//!
//! let hint = engine.compute_hint(&board, Side::Red);
//! assert!(hint.column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod board;

pub mod outcome;

pub mod evaluator;

pub mod search;

pub mod hint;

pub mod engine;

mod test;

pub use board::{Board, Cell, Direction, Side, Window};
pub use config::{Difficulty, EngineConfig};
pub use engine::Engine;
pub use error::EngineError;
pub use hint::{Hint, Rationale};
pub use outcome::Outcome;
pub use search::{SearchEngine, SearchResult};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of cells in a scoring window and in a winning line
pub const WINDOW_LENGTH: usize = 4;

/// The index of the center column, which the heuristic favours
pub const CENTER_COLUMN: usize = WIDTH / 2;

// every direction must fit at least one full window
const_assert!(WIDTH >= WINDOW_LENGTH);
const_assert!(HEIGHT >= WINDOW_LENGTH);

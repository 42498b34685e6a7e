use crate::WIDTH;

/// Errors surfaced by the engine to its caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A piece was dropped into a column with no open row
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Invalid move, column {column} out of range. Columns must be between 0 and {}", WIDTH - 1)]
    ColumnOutOfRange { column: usize },

    /// A move was requested on a board with no playable column
    #[error("no legal move available, the board is full")]
    NoLegalMove,

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

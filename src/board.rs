use std::fmt;
use std::ops::Range;

use crate::{error::EngineError, HEIGHT, WIDTH, WINDOW_LENGTH};

/// One of the two competing sides
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Yellow => "Yellow",
        }
    }

    fn symbol(self) -> char {
        match self {
            Side::Red => 'R',
            Side::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Piece(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(side) => side.symbol(),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Piece(side)
    }
}

/// Four consecutive cells sampled along one [`Direction`]
pub type Window = [Cell; WINDOW_LENGTH];

/// The four line directions on the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Stepping one row down and one column right
    PositiveDiagonal,
    /// Stepping one row up and one column right
    NegativeDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::PositiveDiagonal,
        Direction::NegativeDiagonal,
    ];

    /// (row step, column step)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::PositiveDiagonal => (1, 1),
            Direction::NegativeDiagonal => (-1, 1),
        }
    }

    /// Rows and columns a window in this direction may start from
    fn starts(self) -> (Range<usize>, Range<usize>) {
        let last_row = HEIGHT - WINDOW_LENGTH + 1;
        let last_column = WIDTH - WINDOW_LENGTH + 1;
        match self {
            Direction::Horizontal => (0..HEIGHT, 0..last_column),
            Direction::Vertical => (0..last_row, 0..WIDTH),
            Direction::PositiveDiagonal => (0..last_row, 0..last_column),
            Direction::NegativeDiagonal => (WINDOW_LENGTH - 1..HEIGHT, 0..last_column),
        }
    }
}

/// A 6x7 Connect 4 grid, row 0 is the top and row `HEIGHT - 1` the bottom
///
/// Within a column all empty cells sit above all occupied ones. The board
/// keeps that invariant as long as pieces only enter through
/// [`apply_move`](Board::apply_move) or through [`place`](Board::place) at
/// the row returned by [`lowest_open_row`](Board::lowest_open_row).
///
/// `Board` is `Copy`, so a speculative copy never aliases the original.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board by playing a string of 1-indexed column digits,
    /// alternating sides and starting with Red
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let mut board = Self::new();
        let mut side = Side::Red;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is already won
                    if crate::outcome::has_four_in_a_row(&board, side.other()) {
                        return Err(EngineError::InvalidPosition(
                            "game is over".to_string(),
                        ));
                    }
                    board.apply_move(column - 1, side)?;
                    side = side.other();
                }
                _ => {
                    return Err(EngineError::InvalidPosition(format!(
                        "could not parse '{}' as a valid move",
                        column_char
                    )))
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from `HEIGHT` rows of `R`, `Y` and `.`, top row first
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        if rows.len() != HEIGHT {
            return Err(EngineError::InvalidPosition(format!(
                "expected {} rows, found {}",
                HEIGHT,
                rows.len()
            )));
        }
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != WIDTH {
                return Err(EngineError::InvalidPosition(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    WIDTH
                )));
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol.to_ascii_uppercase() {
                    'R' => Cell::Piece(Side::Red),
                    'Y' => Cell::Piece(Side::Yellow),
                    '.' => Cell::Empty,
                    other => {
                        return Err(EngineError::InvalidPosition(format!(
                            "unknown cell '{}'",
                            other
                        )))
                    }
                };
            }
        }

        // no floating pieces
        for column in 0..WIDTH {
            for row in 0..HEIGHT - 1 {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty() {
                    return Err(EngineError::InvalidPosition(format!(
                        "piece at row {}, column {} has an empty cell below it",
                        row, column
                    )));
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Whether a piece can still be dropped into `column`
    pub fn is_column_playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// All playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_column_playable(c)).collect()
    }

    /// The row a piece dropped into `column` would land on
    pub fn lowest_open_row(&self, column: usize) -> Result<usize, EngineError> {
        if column >= WIDTH {
            return Err(EngineError::ColumnOutOfRange { column });
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(EngineError::ColumnFull { column })
    }

    /// Sets a single cell without any validation
    ///
    /// The caller must pass the row returned by `lowest_open_row`.
    pub fn place(&mut self, row: usize, column: usize, side: Side) {
        self.cells[row][column] = Cell::Piece(side);
    }

    /// Drops a piece for `side` into `column`, returning the row it landed on
    pub fn apply_move(&mut self, column: usize, side: Side) -> Result<usize, EngineError> {
        let row = self.lowest_open_row(column)?;
        self.place(row, column, side);
        Ok(row)
    }

    /// The grid reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        for row in mirror.cells.iter_mut() {
            row.reverse();
        }
        mirror
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// The window of cells starting at (`row`, `column`) along `direction`
    ///
    /// The start must be one that `windows` would produce.
    pub fn window(&self, row: usize, column: usize, direction: Direction) -> Window {
        let (row_step, column_step) = direction.step();
        let mut window = [Cell::Empty; WINDOW_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (column as isize + column_step * i as isize) as usize;
            *cell = self.cells[r][c];
        }
        window
    }

    /// Every window along `direction`, rows then columns in ascending order
    pub fn windows(&self, direction: Direction) -> impl Iterator<Item = Window> + '_ {
        let (rows, columns) = direction.starts();
        rows.flat_map(move |row| {
            columns
                .clone()
                .map(move |column| self.window(row, column, direction))
        })
    }

    /// Every window on the board in all four directions
    pub fn all_windows(&self) -> impl Iterator<Item = Window> + '_ {
        Direction::ALL
            .iter()
            .flat_map(move |&direction| self.windows(direction))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (0..WIDTH).map(|c| c.to_string()).collect();
        writeln!(f, "{}", header)?;
        for row in self.cells.iter() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

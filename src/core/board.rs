//! The 3×3 grid and its fixed lines.
//!
//! ## Layout
//!
//! Cells are indexed `0..9` in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! ## Values, not places
//!
//! `Board` is `Copy`. Placing a mark produces a new board; nothing in the
//! crate edits a board in place, so hypothetical boards explored by the
//! decision engine can never leak into their siblings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardParseError;
use super::mark::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Three cell indices that win when filled with one mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [usize; 3]);

impl Line {
    /// The cell indices of this line, ascending.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Check if this line passes through `index`.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All eight lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// A 3×3 board.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Board, Mark};
///
/// let board: Board = "XX_ _O_ __O".parse().unwrap();
/// assert_eq!(board.get(0), Some(Mark::X));
/// assert_eq!(board.get(2), None);
/// assert_eq!(board.filled(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from raw cells.
    ///
    /// No invariant is checked; use [`Board::is_alternating`] to test whether
    /// the board could arise from strictly alternating play.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the mark at `index`, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Check if `index` is an empty cell on the board.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check the alternation invariant: `X` leads `O` by zero or one mark.
    #[must_use]
    pub fn is_alternating(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Return a copy with `mark` placed at `index`.
    ///
    /// Unchecked: callers guarantee `index` is an empty cell. The checked
    /// transition is [`crate::rules::apply_move`].
    #[must_use]
    pub(crate) fn with(mut self, index: usize, mark: Mark) -> Self {
        debug_assert!(self.is_empty_at(index), "cell {index} is not empty");
        self.cells[index] = Some(mark);
        self
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse nine cells from text. `X`/`O` are marks, `_`, `.` and `-` are
    /// empty; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut index = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                '_' | '.' | '-' => None,
                other => Some(
                    Mark::from_symbol(other).ok_or(BoardParseError::InvalidCell { ch, index })?,
                ),
            };
            if index < CELL_COUNT {
                cells[index] = cell;
            }
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(BoardParseError::WrongLength { found: index });
        }

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = chunk
                .iter()
                .map(|c| c.map_or('.', Mark::symbol).to_string())
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

//! Error taxonomy.
//!
//! Every failure is a local validation error: the operation that reports it
//! leaves all state unchanged, and the caller may simply retry with different
//! input.

use derive_more::{Display, Error};

use super::mark::Mark;

/// Why a move at an in-range cell was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum IllegalReason {
    /// The cell already holds a mark.
    #[display("the cell is already occupied")]
    Occupied,
    /// The board is already won or drawn.
    #[display("the game is already over")]
    GameOver,
}

/// Errors from the rules and decision engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The requested index is not a board cell.
    #[display("cell index {index} is outside the board (0..=8)")]
    OutOfRange { index: usize },

    /// The cell exists but may not be played.
    #[display("illegal move at cell {index}: {reason}")]
    IllegalMove { index: usize, reason: IllegalReason },

    /// The decision engine was asked to move on a finished board.
    #[display("no legal move is available")]
    NoLegalMove,

    /// A session move was requested from the side not on turn.
    #[display("it is {next}'s turn")]
    OutOfTurn { next: Mark },
}

impl EngineError {
    /// Shorthand for an [`EngineError::IllegalMove`].
    #[must_use]
    pub const fn illegal(index: usize, reason: IllegalReason) -> Self {
        EngineError::IllegalMove { index, reason }
    }
}

/// Errors from session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A required display name is blank.
    #[display("{slot} name must not be blank")]
    MissingName { slot: &'static str },

    /// A difficulty label was not recognised.
    #[display("unknown difficulty '{value}'")]
    UnknownDifficulty { value: String },

    /// The configuration text could not be decoded.
    #[display("invalid configuration: {message}")]
    Parse { message: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// Errors from parsing board text such as `"XX_ _O_ __O"`.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },

    /// A character was neither a mark nor an empty-cell marker.
    #[display("unexpected character '{ch}' at cell {index}")]
    InvalidCell { ch: char, index: usize },
}

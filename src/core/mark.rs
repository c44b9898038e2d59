//! Player marks.
//!
//! Exactly two marks exist. `X` always opens the game; whose turn it is
//! afterwards is derived from the board, never stored (see
//! [`crate::rules::next_mark`]).

use serde::{Deserialize, Serialize};

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The opening mark.
    X,
    /// The second mark.
    O,
}

impl Mark {
    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The complementary mark.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used in board text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a board symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

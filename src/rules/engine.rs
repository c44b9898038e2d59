//! Move application, terminal detection and legal-move enumeration.
//!
//! Every function here is pure: boards go in, new boards or derived values
//! come out.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use crate::core::{Board, EngineError, IllegalReason, Line, Mark, CELL_COUNT, LINES};

/// Legal move indices, ascending. Never more than nine, so kept inline.
pub type LegalMoves = SmallVec<[usize; CELL_COUNT]>;

/// Outcome of a board, recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// `mark` completed `line`.
    Win { mark: Mark, line: Line },
    /// All cells filled, no line complete.
    Draw,
}

impl GameResult {
    /// Check if no further move may be applied.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The completed line, if any.
    #[must_use]
    pub fn line(&self) -> Option<Line> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Scan the fixed lines and classify the board.
///
/// When several lines are complete at once (only possible on boards that did
/// not arise from legal play) the first in scan order is reported.
///
/// ```
/// use rust_ttt::core::{Board, Line, Mark};
/// use rust_ttt::rules::{evaluate, GameResult};
///
/// let board: Board = "XXX OO_ ___".parse().unwrap();
/// assert_eq!(
///     evaluate(&board),
///     GameResult::Win { mark: Mark::X, line: Line([0, 1, 2]) }
/// );
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> GameResult {
    for line in LINES {
        let [a, b, c] = line.cells();
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return GameResult::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Place `mark` at `index`, returning the new board.
///
/// The input board is never modified. Turn order is not checked here; the
/// session layer pairs this with [`next_mark`].
///
/// ## Errors
///
/// - [`EngineError::OutOfRange`] if `index > 8`
/// - [`EngineError::IllegalMove`] with [`IllegalReason::GameOver`] if the
///   board is already won or drawn
/// - [`EngineError::IllegalMove`] with [`IllegalReason::Occupied`] if the cell
///   holds a mark
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, EngineError> {
    if index >= CELL_COUNT {
        warn!(index, "rejected move outside the board");
        return Err(EngineError::OutOfRange { index });
    }

    if evaluate(board).is_terminal() {
        warn!(index, "rejected move on a finished board");
        return Err(EngineError::illegal(index, IllegalReason::GameOver));
    }

    if !board.is_empty_at(index) {
        warn!(index, "rejected move on an occupied cell");
        return Err(EngineError::illegal(index, IllegalReason::Occupied));
    }

    let next = board.with(index, mark);
    debug!(index, %mark, "applied move");
    Ok(next)
}

/// Empty cells in ascending order; empty when the board is full.
#[must_use]
pub fn legal_moves(board: &Board) -> LegalMoves {
    board.empty_cells().collect()
}

/// Whose turn it is, derived from move-count parity.
///
/// An even number of filled cells means `X` moves next.
#[must_use]
pub fn next_mark(board: &Board) -> Mark {
    if board.filled() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

/// First empty cell (ascending) where `mark` would complete a line.
#[must_use]
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_cells()
        .find(|&index| evaluate(&board.with(index, mark)).winner() == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn test_each_line_detected() {
        for line in LINES {
            let mut cells = [None; CELL_COUNT];
            for index in line.cells() {
                cells[index] = Some(Mark::O);
            }
            let result = evaluate(&Board::from_cells(cells));
            assert_eq!(result, GameResult::Win { mark: Mark::O, line });
        }
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Row 0 and column 0 both complete; the row comes first.
        let b = board("XXX X__ X__");
        assert_eq!(evaluate(&b).line(), Some(Line([0, 1, 2])));
    }

    #[test]
    fn test_draw() {
        let b = board("XOX XOO OXX");
        assert_eq!(evaluate(&b), GameResult::Draw);
        assert!(evaluate(&b).is_terminal());
        assert_eq!(evaluate(&b).winner(), None);
    }

    #[test]
    fn test_win_on_full_board_is_win() {
        let b = board("XOX OXO OXX");
        assert_eq!(evaluate(&b).winner(), Some(Mark::X));
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let before = Board::new();
        let after = apply_move(&before, 4, Mark::X).unwrap();

        assert_eq!(before, Board::new());
        assert_eq!(after.get(4), Some(Mark::X));
    }

    #[test]
    fn test_apply_move_out_of_range() {
        assert_eq!(
            apply_move(&Board::new(), 9, Mark::X),
            Err(EngineError::OutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let b = board("X__ ___ ___");
        assert_eq!(
            apply_move(&b, 0, Mark::O),
            Err(EngineError::illegal(0, IllegalReason::Occupied))
        );
    }

    #[test]
    fn test_apply_move_after_win() {
        let b = board("XXX OO_ ___");
        assert_eq!(
            apply_move(&b, 5, Mark::O),
            Err(EngineError::illegal(5, IllegalReason::GameOver))
        );
    }

    #[test]
    fn test_legal_moves() {
        let b = board("X_O _X_ O__");
        assert_eq!(legal_moves(&b).as_slice(), &[1, 3, 5, 7, 8]);
        assert!(legal_moves(&board("XOX XOO OXX")).is_empty());
    }

    #[test]
    fn test_next_mark_parity() {
        assert_eq!(next_mark(&Board::new()), Mark::X);
        assert_eq!(next_mark(&board("X__ ___ ___")), Mark::O);
        assert_eq!(next_mark(&board("X__ _O_ ___")), Mark::X);
    }

    #[test]
    fn test_winning_move() {
        let b = board("XX_ OO_ ___");
        assert_eq!(winning_move(&b, Mark::X), Some(2));
        assert_eq!(winning_move(&b, Mark::O), Some(5));
        assert_eq!(winning_move(&Board::new(), Mark::X), None);
    }
}

//! Move-selection strategies.
//!
//! Each difficulty tier is a `MoveStrategy`. Strategies are stateless apart
//! from configuration; randomness comes from the caller's `GameRng`.

use tracing::{debug, instrument};

use crate::core::{Board, EngineError, GameRng, Mark};
use crate::rules::{evaluate, legal_moves, winning_move, LegalMoves};

// =============================================================================
// Strategy trait
// =============================================================================

/// Picks one legal cell for `me` to play.
pub trait MoveStrategy: Send + Sync {
    /// Select a move for `me` on `board`.
    ///
    /// ## Errors
    ///
    /// [`EngineError::NoLegalMove`] if the board is full or already won.
    fn select(&self, board: &Board, me: Mark, rng: &mut GameRng) -> Result<usize, EngineError>;
}

/// Legal moves on a board that may still be played.
///
/// A won board can still have empty cells, but none of them is playable.
pub(crate) fn playable_moves(board: &Board) -> Result<LegalMoves, EngineError> {
    if evaluate(board).is_terminal() {
        return Err(EngineError::NoLegalMove);
    }
    let moves = legal_moves(board);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMove);
    }
    Ok(moves)
}

// =============================================================================
// Random
// =============================================================================

/// Uniformly random legal move. No look-ahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    #[instrument(level = "debug", name = "random_select", skip_all, fields(me = %me))]
    fn select(&self, board: &Board, me: Mark, rng: &mut GameRng) -> Result<usize, EngineError> {
        let moves = playable_moves(board)?;
        let index = *rng.choose(&moves).ok_or(EngineError::NoLegalMove)?;
        debug!(index, "random move");
        Ok(index)
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// One-ply greedy play.
///
/// 1. Complete a line of our own (first ascending index).
/// 2. Otherwise block the opponent's immediate win (first ascending index).
/// 3. Otherwise play randomly.
///
/// Forks are not handled: two simultaneous threats beat it.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl MoveStrategy for HeuristicStrategy {
    #[instrument(level = "debug", name = "heuristic_select", skip_all, fields(me = %me))]
    fn select(&self, board: &Board, me: Mark, rng: &mut GameRng) -> Result<usize, EngineError> {
        playable_moves(board)?;

        if let Some(index) = winning_move(board, me) {
            debug!(index, "taking immediate win");
            return Ok(index);
        }

        if let Some(index) = winning_move(board, me.opponent()) {
            debug!(index, "blocking opponent win");
            return Ok(index);
        }

        RandomStrategy.select(board, me, rng)
    }
}

//! The rules of play.
//!
//! - `apply_move`: the only checked transition from one board to the next
//! - `evaluate`: derives `InProgress`, `Win` or `Draw` from a board
//! - `legal_moves` / `next_mark`: what may be played, and by whom
//!
//! Results and turns are always recomputed from the board, so they cannot
//! drift out of sync with it.

pub mod engine;

pub use engine::{
    apply_move, evaluate, legal_moves, next_mark, winning_move, GameResult, LegalMoves,
};

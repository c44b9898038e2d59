//! Automated opponent.
//!
//! ## Overview
//!
//! Given a board and the automated player's mark, pick one legal cell. The
//! strength of play is chosen by [`DifficultyTier`]:
//!
//! - **Random**: uniform over legal moves
//! - **Heuristic**: win now, else block, else random
//! - **Optimal**: exhaustive minimax with fixed per-mark scoring
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, GameRng, Mark};
//! use rust_ttt::decision::{choose_move, DifficultyTier};
//! use rust_ttt::rules::apply_move;
//!
//! let mut rng = GameRng::new(42);
//! let board: Board = "XX_ _O_ __O".parse().unwrap();
//!
//! let index = choose_move(&board, Mark::O, DifficultyTier::Optimal, &mut rng).unwrap();
//! assert_eq!(index, 2);
//!
//! let board = apply_move(&board, index, Mark::O).unwrap();
//! assert_eq!(board.get(2), Some(Mark::O));
//! ```

pub mod config;
pub mod minimax;
pub mod self_play;
pub mod stats;
pub mod strategy;
pub mod tier;

use tracing::instrument;

use crate::core::{Board, EngineError, GameRng, Mark};

pub use config::SearchConfig;
pub use minimax::{terminal_score, Analysis, MinimaxStrategy, MAXIMIZER, WIN_SCORE};
pub use self_play::{play_from, play_tiers, MatchRecord};
pub use stats::SearchStats;
pub use strategy::{HeuristicStrategy, MoveStrategy, RandomStrategy};
pub use tier::DifficultyTier;

impl DifficultyTier {
    /// The strategy implementing this tier.
    #[must_use]
    pub fn strategy(self) -> Box<dyn MoveStrategy> {
        match self {
            DifficultyTier::Random => Box::new(RandomStrategy),
            DifficultyTier::Heuristic => Box::new(HeuristicStrategy),
            DifficultyTier::Optimal => Box::new(MinimaxStrategy::default()),
        }
    }
}

/// Pick a move for `me` at the given tier.
///
/// The opponent is always `me.opponent()`.
///
/// ## Errors
///
/// [`EngineError::NoLegalMove`] if the board is full or already won.
#[instrument(level = "debug", skip(board, rng), fields(board = %board))]
pub fn choose_move(
    board: &Board,
    me: Mark,
    tier: DifficultyTier,
    rng: &mut GameRng,
) -> Result<usize, EngineError> {
    tier.strategy().select(board, me, rng)
}

//! # rust-ttt
//!
//! A tic-tac-toe engine: board rules, an automated opponent at three
//! strengths, and the session flow that ties them to two named players.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: boards are small `Copy` values. Every rule function
//!    takes a board and returns a new one or a derived value.
//!
//! 2. **Derived state**: whose turn it is and whether the game is over are
//!    always computed from the board, never stored beside it.
//!
//! 3. **Reproducible play**: all randomness flows through a seeded
//!    [`GameRng`], so a session replays exactly given its seed.
//!
//! ## Modules
//!
//! - `core`: marks, the board, win lines, RNG, errors
//! - `rules`: move validation, application, and outcome detection
//! - `decision`: move selection for the random, heuristic and optimal tiers
//! - `session`: configuration, turn order, status text, reset

pub mod core;
pub mod decision;
pub mod rules;
pub mod session;

pub use crate::core::{
    Board, BoardParseError, ConfigError, EngineError, GameRng, IllegalReason,
    Line, Mark, CELL_COUNT, LINES,
};

pub use crate::rules::{
    apply_move, evaluate, legal_moves, next_mark, winning_move, GameResult, LegalMoves,
};

pub use crate::decision::{
    choose_move, play_tiers, Analysis, DifficultyTier, MinimaxStrategy, MoveStrategy,
    SearchConfig, SearchStats,
};

pub use crate::session::{PlayMode, Session, SessionConfig, Status};

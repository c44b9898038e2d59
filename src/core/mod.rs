//! Core types: marks, the board and its lines, RNG, and errors.
//!
//! Nothing here knows the rules of play; `rules` and `decision` build on it.

pub mod board;
pub mod error;
pub mod mark;
pub mod rng;

pub use board::{Board, Line, CELL_COUNT, LINES};
pub use error::{BoardParseError, ConfigError, EngineError, IllegalReason};
pub use mark::Mark;
pub use rng::GameRng;

//! A game in progress.

use tracing::{debug, info, instrument};

use crate::core::{Board, ConfigError, EngineError, GameRng, Line, Mark, CELL_COUNT};
use crate::decision::choose_move;
use crate::rules::{apply_move, evaluate, next_mark, GameResult};

use super::config::{PlayMode, SessionConfig};

/// What the caller should display after each move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// `name` won with `mark` along `line`.
    Winner { name: String, mark: Mark, line: Line },
    /// The board filled with no line.
    Draw,
    /// `name`, holding `mark`, moves next.
    NextTurn { name: String, mark: Mark },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner { name, .. } => write!(f, "{name} wins!"),
            Status::Draw => write!(f, "It's a draw!"),
            Status::NextTurn { name, mark } => write!(f, "Next turn: {mark} ({name})"),
        }
    }
}

/// A single game between two seats.
///
/// Holds only the configuration, the board and the RNG. The result and whose
/// turn it is are derived from the board on every call.
///
/// When the automated player holds the mark on turn, the caller invokes
/// [`Session::computer_move`]; this is the same at turn zero, except that
/// [`Session::new`] and [`Session::reset`] make that opening move themselves.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    rng: GameRng,
}

impl Session {
    /// Validate `config` and start a game.
    ///
    /// If the automated player holds `X`, its opening move is already on the
    /// returned board.
    ///
    /// ## Errors
    ///
    /// Any [`ConfigError`] from [`SessionConfig::validated`].
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(mode = ?config.mode, seed = rng.seed(), "session started");

        let mut session = Self {
            config,
            board: Board::new(),
            rng,
        };
        session.open();
        Ok(session)
    }

    /// Let the automated player open if it holds `X`.
    ///
    /// The board is empty and the automated player is on turn, so every
    /// tier has a legal move to return.
    fn open(&mut self) {
        if self.is_computer_turn() {
            let opened = self.computer_move();
            debug_assert!(opened.is_ok(), "opening move failed: {opened:?}");
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seed the session's RNG started from.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The board's result.
    #[must_use]
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// The mark on turn.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        next_mark(&self.board)
    }

    /// Check if the game is live and the automated player is on turn.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.result().is_terminal() && self.config.mode.computer_mark() == Some(self.next_mark())
    }

    /// Display name of whoever holds `mark`.
    #[must_use]
    pub fn name_for(&self, mark: Mark) -> &str {
        let first = match self.config.mode {
            PlayMode::HumanVsHuman => Mark::X,
            PlayMode::HumanVsComputer { human, .. } => human,
        };
        if mark == first {
            &self.config.player_one
        } else {
            &self.config.player_two
        }
    }

    /// Play a human move at `index` for the mark on turn.
    ///
    /// The automated player does not reply automatically; call
    /// [`Session::computer_move`] when [`Session::is_computer_turn`] is true.
    ///
    /// ## Errors
    ///
    /// - [`EngineError::OutOfRange`] if `index > 8`
    /// - [`EngineError::OutOfTurn`] if the automated player is on turn
    /// - [`EngineError::IllegalMove`] from [`apply_move`]
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameResult, EngineError> {
        if index >= CELL_COUNT {
            return Err(EngineError::OutOfRange { index });
        }
        if self.is_computer_turn() {
            return Err(EngineError::OutOfTurn {
                next: self.next_mark(),
            });
        }

        let mark = self.next_mark();
        self.board = apply_move(&self.board, index, mark)?;
        let result = self.result();
        debug!(index, %mark, ?result, "human move");
        Ok(result)
    }

    /// Ask the decision engine for the automated player's move and apply it.
    ///
    /// Returns the chosen cell.
    ///
    /// ## Errors
    ///
    /// - [`EngineError::NoLegalMove`] if the game is over
    /// - [`EngineError::OutOfTurn`] if a human is on turn
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<usize, EngineError> {
        if self.result().is_terminal() {
            return Err(EngineError::NoLegalMove);
        }

        let mark = self.next_mark();
        let tier = match self.config.mode {
            PlayMode::HumanVsComputer { human, difficulty } if human != mark => difficulty,
            _ => return Err(EngineError::OutOfTurn { next: mark }),
        };

        let index = choose_move(&self.board, mark, tier, &mut self.rng)?;
        self.board = apply_move(&self.board, index, mark)?;
        debug!(index, %mark, %tier, "computer move");
        Ok(index)
    }

    /// What to display now.
    #[must_use]
    pub fn status(&self) -> Status {
        match self.result() {
            GameResult::Win { mark, line } => Status::Winner {
                name: self.name_for(mark).to_string(),
                mark,
                line,
            },
            GameResult::Draw => Status::Draw,
            GameResult::InProgress => {
                let mark = self.next_mark();
                Status::NextTurn {
                    name: self.name_for(mark).to_string(),
                    mark,
                }
            }
        }
    }

    /// Start a new game with the same configuration.
    ///
    /// The RNG carries on from where it was, so consecutive games differ.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        info!("session reset");
        self.open();
    }
}

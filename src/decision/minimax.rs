//! Exhaustive minimax for the optimal tier.
//!
//! ## Scoring
//!
//! Scores are fixed per mark, not relative to the searching player:
//!
//! | Terminal  | Score |
//! |-----------|-------|
//! | `O` wins  | +10   |
//! | `X` wins  | −10   |
//! | Draw      | 0     |
//!
//! Nodes where `O` moves take the maximum child score; nodes where `X` moves
//! take the minimum. The root returns the first legal move (ascending index)
//! reaching the best score for the mover.
//!
//! ## Pruning
//!
//! Alpha-beta pruning is on by default. The root only replaces its best move
//! on a strictly better score, and a pruned child can only report a bound no
//! better than the current best, so the chosen move is identical with and
//! without pruning.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::{Board, EngineError, GameRng, Mark};
use crate::rules::{evaluate, winning_move, GameResult};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::strategy::{playable_moves, MoveStrategy};

/// Score for a win by `O`.
pub const WIN_SCORE: i32 = 10;

/// The mark that maximises.
pub const MAXIMIZER: Mark = Mark::O;

/// Fixed score of a terminal result, or `None` while in progress.
#[must_use]
pub fn terminal_score(result: &GameResult) -> Option<i32> {
    match result {
        GameResult::InProgress => None,
        GameResult::Draw => Some(0),
        GameResult::Win { mark, .. } => Some(win_score(*mark)),
    }
}

fn win_score(mark: Mark) -> i32 {
    if mark == MAXIMIZER {
        WIN_SCORE
    } else {
        -WIN_SCORE
    }
}

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// The chosen cell.
    pub index: usize,
    /// Minimax value of the chosen move under the fixed scoring.
    pub score: i32,
    /// Work done to find it.
    pub stats: SearchStats,
}

/// Full-depth minimax strategy.
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    config: SearchConfig,
}

impl MinimaxStrategy {
    /// Create a strategy with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Get the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the full game tree and return the chosen move with its score.
    ///
    /// An immediate win for `me` is returned without searching: it always
    /// reaches the best possible score, and playing it ends the game soonest.
    ///
    /// ## Errors
    ///
    /// [`EngineError::NoLegalMove`] if the board is full or already won.
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn analyze(&self, board: &Board, me: Mark) -> Result<Analysis, EngineError> {
        let start = Instant::now();
        let moves = playable_moves(board)?;
        let mut stats = SearchStats::new();

        if let Some(index) = winning_move(board, me) {
            debug!(index, "immediate win");
            return Ok(Analysis {
                index,
                score: win_score(me),
                stats,
            });
        }

        let maximizing = me == MAXIMIZER;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(usize, i32)> = None;

        for index in moves {
            let score = self.search(board.with(index, me), me.opponent(), alpha, beta, &mut stats);
            trace!(index, score, "root child");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((index, score));
                if self.config.pruning {
                    if maximizing {
                        alpha = score;
                    } else {
                        beta = score;
                    }
                }
            }
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        let (index, score) = best.ok_or(EngineError::NoLegalMove)?;
        debug!(
            index,
            score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            nps = stats.nodes_per_second(),
            "minimax move"
        );

        Ok(Analysis {
            index,
            score,
            stats,
        })
    }

    /// Minimax value of `board` with `mover` to play.
    fn search(
        &self,
        board: Board,
        mover: Mark,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if let Some(score) = terminal_score(&evaluate(&board)) {
            stats.leaves += 1;
            return score;
        }

        let maximizing = mover == MAXIMIZER;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in board.empty_cells() {
            let score = self.search(board.with(index, mover), mover.opponent(), alpha, beta, stats);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.pruning && alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn select(&self, board: &Board, me: Mark, _rng: &mut GameRng) -> Result<usize, EngineError> {
        self.analyze(board, me).map(|analysis| analysis.index)
    }
}

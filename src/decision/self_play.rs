//! Automated matches between two strategies.
//!
//! Used to check tiers against each other (optimal never loses, optimal
//! against itself always draws) and by the benchmark.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, EngineError, GameRng, Mark};
use crate::rules::{apply_move, evaluate, next_mark, GameResult};

use super::strategy::MoveStrategy;
use super::tier::DifficultyTier;

/// A finished automated match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Moves in play order.
    pub moves: Vec<(Mark, usize)>,
    /// Final board.
    pub board: Board,
    /// Terminal result of the final board.
    pub result: GameResult,
}

/// Play `x` against `o` from `start` until the board is terminal.
///
/// Each seat draws from its own fork of `rng`, so adding randomness to one
/// seat does not shift the other's stream.
///
/// ## Errors
///
/// Propagates any engine error; with well-behaved strategies there is none.
#[instrument(level = "debug", skip_all, fields(start = %start))]
pub fn play_from(
    start: Board,
    x: &dyn MoveStrategy,
    o: &dyn MoveStrategy,
    rng: &mut GameRng,
) -> Result<MatchRecord, EngineError> {
    let mut x_rng = rng.fork();
    let mut o_rng = rng.fork();
    let mut board = start;
    let mut moves = Vec::new();

    while !evaluate(&board).is_terminal() {
        let mover = next_mark(&board);
        let index = match mover {
            Mark::X => x.select(&board, mover, &mut x_rng)?,
            Mark::O => o.select(&board, mover, &mut o_rng)?,
        };
        board = apply_move(&board, index, mover)?;
        moves.push((mover, index));
    }

    let result = evaluate(&board);
    debug!(?result, moves = moves.len(), "match finished");

    Ok(MatchRecord {
        moves,
        board,
        result,
    })
}

/// Play a full match between two tiers from an empty board.
pub fn play_tiers(
    x: DifficultyTier,
    o: DifficultyTier,
    rng: &mut GameRng,
) -> Result<MatchRecord, EngineError> {
    play_from(Board::new(), x.strategy().as_ref(), o.strategy().as_ref(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::RandomStrategy;

    #[test]
    fn test_random_match_is_reproducible() {
        let a = play_tiers(
            DifficultyTier::Random,
            DifficultyTier::Random,
            &mut GameRng::new(9),
        )
        .unwrap();
        let b = play_tiers(
            DifficultyTier::Random,
            DifficultyTier::Random,
            &mut GameRng::new(9),
        )
        .unwrap();

        assert_eq!(a, b);
        assert!(a.result.is_terminal());
        assert!(a.moves.len() >= 5);
    }

    #[test]
    fn test_moves_alternate() {
        let record = play_tiers(
            DifficultyTier::Heuristic,
            DifficultyTier::Random,
            &mut GameRng::new(4),
        )
        .unwrap();

        for (i, (mark, _)) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(*mark, expected);
        }
    }

    #[test]
    fn test_play_from_finished_board() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        let record = play_from(
            board,
            &RandomStrategy,
            &RandomStrategy,
            &mut GameRng::new(1),
        )
        .unwrap();

        assert!(record.moves.is_empty());
        assert_eq!(record.result.winner(), Some(Mark::X));
    }
}

//! Property tests over arbitrary and reachable boards.

use proptest::prelude::*;

use rust_ttt::core::{Board, EngineError, GameRng, IllegalReason, Mark, LINES};
use rust_ttt::decision::{choose_move, DifficultyTier};
use rust_ttt::rules::{apply_move, evaluate, legal_moves, next_mark, GameResult};

fn any_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

/// Any assignment of marks to cells, reachable or not.
fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(any_cell()).prop_map(Board::from_cells)
}

/// Play cells in shuffled order until the game ends or `len` moves are made.
fn reachable_board() -> impl Strategy<Value = Board> {
    (Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(), 0..=9usize).prop_map(|(order, len)| {
        let mut b = Board::new();
        for index in order.into_iter().take(len) {
            if evaluate(&b).is_terminal() {
                break;
            }
            b = apply_move(&b, index, next_mark(&b)).unwrap();
        }
        b
    })
}

proptest! {
    #[test]
    fn prop_evaluate_matches_line_scan(b in any_board()) {
        let first = LINES.iter().copied().find(|line| {
            let [a, m, c] = line.cells();
            b.get(a).is_some() && b.get(a) == b.get(m) && b.get(a) == b.get(c)
        });

        let expected = match first {
            Some(line) => GameResult::Win { mark: b.get(line.cells()[0]).unwrap(), line },
            None if b.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        };
        prop_assert_eq!(evaluate(&b), expected);
    }

    #[test]
    fn prop_legal_moves_are_empty_cells_ascending(b in any_board()) {
        let moves = legal_moves(&b);
        let expected: Vec<usize> = (0..9).filter(|&i| b.get(i).is_none()).collect();
        prop_assert_eq!(moves.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_occupied_cells_never_overwritten(b in any_board(), index in 0..9usize, mark in prop_oneof![Just(Mark::X), Just(Mark::O)]) {
        prop_assume!(!evaluate(&b).is_terminal());
        prop_assume!(!b.is_empty_at(index));
        prop_assert_eq!(
            apply_move(&b, index, mark),
            Err(EngineError::illegal(index, IllegalReason::Occupied))
        );
    }

    #[test]
    fn prop_finished_boards_reject_every_cell(b in any_board(), index in 0..9usize) {
        prop_assume!(evaluate(&b).is_terminal());
        prop_assert_eq!(
            apply_move(&b, index, Mark::X),
            Err(EngineError::illegal(index, IllegalReason::GameOver))
        );
    }

    #[test]
    fn prop_play_keeps_marks_alternating(b in reachable_board()) {
        prop_assert!(b.is_alternating());
        prop_assert!(evaluate(&b).is_terminal() || b.filled() < 9);
    }

    #[test]
    fn prop_every_tier_plays_legally(b in reachable_board(), seed in any::<u64>()) {
        prop_assume!(!evaluate(&b).is_terminal());
        let legal = legal_moves(&b);
        let me = next_mark(&b);
        let mut rng = GameRng::new(seed);

        for tier in DifficultyTier::ALL {
            let index = choose_move(&b, me, tier, &mut rng).unwrap();
            prop_assert!(legal.contains(&index));
        }
    }

    #[test]
    fn prop_move_fills_exactly_one_cell(b in reachable_board(), index in 0..9usize) {
        prop_assume!(!evaluate(&b).is_terminal() && b.is_empty_at(index));
        let mark = next_mark(&b);
        let next = apply_move(&b, index, mark).unwrap();

        prop_assert_eq!(next.filled(), b.filled() + 1);
        prop_assert_eq!(next.get(index), Some(mark));
        for other in (0..9).filter(|&i| i != index) {
            prop_assert_eq!(next.get(other), b.get(other));
        }
    }
}

//! Property tests over random move sequences on a small board.

use goban_rules::board::{Board, Color, Point};
use goban_rules::error::MoveError;
use proptest::prelude::*;

const SIZE: usize = 5;

/// A pass (`None`) or a point that may be off the board.
fn action() -> impl Strategy<Value = Option<Point>> {
    prop_oneof![
        1 => Just(None::<Point>),
        8 => (0..SIZE * SIZE + 3).prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn random_games_keep_invariants(actions in prop::collection::vec(action(), 0..120)) {
        let mut board = Board::new(SIZE).unwrap();

        for act in actions {
            let mover = board.to_move();
            let grid_before = board.grid().clone();
            let prior_before = board.prior().cloned();
            let captures_before = board.captures();
            let len_before = board.history().len();

            match act {
                None => {
                    board.pass();
                    prop_assert_eq!(board.to_move(), mover.opponent());
                    prop_assert_eq!(board.grid(), &grid_before);
                    prop_assert!(board.history().last().unwrap().is_pass());
                }
                Some(pt) => match board.play(pt).map(|mv| mv.captured.clone()) {
                    Ok(captured) => {
                        prop_assert_eq!(board.to_move(), mover.opponent());
                        prop_assert_eq!(board.stone_at(pt), Some(mover));
                        prop_assert_eq!(board.prior(), Some(&grid_before));
                        prop_assert_eq!(
                            board.captures().get(mover),
                            captures_before.get(mover) + captured.len() as u32
                        );
                        for cell in 0..SIZE * SIZE {
                            let before = grid_before.get(cell);
                            let after = board.stone_at(cell);
                            if cell == pt {
                                prop_assert_eq!(before, None);
                            } else if captured.contains(&cell) {
                                prop_assert_eq!(before, Some(mover.opponent()));
                                prop_assert_eq!(after, None);
                            } else {
                                prop_assert_eq!(before, after);
                            }
                        }
                    }
                    Err(err) => {
                        if pt >= SIZE * SIZE {
                            prop_assert_eq!(err, MoveError::OutOfBounds(pt));
                        } else if grid_before.get(pt).is_some() {
                            prop_assert_eq!(err, MoveError::Occupied(pt));
                        }
                        prop_assert_eq!(board.to_move(), mover);
                        prop_assert_eq!(board.grid(), &grid_before);
                        prop_assert_eq!(board.prior().cloned(), prior_before);
                        prop_assert_eq!(board.captures(), captures_before);
                        prop_assert_eq!(board.history().len(), len_before);
                    }
                },
            }
            prop_assert_eq!(board.grid().area(), SIZE * SIZE);
        }

        // Tallies always match the record.
        let by = |color: Color| -> u32 {
            board
                .history()
                .iter()
                .filter(|m| m.color == color)
                .map(|m| m.captured.len() as u32)
                .sum()
        };
        prop_assert_eq!(board.captures().black, by(Color::Black));
        prop_assert_eq!(board.captures().white, by(Color::White));

        // Replaying the record reproduces the same position.
        let replayed = Board::replay(SIZE, board.history()).unwrap();
        prop_assert_eq!(replayed.grid(), board.grid());
        prop_assert_eq!(replayed.to_move(), board.to_move());
    }

    #[test]
    fn game_over_iff_last_two_are_passes(actions in prop::collection::vec(action(), 0..40)) {
        let mut board = Board::new(SIZE).unwrap();
        for act in actions {
            match act {
                None => board.pass(),
                Some(pt) => {
                    let _ = board.play(pt);
                }
            }
        }
        let history = board.history();
        let expected = history.len() >= 2
            && history[history.len() - 1].is_pass()
            && history[history.len() - 2].is_pass();
        prop_assert_eq!(board.is_game_over(), expected);
    }
}

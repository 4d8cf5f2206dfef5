//! Randomized tests.
//!
//! Arbitrary move sequences (accepted or not) and seeded random playouts,
//! checking the properties that must hold after every single move.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rust_kuba::{Coord, Direction, KubaGame, Marble, Rejection, WinReason};

const NAMES: [&str; 2] = ["PlayerA", "PlayerB"];

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Forward),
        Just(Direction::Backward),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn attempt_strategy() -> impl Strategy<Value = (usize, i32, i32, Direction)> {
    (0..2usize, -1..8i32, -1..8i32, direction_strategy())
}

proptest! {
    #[test]
    fn prop_marbles_only_leave_one_at_a_time(attempts in prop::collection::vec(attempt_strategy(), 1..120)) {
        let mut game = KubaGame::new();

        for (who, row, col, dir) in attempts {
            let before_board = game.board().clone();
            let before = game.marble_counts();
            let captured_before = game.captured(NAMES[who]).unwrap();

            match game.try_move(NAMES[who], (row, col), dir) {
                Ok(outcome) => {
                    let after = game.marble_counts();
                    let lost = before.total() - after.total();
                    prop_assert_eq!(lost, u32::from(outcome.ejected.is_some()));

                    let captured_after = game.captured(NAMES[who]).unwrap();
                    prop_assert_eq!(
                        captured_after - captured_before,
                        u32::from(outcome.ejected == Some(Marble::Red))
                    );
                    if let Some(color) = outcome.ejected {
                        prop_assert_eq!(before.of(color) - after.of(color), 1);
                    }

                    let own = game.state().player(game.state().player_id(NAMES[who]).unwrap()).color();
                    prop_assert_eq!(before.of(own), after.of(own));
                }
                Err(_) => {
                    prop_assert_eq!(game.board(), &before_board);
                }
            }
        }
    }

    #[test]
    fn prop_off_board_reads_empty(row in -50..50i32, col in -50..50i32) {
        let game = KubaGame::new();
        let coord = Coord::new(row, col);
        if !coord.is_on_board() {
            prop_assert_eq!(game.marble(coord), Marble::Empty);
        }
    }

    #[test]
    fn prop_off_board_move_rejected(row in 7..20i32, col in -20..0i32, dir in direction_strategy()) {
        let mut game = KubaGame::new();
        prop_assert_eq!(game.check_move("PlayerA", (row, col), dir), Err(Rejection::OffBoard));
        prop_assert_eq!(game.current_turn(), None);
    }
}

/// Play one random game, checking legality and the reversal memo on every
/// move. Returns the finished game, or the game after `max_moves`.
fn random_playout(seed: u64, max_moves: usize) -> KubaGame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = KubaGame::new();

    for _ in 0..max_moves {
        if game.winner().is_some() {
            break;
        }

        // Whoever is to move always has a move while the game is on.
        let name = game.current_turn().unwrap_or("PlayerA").to_string();
        let moves = game.legal_moves(&name).unwrap();
        assert!(!moves.is_empty(), "seed {seed}: {name} stuck without a result");

        for mv in &moves {
            let mut probe = game.clone();
            assert_eq!(
                probe.check_move(&name, mv.coord, mv.direction),
                Ok(()),
                "seed {seed}: {mv} listed but refused"
            );
        }

        let mv = *moves.choose(&mut rng).unwrap();
        assert!(game.make_move(&name, mv.coord, mv.direction));

        if game.winner().is_some() {
            break;
        }

        // The move that would undo this push is off limits for one turn.
        let memo = game.state().reversal_memo.unwrap();
        let next = game.current_turn().unwrap().to_string();
        let next_color = game
            .state()
            .player(game.state().player_id(&next).unwrap())
            .color();
        if game.marble(memo.coord) == next_color {
            let mut probe = game.clone();
            assert_eq!(
                probe.check_move(&next, memo.coord, memo.direction),
                Err(Rejection::Reversal),
                "seed {seed}"
            );
            assert!(!game.legal_moves(&next).unwrap().contains(&memo));
        }
    }

    game
}

#[test]
fn test_random_playouts_stay_legal() {
    for seed in 0..40 {
        let game = random_playout(seed, 300);
        let counts = game.marble_counts();
        assert!(counts.white <= 8 && counts.black <= 8 && counts.red <= 13);

        let captured: u32 = ["PlayerA", "PlayerB"]
            .iter()
            .map(|name| game.captured(name).unwrap())
            .sum();
        assert_eq!(captured + counts.red, 13, "seed {seed}");
    }
}

#[test]
fn test_random_playout_results_are_consistent() {
    for seed in 100..140 {
        let game = random_playout(seed, 500);
        let Some(result) = game.result() else { continue };

        let winner = game.winner().unwrap();
        let loser = if winner == "PlayerA" { "PlayerB" } else { "PlayerA" };
        let loser_color = game
            .state()
            .player(game.state().player_id(loser).unwrap())
            .color();

        match result.reason {
            WinReason::Elimination => assert_eq!(game.marble_counts().of(loser_color), 0),
            WinReason::Captures => assert!(game.captured(winner).unwrap() >= 7),
            WinReason::Immobilized => assert!(game.legal_moves(loser).unwrap().is_empty()),
        }
        assert_eq!(game.current_turn(), Some(loser));
    }
}

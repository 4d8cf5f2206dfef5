//! Cascading push.
//!
//! Pushing a marble moves the whole contiguous run of marbles in front of
//! it one cell along. The run ends at the first empty cell, which absorbs
//! it, or at the edge, where the front marble falls off.
//!
//! The run is collected into a buffer first, then shifted front to back so
//! every marble lands in a cell that has just been vacated.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::Board;
use crate::core::{Coord, Marble, Move, BOARD_SIZE};

/// What a push did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushOutcome {
    /// Where the front marble of the run ended up. Off the board when it
    /// was ejected.
    pub front: Coord,

    /// The marble pushed off the board, if any.
    pub ejected: Option<Marble>,
}

/// Shift every marble from `mv.coord` up to the first gap one step in
/// `mv.direction`. No rule checks are made.
pub fn push(board: &mut Board, mv: Move) -> PushOutcome {
    let mut run: SmallVec<[Coord; BOARD_SIZE]> = SmallVec::new();
    let mut cursor = mv.coord;
    while cursor.is_on_board() && !board.marble_at(cursor).is_empty() {
        run.push(cursor);
        cursor = cursor.step(mv.direction);
    }

    let ejected = match run.last() {
        Some(&last) if !cursor.is_on_board() => Some(board.marble_at(last)),
        _ => None,
    };

    for &from in run.iter().rev() {
        let marble = board.marble_at(from);
        board.put(from.step(mv.direction), marble);
        board.put(from, Marble::Empty);
    }

    trace!(%mv, run = run.len(), front = %cursor, ?ejected, "push");

    PushOutcome {
        front: cursor,
        ejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_marble_into_gap() {
        let mut b = board(&[
            "XXXXXXX",
            "XXXXXXX",
            "XXXBXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]);
        let outcome = push(&mut b, Move::new((2, 3), Direction::Backward));

        assert_eq!(outcome, PushOutcome { front: Coord::new(3, 3), ejected: None });
        assert_eq!(b.marble_at(Coord::new(2, 3)), Marble::Empty);
        assert_eq!(b.marble_at(Coord::new(3, 3)), Marble::Black);
    }

    #[test]
    fn test_run_shifts_up_to_gap() {
        let mut b = board(&[
            "XBWRXRW",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]);
        let outcome = push(&mut b, Move::new((0, 1), Direction::Right));

        assert_eq!(outcome.front, Coord::new(0, 4));
        assert_eq!(outcome.ejected, None);
        assert_eq!(b, board(&[
            "XXBWRRW",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]));
    }

    #[test]
    fn test_ejects_front_marble() {
        let mut b = board(&[
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXBRR",
        ]);
        let outcome = push(&mut b, Move::new((6, 4), Direction::Right));

        assert_eq!(outcome.front, Coord::new(6, 7));
        assert_eq!(outcome.ejected, Some(Marble::Red));
        assert_eq!(b.marble_at(Coord::new(6, 4)), Marble::Empty);
        assert_eq!(b.marble_at(Coord::new(6, 5)), Marble::Black);
        assert_eq!(b.marble_at(Coord::new(6, 6)), Marble::Red);
        assert_eq!(b.counts().red, 1);
    }

    #[test]
    fn test_marble_on_edge_falls_off() {
        let mut b = board(&[
            "WXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]);
        let outcome = push(&mut b, Move::new((0, 0), Direction::Forward));

        assert_eq!(outcome.front, Coord::new(-1, 0));
        assert_eq!(outcome.ejected, Some(Marble::White));
        assert_eq!(b.counts().total(), 0);
    }

    #[test]
    fn test_full_line() {
        let mut b = board(&[
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "BRRWRRR",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]);
        let outcome = push(&mut b, Move::new((3, 6), Direction::Left));

        assert_eq!(outcome.ejected, Some(Marble::Black));
        assert_eq!(b, board(&[
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
            "RRWRRRX",
            "XXXXXXX",
            "XXXXXXX",
            "XXXXXXX",
        ]));
    }

    #[test]
    fn test_opening_push() {
        let mut b = Board::new();
        let outcome = push(&mut b, Move::new((6, 1), Direction::Forward));

        assert_eq!(outcome, PushOutcome { front: Coord::new(4, 1), ejected: None });
        assert_eq!(b.marble_at(Coord::new(6, 1)), Marble::Empty);
        assert_eq!(b.marble_at(Coord::new(5, 1)), Marble::Black);
        assert_eq!(b.marble_at(Coord::new(4, 1)), Marble::Black);
        assert_eq!(b.counts(), Board::new().counts());
    }
}

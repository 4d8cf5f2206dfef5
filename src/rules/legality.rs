//! Push legality shared by move validation and the mobility scan.
//!
//! Once a marble has been selected (it exists, it is the mover's, it is
//! their turn), three board-level rules remain:
//!
//! 1. **Reversal**: the move may not equal the memo left by the previous
//!    push.
//! 2. **Access**: the cell behind the marble, opposite the push direction,
//!    must be empty. Off-board cells count as empty.
//! 3. **Self-elimination**: if the line from the marble to the edge is
//!    packed solid, the marble on the edge gets pushed off; it may not be
//!    one of the mover's own.
//!
//! Both [`check_push`] and [`legal_pushes`] go through the same code so
//! that a mobility scan can never disagree with validation.

use crate::board::Board;
use crate::core::{Coord, Direction, Marble, Move, Rejection};

/// Check the board-level rules for pushing `mv.coord` as `color`.
///
/// Assumes the marble at `mv.coord` has already been checked to be
/// `color`.
pub fn check_push(board: &Board, mv: Move, color: Marble, memo: Option<Move>) -> Result<(), Rejection> {
    if memo == Some(mv) {
        return Err(Rejection::Reversal);
    }
    if !has_access(board, mv) {
        return Err(Rejection::NoAccess);
    }
    if would_eject(board, mv) == Some(color) {
        return Err(Rejection::SelfElimination);
    }
    Ok(())
}

/// The cell behind `mv.coord` is empty (or off the board).
#[must_use]
pub fn has_access(board: &Board, mv: Move) -> bool {
    board.marble_at(mv.coord.step(mv.direction.opposite())).is_empty()
}

/// The marble that `mv` would push off the board, if any.
///
/// Walks from `mv.coord` to the edge in the push direction. Any empty cell
/// along the way absorbs the push, so nothing is ejected.
#[must_use]
pub fn would_eject(board: &Board, mv: Move) -> Option<Marble> {
    let mut edge = None;
    let mut cursor = mv.coord;
    while cursor.is_on_board() {
        let marble = board.marble_at(cursor);
        if marble.is_empty() {
            return None;
        }
        edge = Some(marble);
        cursor = cursor.step(mv.direction);
    }
    edge
}

/// All moves of `color` marbles that pass [`check_push`], in row-major
/// order of the pushed marble.
pub fn legal_pushes(board: &Board, color: Marble, memo: Option<Move>) -> impl Iterator<Item = Move> + '_ {
    board
        .positions_of(color)
        .flat_map(|coord: Coord| Direction::ALL.into_iter().map(move |dir| Move::new(coord, dir)))
        .filter(move |&mv| check_push(board, mv, color, memo).is_ok())
}

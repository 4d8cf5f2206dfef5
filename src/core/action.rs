//! Move representation and history records.
//!
//! A `Move` names a marble by coordinate and the direction to push it.
//! Successful moves are logged as `MoveRecord`s in the game history.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coord::{Coord, Direction};
use super::marble::Marble;
use super::player::PlayerId;

/// A push request: the marble at `coord`, pushed one step in `direction`.
///
/// ```
/// use rust_kuba::core::{Coord, Direction, Move};
///
/// let mv = Move::new((6, 1), Direction::Forward);
/// assert_eq!(mv.coord, Coord::new(6, 1));
/// assert_eq!(mv.to_string(), "(6, 1) F");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(coord: impl Into<Coord>, direction: Direction) -> Self {
        Self {
            coord: coord.into(),
            direction,
        }
    }

    /// The move that would push the marble now at `front` straight back.
    #[must_use]
    pub fn reversal_from(front: Coord, direction: Direction) -> Self {
        Self::new(front, direction.opposite())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coord, self.direction)
    }
}

/// A successful move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move played.
    pub mv: Move,

    /// Turn number when the move was played (starts at 1).
    pub turn: u32,

    /// Marble pushed off the board, if any.
    pub ejected: Option<Marble>,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32, ejected: Option<Marble>) -> Self {
        Self {
            player,
            mv,
            turn,
            ejected,
        }
    }

    /// Whether this move captured a red marble.
    #[must_use]
    pub fn captured_red(&self) -> bool {
        self.ejected == Some(Marble::Red)
    }
}

//! Grid coordinates and push directions.
//!
//! ## Coord
//!
//! A signed `(row, col)` pair. Row 0 is the top of the board. Coordinates
//! are allowed to leave the 7×7 grid so that "one step past the edge" can
//! be expressed directly; such cells always read as empty.
//!
//! ## Direction
//!
//! The four orthogonal push directions, written `F`, `B`, `L`, `R`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::KubaError;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 7;

/// A cell position, possibly off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate addresses a real cell.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i32 && self.col >= 0 && self.col < BOARD_SIZE as i32
    }

    /// The neighbouring coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Array indices for an on-board coordinate.
    #[must_use]
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Every on-board coordinate in row-major order.
    ///
    /// ```
    /// use rust_kuba::core::Coord;
    ///
    /// let all: Vec<_> = Coord::all().collect();
    /// assert_eq!(all.len(), 49);
    /// assert_eq!(all[0], Coord::new(0, 0));
    /// assert_eq!(all[8], Coord::new(1, 1));
    /// ```
    pub fn all() -> impl Iterator<Item = Coord> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Push direction.
///
/// `Forward` moves toward row 0, `Backward` toward row 6, `Left` toward
/// column 0 and `Right` toward column 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Right,
        Direction::Left,
    ];

    /// Row and column offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Forward => 'F',
            Direction::Backward => 'B',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = KubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Direction::from_symbol(c).ok_or_else(|| KubaError::InvalidDirection(s.to_string()))
            }
            _ => Err(KubaError::InvalidDirection(s.to_string())),
        }
    }
}

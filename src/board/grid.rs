//! The 7×7 marble grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Coord, KubaError, Marble, BOARD_SIZE};

/// Row-major grid contents.
pub type Cells = [[Marble; BOARD_SIZE]; BOARD_SIZE];

const X: Marble = Marble::Empty;
const B: Marble = Marble::Black;
const W: Marble = Marble::White;
const R: Marble = Marble::Red;

/// Standard opening position: 8 white, 8 black, 13 red.
pub const STARTING_LAYOUT: Cells = [
    [W, W, X, X, X, B, B],
    [W, W, X, R, X, B, B],
    [X, X, R, R, R, X, X],
    [X, R, R, R, R, R, X],
    [X, X, R, R, R, X, X],
    [B, B, X, R, X, W, W],
    [B, B, X, X, X, W, W],
];

/// Per-color marble tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u32,
    pub black: u32,
    pub red: u32,
}

impl MarbleCounts {
    /// Count for one marble kind. Empty cells are not tracked.
    #[must_use]
    pub fn of(&self, marble: Marble) -> u32 {
        match marble {
            Marble::White => self.white,
            Marble::Black => self.black,
            Marble::Red => self.red,
            Marble::Empty => 0,
        }
    }

    /// `(white, black, red)`.
    #[must_use]
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.white, self.black, self.red)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.white + self.black + self.red
    }
}

/// The playing grid.
///
/// Every on-board cell always holds a value. The raw accessors
/// [`get`](Board::get) and [`set`](Board::set) fail on off-board
/// coordinates; [`marble_at`](Board::marble_at) treats them as empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Board in the standard opening position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_cells(STARTING_LAYOUT)
    }

    /// Board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_cells([[Marble::Empty; BOARD_SIZE]; BOARD_SIZE])
    }

    #[must_use]
    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    /// Parse seven rows of seven symbols (`X`, `B`, `W`, `R`).
    ///
    /// Whitespace inside a row is ignored, so rows may be written spaced out.
    ///
    /// ```
    /// use rust_kuba::board::Board;
    /// use rust_kuba::core::{Coord, Marble};
    ///
    /// let board = Board::from_rows(&[
    ///     "B X X X X X X",
    ///     "X X X X X X X",
    ///     "X X X R X X X",
    ///     "X X X X X X X",
    ///     "X X X X X X X",
    ///     "X X X X X X X",
    ///     "X X X X X X W",
    /// ]).unwrap();
    /// assert_eq!(board.marble_at(Coord::new(2, 3)), Marble::Red);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, KubaError> {
        if rows.len() != BOARD_SIZE {
            return Err(KubaError::MalformedBoard(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Marble::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(KubaError::MalformedBoard(format!(
                    "row {} has {} cells",
                    row,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                cells[row][col] = Marble::from_symbol(symbol).ok_or(KubaError::InvalidSymbol(symbol))?;
            }
        }

        Ok(Self { cells })
    }

    /// Raw read. Off-board coordinates are a contract violation.
    pub fn get(&self, coord: Coord) -> Result<Marble, KubaError> {
        coord
            .indices()
            .map(|(r, c)| self.cells[r][c])
            .ok_or(KubaError::UnknownCoordinate(coord))
    }

    /// Raw write. Off-board coordinates are a contract violation.
    pub fn set(&mut self, coord: Coord, marble: Marble) -> Result<(), KubaError> {
        let (r, c) = coord.indices().ok_or(KubaError::UnknownCoordinate(coord))?;
        self.cells[r][c] = marble;
        Ok(())
    }

    /// Bounds-aware read: anything off the board is empty.
    #[must_use]
    pub fn marble_at(&self, coord: Coord) -> Marble {
        self.get(coord).unwrap_or(Marble::Empty)
    }

    /// Write that ignores off-board coordinates. Used where the caller has
    /// already walked the coordinate on the board.
    pub(crate) fn put(&mut self, coord: Coord, marble: Marble) {
        if let Some((r, c)) = coord.indices() {
            self.cells[r][c] = marble;
        }
    }

    /// Read-only view of the whole grid.
    #[must_use]
    pub fn snapshot(&self) -> &Cells {
        &self.cells
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Marble)> + '_ {
        Coord::all().map(move |coord| (coord, self.marble_at(coord)))
    }

    /// Coordinates holding `marble`.
    pub fn positions_of(&self, marble: Marble) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(move |&(_, m)| m == marble)
            .map(|(coord, _)| coord)
    }

    /// Full-grid tally of each marble color.
    #[must_use]
    pub fn counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for marble in self.snapshot().iter().flatten() {
            match marble {
                Marble::White => counts.white += 1,
                Marble::Black => counts.black += 1,
                Marble::Red => counts.red += 1,
                Marble::Empty => {}
            }
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows as `   W  |  W  |  X ...`, separated by dashed lines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "{}", "-".repeat(43))?;
            }
            let line: Vec<String> = cells.iter().map(|m| format!("  {}  ", m)).collect();
            writeln!(f, " {}", line.join("|"))?;
        }
        Ok(())
    }
}

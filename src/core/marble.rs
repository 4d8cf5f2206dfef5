//! Cell contents.
//!
//! Every cell on the grid holds exactly one `Marble` value. `Empty` is a
//! value like any other so the grid never has holes, and reads that fall
//! off the board resolve to `Empty`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::KubaError;

/// The contents of a single cell.
///
/// Symbols follow the usual Kuba notation: `X` for an empty cell,
/// `B`/`W` for the two player colors and `R` for the neutral red marbles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    /// No marble.
    #[default]
    Empty,
    /// Black player marble.
    Black,
    /// White player marble.
    White,
    /// Neutral marble, captured by pushing it off the board.
    Red,
}

impl Marble {
    /// Both colors a player may be assigned.
    pub const PLAYER_COLORS: [Marble; 2] = [Marble::Black, Marble::White];

    /// Single-character notation for this marble.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marble::Empty => 'X',
            Marble::Black => 'B',
            Marble::White => 'W',
            Marble::Red => 'R',
        }
    }

    /// Parse single-character notation. Case-sensitive.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Marble> {
        match symbol {
            'X' => Some(Marble::Empty),
            'B' => Some(Marble::Black),
            'W' => Some(Marble::White),
            'R' => Some(Marble::Red),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marble::Empty)
    }

    /// True for the two colors that can be assigned to a player.
    #[must_use]
    pub fn is_player_color(self) -> bool {
        Marble::PLAYER_COLORS.contains(&self)
    }
}

impl fmt::Display for Marble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Marble {
    type Err = KubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Marble::from_symbol(c).ok_or(KubaError::InvalidSymbol(c)),
            (Some(c), Some(_)) => Err(KubaError::InvalidSymbol(c)),
            (None, _) => Err(KubaError::InvalidSymbol(' ')),
        }
    }
}

//! Error types.
//!
//! There are two tiers:
//!
//! - [`Rejection`]: a move broke a rule. This is an ordinary game outcome;
//!   the board is left untouched and the caller may try another move.
//! - [`KubaError`]: a caller broke the API contract (a raw cell access off
//!   the grid, an unknown player name, an invalid configuration).
//!
//! Move entry points only ever produce rejections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;
use super::marble::Marble;

/// Contract violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KubaError {
    #[error("unknown coordinate {0}")]
    UnknownCoordinate(Coord),

    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    #[error("invalid marble symbol {0:?}")]
    InvalidSymbol(char),

    #[error("invalid direction {0:?}")]
    InvalidDirection(String),

    #[error("player name {0:?} is used by both players")]
    DuplicatePlayerName(String),

    #[error("both players are assigned {0}")]
    SameColor(Marble),

    #[error("{0} is not a player color")]
    NeutralColor(Marble),

    #[error("capture target must be at least 1")]
    ZeroCaptureTarget,

    #[error("malformed board: {0}")]
    MalformedBoard(String),
}

/// Why a move was refused.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum Rejection {
    #[error("coordinate is off the board")]
    OffBoard,

    #[error("the game is already over")]
    GameOver,

    #[error("player is not part of this game")]
    UnknownPlayer,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("cell holds no movable marble")]
    NotAMarble,

    #[error("marble belongs to the other player")]
    WrongColor,

    #[error("unrecognized direction")]
    InvalidDirection,

    #[error("move would undo the previous push")]
    Reversal,

    #[error("no empty cell behind the marble")]
    NoAccess,

    #[error("push would eject one of the mover's own marbles")]
    SelfElimination,
}

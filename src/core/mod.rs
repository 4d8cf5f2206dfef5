//! Core engine types: marbles, coordinates, players, moves, state,
//! configuration and errors.
//!
//! These are the building blocks the board and the rules operate on.

pub mod action;
pub mod config;
pub mod coord;
pub mod error;
pub mod marble;
pub mod player;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::{GameConfig, PlayerConfig, DEFAULT_CAPTURE_TARGET};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use error::{KubaError, Rejection};
pub use marble::Marble;
pub use player::{Player, PlayerId, PlayerMap};
pub use state::GameState;

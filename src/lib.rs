//! # rust-kuba
//!
//! A rules engine for Kuba, a two-player marble-pushing game on a 7×7
//! grid.
//!
//! ## Design Principles
//!
//! 1. **Rejections are not errors**: an illegal move is an ordinary outcome.
//!    Move commands return `false` or a [`Rejection`] and never touch the
//!    board when they refuse.
//!
//! 2. **One legality function**: validation and the end-of-turn mobility
//!    scan share the same push checks, so "no legal move" always means
//!    exactly that.
//!
//! 3. **Explicit state**: turn order, the reversal memo and the result all
//!    live in [`GameState`], passed by reference to the rules.
//!
//! ## Modules
//!
//! - `core`: Marbles, coordinates, players, moves, state, config, errors
//! - `board`: The 7×7 grid
//! - `rules`: `RulesEngine` trait, push legality, cascading push
//! - `games`: The Kuba rule set and a name-based session facade
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, GameConfig, GameState, KubaError, Marble, Move, MoveRecord, Player, PlayerConfig,
    PlayerId, PlayerMap, Rejection, BOARD_SIZE, DEFAULT_CAPTURE_TARGET,
};

pub use crate::board::{Board, MarbleCounts, STARTING_LAYOUT};

pub use crate::rules::{GameResult, PushOutcome, RulesEngine, WinReason};

pub use crate::games::kuba::{KubaGame, KubaGameBuilder, KubaRules};

//! Game configuration.
//!
//! A game is configured once at startup:
//! - `PlayerConfig`: a name and a marble color for each seat
//! - `capture_target`: red marbles needed to win outright
//! - `starting_board`: an optional custom position (defaults to the
//!   standard layout)
//!
//! `GameConfig::validate` enforces the player invariants (distinct names,
//! distinct colors, no neutral color) and a capture target of at least 1.

use serde::{Deserialize, Serialize};

use super::error::KubaError;
use super::marble::Marble;
use super::player::{PlayerId, PlayerMap};
use crate::board::Board;

/// Red marbles a player must capture to win.
pub const DEFAULT_CAPTURE_TARGET: u32 = 7;

/// Name and color for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Marble,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: Marble) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, Marble)> for PlayerConfig {
    fn from((name, color): (S, Marble)) -> Self {
        Self::new(name, color)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat 0 and seat 1.
    pub players: PlayerMap<PlayerConfig>,

    /// Captured red marbles that win the game.
    pub capture_target: u32,

    /// Opening position. `None` for the standard layout.
    pub starting_board: Option<Board>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: PlayerMap::from_pair(
                PlayerConfig::new("PlayerA", Marble::Black),
                PlayerConfig::new("PlayerB", Marble::White),
            ),
            capture_target: DEFAULT_CAPTURE_TARGET,
            starting_board: None,
        }
    }
}

impl GameConfig {
    /// Default configuration: `("PlayerA", B)` against `("PlayerB", W)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both players.
    #[must_use]
    pub fn with_players(mut self, first: impl Into<PlayerConfig>, second: impl Into<PlayerConfig>) -> Self {
        self.players = PlayerMap::from_pair(first.into(), second.into());
        self
    }

    /// Set the capture target.
    #[must_use]
    pub fn with_capture_target(mut self, target: u32) -> Self {
        self.capture_target = target;
        self
    }

    /// Start from a custom position.
    #[must_use]
    pub fn with_starting_board(mut self, board: Board) -> Self {
        self.starting_board = Some(board);
        self
    }

    /// Get a seat's configuration.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerConfig {
        &self.players[id]
    }

    /// Check the player invariants.
    pub fn validate(&self) -> Result<(), KubaError> {
        let first = &self.players[PlayerId::ONE];
        let second = &self.players[PlayerId::TWO];

        for player in [first, second] {
            if !player.color.is_player_color() {
                return Err(KubaError::NeutralColor(player.color));
            }
        }
        if first.color == second.color {
            return Err(KubaError::SameColor(first.color));
        }
        if first.name == second.name {
            return Err(KubaError::DuplicatePlayerName(first.name.clone()));
        }
        if self.capture_target == 0 {
            return Err(KubaError::ZeroCaptureTarget);
        }
        Ok(())
    }
}

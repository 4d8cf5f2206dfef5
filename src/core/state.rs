//! Game state for one session.
//!
//! Everything that changes while a game is played lives here:
//! - Board contents and the cached marble counts
//! - Both players, with their capture counters
//! - Whose turn it is (unset until the first move)
//! - The reversal memo: the single move forbidden next turn
//! - The result, once someone has won
//! - Move history
//!
//! Rules code receives a `&mut GameState`; there is no global state.
//! History uses `im::Vector` so cloning a state to explore a line of play
//! is O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::config::GameConfig;
use super::error::KubaError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Board, MarbleCounts};
use crate::rules::GameResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Grid contents.
    pub board: Board,

    /// Both players.
    pub players: PlayerMap<Player>,

    /// Player to move. `None` until the first move is attempted.
    pub active_player: Option<PlayerId>,

    /// The move forbidden on the next turn.
    pub reversal_memo: Option<Move>,

    /// Set once, when the game is won.
    pub result: Option<GameResult>,

    /// Counts as of the last successful move.
    pub marble_counts: MarbleCounts,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Every successful move, oldest first.
    pub history: Vector<MoveRecord>,

    name_index: FxHashMap<String, PlayerId>,
}

impl GameState {
    /// Create the opening state for a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, KubaError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Opening state for a configuration already known to be valid.
    pub(crate) fn from_valid(config: &GameConfig) -> Self {
        let players = PlayerMap::new(|id| {
            let pc = config.player(id);
            Player::new(pc.name.clone(), pc.color)
        });
        let name_index = players
            .iter()
            .map(|(id, p)| (p.name().to_string(), id))
            .collect();
        let board = config.starting_board.clone().unwrap_or_default();
        let marble_counts = board.counts();

        Self {
            board,
            players,
            active_player: None,
            reversal_memo: None,
            result: None,
            marble_counts,
            turn_number: 1,
            history: Vector::new(),
            name_index,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Look up a seat by player name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.name_index.get(name).copied()
    }

    /// Look up a seat by player name, failing for unknown names.
    pub fn require_player(&self, name: &str) -> Result<PlayerId, KubaError> {
        self.player_id(name)
            .ok_or_else(|| KubaError::UnknownPlayer(name.to_string()))
    }

    // === Turn ===

    /// Player waiting for their turn. `None` before the first move.
    #[must_use]
    pub fn waiting_player(&self) -> Option<PlayerId> {
        self.active_player.map(PlayerId::opponent)
    }

    pub fn set_active_player(&mut self, player: PlayerId) {
        self.active_player = Some(player);
    }

    /// Pass the turn to the waiting player and bump the turn number.
    pub fn advance_turn(&mut self) {
        if let Some(next) = self.waiting_player() {
            self.active_player = Some(next);
        }
        self.turn_number += 1;
    }

    // === Result ===

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.map(|r| r.winner)
    }

    // === History ===

    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }
}

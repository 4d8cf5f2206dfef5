//! Rules engine trait.
//!
//! The rules define:
//! - Which moves are legal in a state
//! - How a move changes the state
//! - When the game is over, and who won

use serde::{Deserialize, Serialize};

use super::push::PushOutcome;
use crate::core::{GameConfig, GameState, Move, PlayerId, Rejection};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Every opposing marble was pushed off the board.
    Elimination,
    /// The winner reached the capture target of red marbles.
    Captures,
    /// The opponent had no legal push left.
    Immobilized,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: PlayerId, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_move` may assign the first mover as a side effect; nothing
///   else about the state changes.
/// - `apply_move` must leave the state untouched when it returns `Err`.
/// - `legal_moves` and `check_move` must agree on every move.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Check a move for `player`, returning the first rule it breaks.
    fn check_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<(), Rejection>;

    /// Validate and play a move.
    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<PushOutcome, Rejection>;

    /// Every move `player` could legally make right now, ignoring whose
    /// turn it is.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Returns `Some(result)` once the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result
    }

    // === Convenience Methods ===

    /// `check_move` as a predicate.
    fn validate_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> bool {
        self.check_move(state, player, mv).is_ok()
    }

    /// Whether `player` has at least one legal push.
    fn has_any_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        !self.legal_moves(state, player).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::new(PlayerId::TWO, WinReason::Immobilized);
        assert!(!result.is_winner(PlayerId::ONE));
        assert!(result.is_winner(PlayerId::TWO));
    }

    #[test]
    fn test_game_result_serialization() {
        let result = GameResult::new(PlayerId::ONE, WinReason::Captures);
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}

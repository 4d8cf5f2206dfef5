//! Kuba rules implementation.

use tracing::{debug, info};

use crate::core::{
    Coord, GameConfig, GameState, Marble, Move, MoveRecord, PlayerId, Rejection,
};
use crate::rules::{check_push, legal_pushes, push, GameResult, PushOutcome, RulesEngine, WinReason};

/// The Kuba rule set.
///
/// Validation runs these checks in order and stops at the first failure:
///
/// 1. the coordinate is on the board
/// 2. nobody has won yet
/// 3. (no check) if nobody has moved yet, the caller becomes the first mover
/// 4. it is the caller's turn
/// 5. the cell holds a player marble (not empty, not red)
/// 6. the marble is the caller's color
/// 7. the move is not the reversal of the previous push
/// 8. the cell behind the marble is empty
/// 9. the push would not eject one of the caller's own marbles
///
/// Checks 7-9 are [`check_push`], which the mobility scan reuses.
#[derive(Clone, Debug)]
pub struct KubaRules {
    config: GameConfig,
}

impl KubaRules {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Red marbles needed to win.
    #[must_use]
    pub fn capture_target(&self) -> u32 {
        self.config.capture_target
    }

    /// Checks 1-6: is `coord` a marble `player` may move right now?
    ///
    /// Returns the player's color. Assigns the first mover when the turn
    /// order is still open, even if a later check fails.
    pub fn check_selection(
        &self,
        state: &mut GameState,
        player: PlayerId,
        coord: Coord,
    ) -> Result<Marble, Rejection> {
        if !coord.is_on_board() {
            return Err(Rejection::OffBoard);
        }
        if state.is_over() {
            return Err(Rejection::GameOver);
        }
        if state.active_player.is_none() {
            debug!(player = state.player(player).name(), "first mover");
            state.set_active_player(player);
        }
        if state.active_player != Some(player) {
            return Err(Rejection::NotYourTurn);
        }

        let marble = state.board.marble_at(coord);
        if marble.is_empty() || marble == Marble::Red {
            return Err(Rejection::NotAMarble);
        }
        let color = state.player(player).color();
        if marble != color {
            return Err(Rejection::WrongColor);
        }
        Ok(color)
    }

    /// Post-move bookkeeping: counts, win check, turn hand-off.
    fn update_game_state(&self, state: &mut GameState, mover: PlayerId) {
        state.marble_counts = state.board.counts();

        if state.result.is_none() {
            if let Some(reason) = self.win_reason(state, mover) {
                info!(winner = state.player(mover).name(), ?reason, "game won");
                state.result = Some(GameResult::new(mover, reason));
            }
        }

        state.advance_turn();
    }

    /// Win conditions in precedence order.
    fn win_reason(&self, state: &GameState, mover: PlayerId) -> Option<WinReason> {
        let opponent = mover.opponent();

        if state.marble_counts.of(state.player(opponent).color()) == 0 {
            Some(WinReason::Elimination)
        } else if state.player(mover).captured() >= self.config.capture_target {
            Some(WinReason::Captures)
        } else if !self.has_any_legal_move(state, opponent) {
            Some(WinReason::Immobilized)
        } else {
            None
        }
    }
}

impl RulesEngine for KubaRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn check_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<(), Rejection> {
        let result = self
            .check_selection(state, player, mv.coord)
            .and_then(|color| check_push(&state.board, mv, color, state.reversal_memo));

        if let Err(reason) = result {
            debug!(%player, %mv, %reason, "move rejected");
        }
        result
    }

    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<PushOutcome, Rejection> {
        self.check_move(state, player, mv)?;

        let outcome = push(&mut state.board, mv);
        if outcome.ejected == Some(Marble::Red) {
            state.player_mut(player).record_capture();
        }
        state.reversal_memo = Some(Move::reversal_from(outcome.front, mv.direction));

        let turn = state.turn_number;
        state.record_move(MoveRecord::new(player, mv, turn, outcome.ejected));
        self.update_game_state(state, player);

        Ok(outcome)
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        let color = state.player(player).color();
        legal_pushes(&state.board, color, state.reversal_memo).collect()
    }

    fn has_any_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        let color = state.player(player).color();
        legal_pushes(&state.board, color, state.reversal_memo)
            .next()
            .is_some()
    }
}

//! Name-based game session.

use im::Vector;
use std::fmt;
use tracing::debug;

use super::rules::KubaRules;
use crate::board::{Board, MarbleCounts};
use crate::core::{
    Coord, Direction, GameConfig, GameState, KubaError, Marble, Move, MoveRecord, PlayerConfig, PlayerId,
    Rejection,
};
use crate::rules::{GameResult, PushOutcome, RulesEngine};

/// Builder for a Kuba game.
pub struct KubaGameBuilder {
    config: GameConfig,
}

impl Default for KubaGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl KubaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(mut self, first: impl Into<PlayerConfig>, second: impl Into<PlayerConfig>) -> Self {
        self.config = self.config.with_players(first, second);
        self
    }

    pub fn capture_target(mut self, target: u32) -> Self {
        self.config = self.config.with_capture_target(target);
        self
    }

    pub fn starting_board(mut self, board: Board) -> Self {
        self.config = self.config.with_starting_board(board);
        self
    }

    /// Build the rules and the opening state.
    pub fn build(self) -> Result<(KubaRules, GameState), KubaError> {
        let state = GameState::new(&self.config)?;
        Ok((KubaRules::new(self.config), state))
    }
}

/// A Kuba session addressed by player name.
///
/// Move commands never fail with an error: a refused move returns `false`
/// (or a [`Rejection`]) and leaves the board as it was. Queries about an
/// unknown player name are contract violations and return
/// [`KubaError::UnknownPlayer`].
///
/// ```
/// use rust_kuba::core::{Direction, Marble};
/// use rust_kuba::games::kuba::KubaGame;
///
/// let mut game = KubaGame::new();
/// assert_eq!(game.current_turn(), None);
///
/// assert!(game.make_move("PlayerA", (6, 1), Direction::Forward));
/// assert_eq!(game.marble((4, 1)), Marble::Black);
/// assert_eq!(game.current_turn(), Some("PlayerB"));
///
/// // PlayerA cannot move twice in a row.
/// assert!(!game.make_move("PlayerA", (4, 1), Direction::Forward));
/// ```
#[derive(Clone, Debug)]
pub struct KubaGame {
    rules: KubaRules,
    state: GameState,
}

impl Default for KubaGame {
    fn default() -> Self {
        Self::new()
    }
}

impl KubaGame {
    /// Standard game between `("PlayerA", B)` and `("PlayerB", W)`.
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::from_valid(&config),
            rules: KubaRules::new(config),
        }
    }

    /// Standard game between two named players.
    ///
    /// ```
    /// use rust_kuba::core::Marble;
    /// use rust_kuba::games::kuba::KubaGame;
    ///
    /// let game = KubaGame::with_players(("Ann", Marble::White), ("Bo", Marble::Black)).unwrap();
    /// assert_eq!(game.captured("Ann"), Ok(0));
    ///
    /// assert!(KubaGame::with_players(("Ann", Marble::White), ("Bo", Marble::White)).is_err());
    /// ```
    pub fn with_players(first: impl Into<PlayerConfig>, second: impl Into<PlayerConfig>) -> Result<Self, KubaError> {
        Self::builder().players(first, second).build().map(Self::from_parts)
    }

    pub fn from_config(config: GameConfig) -> Result<Self, KubaError> {
        let state = GameState::new(&config)?;
        Ok(Self {
            rules: KubaRules::new(config),
            state,
        })
    }

    pub fn from_parts((rules, state): (KubaRules, GameState)) -> Self {
        Self { rules, state }
    }

    pub fn builder() -> KubaGameBuilder {
        KubaGameBuilder::new()
    }

    pub fn rules(&self) -> &KubaRules {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    // === Queries ===

    /// Name of the player to move, or `None` before anyone has moved.
    pub fn current_turn(&self) -> Option<&str> {
        self.state.active_player.map(|id| self.state.player(id).name())
    }

    /// Name of the winner, once there is one.
    pub fn winner(&self) -> Option<&str> {
        self.state.winner().map(|id| self.state.player(id).name())
    }

    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Red marbles captured by `name`.
    pub fn captured(&self, name: &str) -> Result<u32, KubaError> {
        let id = self.state.require_player(name)?;
        Ok(self.state.player(id).captured())
    }

    /// Cell contents; off-board coordinates read as empty.
    pub fn marble(&self, coord: impl Into<Coord>) -> Marble {
        self.state.board.marble_at(coord.into())
    }

    /// Counts as of the last successful move.
    pub fn marble_counts(&self) -> MarbleCounts {
        self.state.marble_counts
    }

    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    /// Every push `name` could make if it were their turn.
    pub fn legal_moves(&self, name: &str) -> Result<Vec<Move>, KubaError> {
        let id = self.state.require_player(name)?;
        Ok(self.rules.legal_moves(&self.state, id))
    }

    // === Commands ===

    /// Check a move and report why it would be refused.
    ///
    /// Like the rules it wraps, the first check by anyone fixes who moves
    /// first.
    pub fn check_move(&mut self, name: &str, coord: impl Into<Coord>, direction: Direction) -> Result<(), Rejection> {
        let mv = Move::new(coord, direction);
        let player = self.seat(name, mv.coord)?;
        self.rules.check_move(&mut self.state, player, mv)
    }

    pub fn validate_move(&mut self, name: &str, coord: impl Into<Coord>, direction: Direction) -> bool {
        self.check_move(name, coord, direction).is_ok()
    }

    /// Play a move, returning what the push did.
    pub fn try_move(&mut self, name: &str, coord: impl Into<Coord>, direction: Direction) -> Result<PushOutcome, Rejection> {
        let mv = Move::new(coord, direction);
        let player = self.seat(name, mv.coord)?;
        self.rules.apply_move(&mut self.state, player, mv)
    }

    /// Play a move. Returns `false`, with nothing changed, if it is refused.
    pub fn make_move(&mut self, name: &str, coord: impl Into<Coord>, direction: Direction) -> bool {
        self.try_move(name, coord, direction).is_ok()
    }

    /// [`check_move`](Self::check_move) with the direction given as `F`,
    /// `B`, `L` or `R`.
    pub fn check_move_notation(&mut self, name: &str, coord: impl Into<Coord>, direction: &str) -> Result<(), Rejection> {
        let coord = coord.into();
        match direction.parse::<Direction>() {
            Ok(dir) => self.check_move(name, coord, dir),
            Err(_) => {
                let player = self.seat(name, coord)?;
                self.rules.check_selection(&mut self.state, player, coord)?;
                debug!(name, direction, "move rejected: unrecognized direction");
                Err(Rejection::InvalidDirection)
            }
        }
    }

    /// [`make_move`](Self::make_move) with the direction given as `F`, `B`,
    /// `L` or `R`.
    pub fn make_move_notation(&mut self, name: &str, coord: impl Into<Coord>, direction: &str) -> bool {
        let coord = coord.into();
        match direction.parse::<Direction>() {
            Ok(dir) => self.make_move(name, coord, dir),
            Err(_) => self.check_move_notation(name, coord, direction).is_ok(),
        }
    }

    /// Resolve a name for a move command, keeping the off-board and
    /// game-over checks ahead of the unknown-name check.
    fn seat(&self, name: &str, coord: Coord) -> Result<PlayerId, Rejection> {
        match self.state.player_id(name) {
            Some(id) => Ok(id),
            None if !coord.is_on_board() => Err(Rejection::OffBoard),
            None if self.state.is_over() => Err(Rejection::GameOver),
            None => {
                debug!(name, "move rejected: unknown player");
                Err(Rejection::UnknownPlayer)
            }
        }
    }
}

impl fmt::Display for KubaGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state.board)
    }
}

//! Game bindings for Python.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::{KubaError, Marble, PlayerConfig, DEFAULT_CAPTURE_TARGET};
use crate::games::kuba::KubaGame;

fn player_config(name: String, color: &str) -> PyResult<PlayerConfig> {
    let color: Marble = color
        .parse()
        .map_err(|e: KubaError| PyValueError::new_err(e.to_string()))?;
    Ok(PlayerConfig::new(name, color))
}

/// Python wrapper for KubaGame.
///
/// Coordinates are `(row, col)` tuples and directions are `"F"`, `"B"`,
/// `"L"` or `"R"`; marbles are reported as `"W"`, `"B"`, `"R"` or `"X"`.
#[pyclass(name = "KubaGame")]
pub struct PyKubaGame {
    inner: KubaGame,
}

#[pymethods]
impl PyKubaGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_one: `(name, color)`, default `("PlayerA", "B")`
    /// - player_two: `(name, color)`, default `("PlayerB", "W")`
    /// - capture_target: red marbles needed to win
    #[new]
    #[pyo3(signature = (player_one = None, player_two = None, capture_target = DEFAULT_CAPTURE_TARGET))]
    fn new(
        player_one: Option<(String, String)>,
        player_two: Option<(String, String)>,
        capture_target: u32,
    ) -> PyResult<Self> {
        let (name_one, color_one) = player_one.unwrap_or_else(|| ("PlayerA".into(), "B".into()));
        let (name_two, color_two) = player_two.unwrap_or_else(|| ("PlayerB".into(), "W".into()));

        let parts = KubaGame::builder()
            .players(player_config(name_one, &color_one)?, player_config(name_two, &color_two)?)
            .capture_target(capture_target)
            .build()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            inner: KubaGame::from_parts(parts),
        })
    }

    /// Push the marble at `coordinate`. Returns False if the move is refused.
    fn make_move(&mut self, player_name: &str, coordinate: (i32, i32), direction: &str) -> bool {
        self.inner.make_move_notation(player_name, coordinate, direction)
    }

    /// Name of the player to move, or None before the first move.
    fn get_current_turn(&self) -> Option<String> {
        self.inner.current_turn().map(str::to_string)
    }

    /// Name of the winner, or None while the game continues.
    fn get_winner(&self) -> Option<String> {
        self.inner.winner().map(str::to_string)
    }

    /// Red marbles captured by a player. Raises KeyError for unknown names.
    fn get_captured(&self, player_name: &str) -> PyResult<u32> {
        self.inner
            .captured(player_name)
            .map_err(|e| PyKeyError::new_err(e.to_string()))
    }

    /// Marble symbol at a coordinate; "X" when empty or off the board.
    fn get_marble(&self, coordinate: (i32, i32)) -> String {
        self.inner.marble(coordinate).to_string()
    }

    /// `(white, black, red)` marbles on the board.
    fn get_marble_count(&self) -> (u32, u32, u32) {
        self.inner.marble_counts().as_tuple()
    }

    /// Print the board to stdout.
    fn print_board(&self) {
        print!("{}", self.inner);
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        let status = match self.inner.winner() {
            Some(name) => format!("won by {}", name),
            None => "ongoing".to_string(),
        };
        format!(
            "KubaGame(turn={}, to_move={}, status={})",
            self.inner.state().turn_number,
            self.inner.current_turn().unwrap_or("-"),
            status
        )
    }
}

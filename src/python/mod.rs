//! Python bindings for the rust-kuba engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_kuba
//!
//! game = rust_kuba.KubaGame(("PlayerA", "B"), ("PlayerB", "W"))
//! game.make_move("PlayerA", (6, 1), "F")
//! game.get_current_turn()   # "PlayerB"
//! game.get_marble_count()   # (8, 8, 13)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust-kuba: a rules engine for the Kuba marble-pushing game.
#[pymodule]
fn rust_kuba(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKubaGame>()?;
    Ok(())
}

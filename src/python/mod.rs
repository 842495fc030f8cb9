//! Python bindings for the Breakthrough engine.
//!
//! # Quick Start
//!
//! ```python
//! import breakthrough
//!
//! game = breakthrough.BreakthroughGame(8)
//! board = game.init_board()
//! valids = game.valid_moves(board, 1)
//!
//! board, player = game.next_state(board, 1, int(valids.nonzero()[0][0]))
//! canonical = game.canonical_form(board, player)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// breakthrough: Breakthrough rules for AlphaZero-style training.
#[pymodule]
fn breakthrough(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBreakthroughGame>()?;
    Ok(())
}

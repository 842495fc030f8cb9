//! Breakthrough bindings for Python.
//!
//! Boards cross the boundary as `int8` numpy arrays of shape `(n, n)`,
//! policies as `float32` vectors and players as `+1`/`-1` integers, the
//! conventions of the Python self-play framework.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Board, Player};
use crate::games::BreakthroughGame;
use crate::rules::Game;

fn player_from_int(player: i8) -> PyResult<Player> {
    Player::from_sign(player).ok_or_else(|| PyValueError::new_err("player must be 1 or -1"))
}

/// Convert and check a numpy board against `game`'s size.
fn board_from_numpy(game: &BreakthroughGame, board: &PyReadonlyArray2<'_, i8>) -> PyResult<Board> {
    let view = board.as_array();
    let rows: Vec<Vec<i8>> = view.outer_iter().map(|row| row.to_vec()).collect();
    let board = Board::from_rows(&rows).map_err(|err| PyValueError::new_err(err.to_string()))?;
    game.check_board(&board).map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(board)
}

fn board_to_numpy<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<i8>>> {
    PyArray2::from_vec2_bound(py, &board.to_rows())
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Python wrapper for BreakthroughGame.
#[pyclass(name = "BreakthroughGame")]
#[derive(Clone)]
pub struct PyBreakthroughGame(pub BreakthroughGame);

#[pymethods]
impl PyBreakthroughGame {
    /// Create a game on an n×n board (even, at least 4).
    #[new]
    #[pyo3(signature = (n = 8))]
    fn new(n: usize) -> PyResult<Self> {
        BreakthroughGame::new(n)
            .map(Self)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Starting position.
    fn init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        board_to_numpy(py, &self.0.init_board())
    }

    /// Board dimensions (n, n).
    fn board_size(&self) -> (usize, usize) {
        self.0.board_size()
    }

    /// Number of action indices.
    fn action_size(&self) -> usize {
        self.0.action_size()
    }

    /// Apply an action, returning (board, next_player).
    fn next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, i8>,
        player: i8,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, i8)> {
        if action >= self.0.action_size() {
            return Err(PyValueError::new_err("action out of range"));
        }
        let board = board_from_numpy(&self.0, &board)?;
        let player = player_from_int(player)?;
        let (next, next_player) = self.0.next_state(&board, player, Action::from(action));
        Ok((board_to_numpy(py, &next)?, next_player.sign()))
    }

    /// Legality mask as 0/1 values.
    fn valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, i8>,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray1<i8>>> {
        let board = board_from_numpy(&self.0, &board)?;
        let mask: Vec<i8> = self
            .0
            .valid_moves(&board, player_from_int(player)?)
            .into_iter()
            .map(i8::from)
            .collect();
        Ok(PyArray1::from_vec_bound(py, mask))
    }

    /// 0 while play continues, otherwise the result relative to `player`.
    fn game_ended(&self, board: PyReadonlyArray2<'_, i8>, player: i8) -> PyResult<i8> {
        let board = board_from_numpy(&self.0, &board)?;
        Ok(self.0.game_ended(&board, player_from_int(player)?))
    }

    /// Board from `player`'s perspective as White.
    fn canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, i8>,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = board_from_numpy(&self.0, &board)?;
        board_to_numpy(py, &self.0.canonical_form(&board, player_from_int(player)?))
    }

    /// Identity and left-right mirror of a (board, policy) pair.
    #[allow(clippy::type_complexity)]
    fn symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, i8>,
        pi: PyReadonlyArray1<'py, f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<i8>>, Bound<'py, PyArray1<f32>>)>> {
        let board = board_from_numpy(&self.0, &board)?;
        let policy = pi.as_array().to_vec();
        if policy.len() != self.0.action_size() {
            return Err(PyValueError::new_err("policy length must equal action_size"));
        }
        self.0
            .symmetries(&board, &policy)
            .into_iter()
            .map(|(b, p)| Ok((board_to_numpy(py, &b)?, PyArray1::from_vec_bound(py, p))))
            .collect()
    }

    /// One character per cell, usable as a cache key.
    fn string_representation(&self, board: PyReadonlyArray2<'_, i8>) -> PyResult<String> {
        Ok(self.0.string_representation(&board_from_numpy(&self.0, &board)?))
    }

    /// Human-readable grid.
    fn display(&self, board: PyReadonlyArray2<'_, i8>) -> PyResult<String> {
        Ok(self.0.display(&board_from_numpy(&self.0, &board)?))
    }

    fn __repr__(&self) -> String {
        format!("BreakthroughGame(n={})", self.0.size())
    }
}

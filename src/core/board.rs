//! Board snapshots.
//!
//! A `Board` is an n×n grid of cells in {-1, 0, +1}, stored row-major in a
//! persistent `im::Vector`. Cloning is O(1) and every update returns a new
//! snapshot that shares structure with the old one, so a board handed to a
//! search worker can never be observed half-written.
//!
//! ## Example
//!
//! ```
//! use breakthrough::core::{Board, EMPTY, WHITE};
//!
//! let empty = Board::new(4);
//! let one = empty.with_cell(3, 0, WHITE);
//!
//! assert_eq!(empty.get(3, 0), EMPTY);
//! assert_eq!(one[(3, 0)], WHITE);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::BoardError;

/// Value of an empty cell.
pub const EMPTY: i8 = 0;
/// Value of a White (side A) piece.
pub const WHITE: i8 = 1;
/// Value of a Black (side B) piece.
pub const BLACK: i8 = -1;

/// Immutable square board snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<i8>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: Vector::from(vec![EMPTY; size * size]),
        }
    }

    /// Build a board by evaluating `cell(row, col)` for every cell.
    pub fn from_fn(size: usize, cell: impl Fn(usize, usize) -> i8) -> Self {
        let cells = (0..size * size).map(|i| cell(i / size, i % size)).collect();
        Self { size, cells }
    }

    /// Build a board from rows of cell values.
    ///
    /// The rows must form a square and every value must be -1, 0 or 1.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vector::new();

        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::ShapeMismatch {
                    expected: size,
                    rows: size,
                    cols: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !(BLACK..=WHITE).contains(&value) {
                    return Err(BoardError::InvalidCell { row, col, value });
                }
                cells.push_back(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Return a copy with `(row, col)` set to `value`.
    ///
    /// The receiver is untouched; unchanged chunks are shared.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, value: i8) -> Self {
        let mut cells = self.cells.clone();
        cells.set(row * self.size + col, value);
        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = i8> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = i8> + '_ {
        let start = row * self.size;
        self.cells.iter().skip(start).take(self.size).copied()
    }

    /// Copy the board out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        (0..self.size).map(|r| self.row(r).collect()).collect()
    }

    /// Count cells holding `value`.
    #[must_use]
    pub fn count(&self, value: i8) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// Reverse the row order (top-to-bottom mirror).
    #[must_use]
    pub fn flip_rows(&self) -> Self {
        self.remap(|row, col| (self.size - 1 - row, col), 1)
    }

    /// Reverse the column order (left-right mirror).
    #[must_use]
    pub fn flip_cols(&self) -> Self {
        self.remap(|row, col| (row, self.size - 1 - col), 1)
    }

    /// Swap the colors of every piece.
    #[must_use]
    pub fn negated(&self) -> Self {
        self.remap(|row, col| (row, col), -1)
    }

    /// Build a board whose cell `(r, c)` is `scale * self[source(r, c)]`.
    fn remap(&self, source: impl Fn(usize, usize) -> (usize, usize), scale: i8) -> Self {
        Self::from_fn(self.size, |row, col| {
            let (row, col) = source(row, col);
            scale * self.get(row, col)
        })
    }

    /// Encode as a compact binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, BoardError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot written by [`Board::to_snapshot`].
    ///
    /// The decoded cells are re-validated.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, BoardError> {
        let board: Board = bincode::deserialize(bytes)?;
        if board.size.checked_mul(board.size) != Some(board.cells.len()) {
            return Err(BoardError::ShapeMismatch {
                expected: board.size,
                rows: board.cells.len() / board.size.max(1),
                cols: board.size,
            });
        }
        Self::from_rows(&board.to_rows())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = i8;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.size + col]
    }
}

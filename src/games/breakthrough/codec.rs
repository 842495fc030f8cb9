//! Action numbering for Breakthrough.
//!
//! Every pawn step lands on a destination cell, so the action space counts
//! destinations per move shape. On an n×n board (White moving up):
//!
//! ```text
//! Forward   Right     Left
//! 1 1 1 1   0 1 1 1   1 1 1 0
//! 1 1 1 1   0 1 1 1   1 1 1 0
//! 1 1 1 1   0 1 1 1   1 1 1 0
//! 0 0 0 0   0 0 0 0   0 0 0 0
//! n²-n      (n-1)²    (n-1)²
//! ```
//!
//! for `(3n - 2)(n - 1)` actions in total. Indices are laid out so that
//! action `a` and action `action_size - 1 - a` are left-right mirror images.
//! Region 4 is region 1 reversed, and the forward moves are split into two
//! halves where the right half is the left half reversed:
//!
//! ```text
//! Region 1   R2      R3      R4        (n = 4)
//! 00 01 02 | 09 10 : 19 20 | 27 28 29
//! 03 04 05 | 11 12 : 17 18 | 24 25 26
//! 06 07 08 | 13 14 : 15 16 | 21 22 23
//! ```
//!
//! Decoding folds an index onto the left half (regions 1 and 2), reads the
//! move off a small grid, then undoes the fold by mirroring columns. Black's
//! moves are White's moves with the rows reflected.

use crate::core::{Action, Move, Player};

/// Which grid a folded action index falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// (n-1)×(n-1) grid of diagonal steps toward higher columns.
    Diagonal,
    /// (n-1)×(n/2) grid of straight steps on the left half of the board.
    Forward,
}

/// Index arithmetic for a fixed even board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCodec {
    size: usize,
}

impl ActionCodec {
    /// Create a codec for a `size`×`size` board.
    ///
    /// `size` must already be validated as even and at least 4.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of action indices: `(3n - 2)(n - 1)`.
    #[must_use]
    pub const fn action_size(&self) -> usize {
        (3 * self.size - 2) * (self.size - 1)
    }

    /// Number of indices in the diagonal region.
    #[must_use]
    pub const fn diagonal_len(&self) -> usize {
        (self.size - 1) * (self.size - 1)
    }

    /// Number of indices in one forward half.
    #[must_use]
    pub const fn forward_len(&self) -> usize {
        (self.size - 1) * (self.size / 2)
    }

    /// Fold an action onto its left-half representative.
    ///
    /// Returns the folded index and whether the fold mirrored it.
    #[must_use]
    pub fn fold(&self, action: Action) -> (usize, bool) {
        let index = action.index();
        debug_assert!(index < self.action_size(), "action {} out of range", index);

        let left = index.min(self.action_size() - index - 1);
        (left, left != index)
    }

    /// Region of the folded action.
    #[must_use]
    pub fn region(&self, action: Action) -> Region {
        let (left, _) = self.fold(action);
        if left < self.diagonal_len() {
            Region::Diagonal
        } else {
            Region::Forward
        }
    }

    /// Decode an action into concrete board coordinates for `player`.
    ///
    /// Pure arithmetic; the result may be illegal on any particular board.
    #[must_use]
    pub fn decode(&self, action: Action, player: Player) -> Move {
        let n = self.size;
        let (left, mirrored) = self.fold(action);

        let mv = match self.region(action) {
            Region::Diagonal => {
                let dest_row = left / (n - 1);
                let src_col = left % (n - 1);
                Move::new(dest_row + 1, src_col, dest_row, src_col + 1)
            }
            Region::Forward => {
                let offset = left - self.diagonal_len();
                let dest_row = offset / (n / 2);
                let dest_col = offset % (n / 2);
                Move::new(dest_row + 1, dest_col, dest_row, dest_col)
            }
        };

        let mv = if mirrored { mv.mirrored(n) } else { mv };
        match player {
            Player::White => mv,
            Player::Black => mv.flipped(n),
        }
    }
}

//! Action indices and the moves they decode to.
//!
//! An `Action` is a bare index into the game's action space. It carries no
//! meaning on its own: the same index names different moves for White and
//! Black, and may be impossible on a given board. Games resolve it against
//! a board and player; see `games::breakthrough::ActionCodec`.

use serde::{Deserialize, Serialize};

/// Index into a game's action space, in `[0, action_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(pub u32);

impl Action {
    /// Create a new action index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the index as a `usize` for indexing masks and policies.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The action naming the left-right mirror image of this one.
    ///
    /// `a ↦ action_size - 1 - a`. Applying it twice returns the original.
    #[must_use]
    pub const fn mirror(self, action_size: usize) -> Self {
        Self((action_size - 1 - self.0 as usize) as u32)
    }
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// A single piece step, from source cell to destination cell.
///
/// Never stored alongside a board; always recomputed from an `Action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub src_row: usize,
    pub src_col: usize,
    pub dest_row: usize,
    pub dest_col: usize,
}

impl Move {
    /// Create a move from source and destination coordinates.
    #[must_use]
    pub const fn new(src_row: usize, src_col: usize, dest_row: usize, dest_col: usize) -> Self {
        Self {
            src_row,
            src_col,
            dest_row,
            dest_col,
        }
    }

    /// Reflect the columns on a `size`-wide board.
    #[must_use]
    pub const fn mirrored(self, size: usize) -> Self {
        Self {
            src_row: self.src_row,
            src_col: size - 1 - self.src_col,
            dest_row: self.dest_row,
            dest_col: size - 1 - self.dest_col,
        }
    }

    /// Reflect the rows on a `size`-tall board.
    #[must_use]
    pub const fn flipped(self, size: usize) -> Self {
        Self {
            src_row: size - 1 - self.src_row,
            src_col: self.src_col,
            dest_row: size - 1 - self.dest_row,
            dest_col: self.dest_col,
        }
    }

    /// True for a straight step (same column).
    #[must_use]
    pub const fn is_straight(self) -> bool {
        self.src_col == self.dest_col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_index() {
        let action = Action::new(17);
        assert_eq!(action.index(), 17);
        assert_eq!(Action::from(17usize), action);
        assert_eq!(format!("{}", action), "Action(17)");
    }

    #[test]
    fn test_action_mirror_is_involution() {
        let size = 154;
        for i in 0..size {
            let action = Action::from(i);
            assert_eq!(action.mirror(size).mirror(size), action);
        }
        assert_eq!(Action::new(0).mirror(size), Action::new(153));
    }

    #[test]
    fn test_move_mirrored() {
        let mv = Move::new(6, 0, 5, 1);
        assert_eq!(mv.mirrored(8), Move::new(6, 7, 5, 6));
        assert_eq!(mv.mirrored(8).mirrored(8), mv);
    }

    #[test]
    fn test_move_flipped() {
        let mv = Move::new(6, 2, 5, 2);
        assert_eq!(mv.flipped(8), Move::new(1, 2, 2, 2));
        assert!(mv.is_straight());
        assert!(!Move::new(6, 2, 5, 3).is_straight());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::new(42);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}

//! Breakthrough.
//!
//! Each side starts with two full rows of pawns at its own edge. A pawn
//! steps one row toward the opponent, straight onto an empty cell or
//! diagonally onto an empty or enemy cell (capturing it). The first pawn to
//! reach the far row wins.
//!
//! - White (+1) starts on the last two rows and moves toward row 0
//! - Black (-1) starts on rows 0 and 1 and moves toward row `n - 1`
//!
//! Board size must be even and at least 4; see [`ActionCodec`] for why.

mod codec;
mod game;
mod render;
mod validity;

pub use codec::{ActionCodec, Region};
pub use game::{BreakthroughGame, DEFAULT_SIZE};

//! Error types.
//!
//! Rules operations are total over well-formed inputs and never fail.
//! Errors only arise at the edges: configuring a game, building a board
//! from caller data, and reading moves from a person.

use thiserror::Error;

use super::action::Action;

/// Rejected game configuration. Not recoverable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Board is smaller than the two home bands plus one free row each.
    #[error("board size {size} is too small, expected at least 4")]
    TooSmall {
        /// Requested side length.
        size: usize,
    },

    /// The action encoding splits the forward moves into two equal halves.
    #[error("board size {size} is odd, expected an even size")]
    OddSize {
        /// Requested side length.
        size: usize,
    },
}

/// Failure to build a board from external data.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Rows are missing or ragged.
    #[error("expected a {expected}x{expected} board, got {rows} rows with a row of {cols} cells")]
    ShapeMismatch {
        /// Required side length.
        expected: usize,
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first offending row.
        cols: usize,
    },

    /// A cell holds something other than -1, 0 or 1.
    #[error("invalid cell value {value} at ({row}, {col})")]
    InvalidCell {
        /// Row of the bad cell.
        row: usize,
        /// Column of the bad cell.
        col: usize,
        /// Value found there.
        value: i8,
    },

    /// Binary snapshot could not be decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Failure to parse `<file><rank><file><rank>` move notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Input does not split into two squares.
    #[error("invalid length, expected a move like a2a3")]
    Length,

    /// A file is not a lowercase or uppercase letter.
    #[error("invalid file, expected a letter")]
    File,

    /// A rank is missing or not a number.
    #[error("invalid rank, expected a number")]
    Rank,

    /// The square does not exist on this board.
    #[error("square is outside a {size}x{size} board")]
    OutOfBoard {
        /// Board side length.
        size: usize,
    },
}

/// Failure of an agent to produce a move.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The side to move has no legal action.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// The agent answered with an action the mask marks illegal.
    #[error("agent chose illegal action {0}")]
    IllegalAction(Action),

    /// The move source reached end of input.
    #[error("input closed before a move was entered")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

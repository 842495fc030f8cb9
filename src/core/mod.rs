//! Core types: players, boards, actions, RNG, errors.
//!
//! These are game-agnostic building blocks. A `Board` is a plain signed grid;
//! how actions map onto it is decided by the game in `games`.

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, Move};
pub use board::{Board, BLACK, EMPTY, WHITE};
pub use error::{AgentError, BoardError, ConfigError, NotationError};
pub use player::Player;
pub use rng::{GameRng, GameRngState};

//! # breakthrough
//!
//! Rules engine for the board game Breakthrough, built to plug into an
//! AlphaZero-style self-play loop.
//!
//! ## Design Principles
//!
//! 1. **Dense action space**: every move shape on an n×n board has a fixed
//!    index in `[0, (3n-2)(n-1))`. Decoding is O(1) index arithmetic.
//!
//! 2. **Batched legality**: the legal-move mask is computed by comparing
//!    shifted windows of the board, never by simulating actions.
//!
//! 3. **Free symmetry**: actions `a` and `action_size - 1 - a` are mirror
//!    images, so mirroring a training sample is a board flip plus a policy
//!    reversal.
//!
//! 4. **Immutable snapshots**: boards are persistent vectors (`im-rs`);
//!    transitions return new boards and never touch their input.
//!
//! ## Modules
//!
//! - `core`: Players, boards, actions, RNG, errors
//! - `rules`: `Game` capability trait
//! - `games`: `BreakthroughGame` and its action codec
//! - `agents`: Random and interactive move selection
//! - `arena`: Plays agents against each other

pub mod core;
pub mod rules;
pub mod games;
pub mod agents;
pub mod arena;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, Move, Player,
    Board, EMPTY, WHITE, BLACK,
    GameRng, GameRngState,
    AgentError, BoardError, ConfigError, NotationError,
};

pub use crate::rules::{Game, Symmetries};

pub use crate::games::breakthrough::{ActionCodec, BreakthroughGame, Region, DEFAULT_SIZE};

pub use crate::agents::{Agent, HumanAgent, RandomAgent, format_move, parse_move};

pub use crate::arena::{Arena, ArenaConfig, ArenaStats, GameRecord};

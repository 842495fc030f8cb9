//! Game capability trait.
//!
//! Games implement `Game` to define:
//! - The starting position and action space
//! - Legal actions as a dense mask
//! - How actions produce new boards
//! - Terminal detection, perspective normalization and symmetries
//!
//! Consumers (agents, the arena, Python bindings) only ever call into
//! `Game` and never interpret game-specific board contents directly.

pub mod engine;

pub use engine::{Game, Symmetries};

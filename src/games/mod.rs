//! Game implementations.

pub mod breakthrough;

pub use breakthrough::BreakthroughGame;

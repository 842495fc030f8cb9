//! Move-selection agents.
//!
//! Agents sit outside the rules: they only see a board through the `Game`
//! contract and answer with an action index. Boards handed to an agent are
//! in canonical form, so an agent always chooses a move for White.
//!
//! - `RandomAgent`: uniform over legal actions, for any game
//! - `HumanAgent`: reads `a2a3` notation from a terminal, for Breakthrough

mod human;
mod notation;
mod random;

pub use human::HumanAgent;
pub use notation::{format_move, parse_move};
pub use random::RandomAgent;

use crate::core::{Action, AgentError};
use crate::rules::Game;

/// Chooses an action on a canonical board.
pub trait Agent<G: Game> {
    /// Pick an action for White on `board`.
    ///
    /// The returned action must be legal on `board`.
    fn play(&mut self, game: &G, board: &G::Board) -> Result<Action, AgentError>;
}

//! Uniform random move selection.

use log::debug;

use super::Agent;
use crate::core::{Action, AgentError, GameRng, GameRngState, Player};
use crate::rules::Game;

/// Picks uniformly among the legal actions.
///
/// Works for any `Game`; seeded for reproducible games.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create an agent drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Resume an agent saved with [`RandomAgent::rng_state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }

    /// Checkpoint of the agent's stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// A new agent on a forked stream, e.g. one per rollout worker.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::from_rng(self.rng.fork())
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn play(&mut self, game: &G, board: &G::Board) -> Result<Action, AgentError> {
        let legal = game.legal_actions(board, Player::White);
        let action = *self.rng.choose(&legal).ok_or(AgentError::NoLegalMoves)?;
        debug!("random agent picked {} of {} legal actions", action, legal.len());
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::games::BreakthroughGame;

    #[test]
    fn test_random_agent_picks_legal_action() {
        let game = BreakthroughGame::default();
        let board = game.init_board();
        let mask = game.valid_moves(&board, Player::White);

        let mut agent = RandomAgent::new(7);
        for _ in 0..50 {
            let action = agent.play(&game, &board).unwrap();
            assert!(mask[action.index()]);
        }
    }

    #[test]
    fn test_random_agent_is_deterministic() {
        let game = BreakthroughGame::default();
        let board = game.init_board();

        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);
        for _ in 0..20 {
            assert_eq!(a.play(&game, &board).unwrap(), b.play(&game, &board).unwrap());
        }
    }

    #[test]
    fn test_random_agent_resumes_from_checkpoint() {
        let game = BreakthroughGame::default();
        let board = game.init_board();

        let mut agent = RandomAgent::new(5);
        agent.play(&game, &board).unwrap();
        let mut resumed = RandomAgent::from_state(&agent.rng_state());

        for _ in 0..10 {
            assert_eq!(agent.play(&game, &board).unwrap(), resumed.play(&game, &board).unwrap());
        }
    }

    #[test]
    fn test_forked_agents_are_independent() {
        let game = BreakthroughGame::default();
        let board = game.init_board();

        let mut parent = RandomAgent::new(5);
        let mut a = parent.fork();
        let mut b = parent.fork();
        let picks = |agent: &mut RandomAgent| -> Vec<Action> {
            (0..20).map(|_| agent.play(&game, &board).unwrap()).collect()
        };
        assert_ne!(picks(&mut a), picks(&mut b));
    }

    #[test]
    fn test_random_agent_without_moves() {
        let game = BreakthroughGame::new(4).unwrap();
        let mut agent = RandomAgent::new(1);
        let err = agent.play(&game, &Board::new(4)).unwrap_err();
        assert!(matches!(err, AgentError::NoLegalMoves));
    }
}

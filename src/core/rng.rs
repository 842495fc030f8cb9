//! Seeded randomness for move-selection agents.
//!
//! A `GameRng` replays exactly from its seed, can be split into streams for
//! parallel rollout workers, and can be checkpointed mid-game so a saved
//! arena run continues with the same choices.
//!
//! ```
//! use breakthrough::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut worker = rng.fork();
//!
//! let legal = [3, 17, 40];
//! assert!(legal.contains(worker.choose(&legal).unwrap()));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Odd constant spreading fork seeds apart (2^64 / golden ratio).
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed so it can be forked and saved.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Split off a new stream. The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Position in the stream, for checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.forks,
        }
    }

    /// Resume a stream saved with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.fork_counter,
        }
    }
}

/// Saved position of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha word position.
    pub word_pos: u128,
    /// Forks taken so far, so later forks do not repeat earlier ones.
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(rng: &mut GameRng, count: usize) -> Vec<u32> {
        let actions: Vec<u32> = (0..154).collect();
        (0..count).map(|_| *rng.choose(&actions).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_picks() {
        assert_eq!(picks(&mut GameRng::new(42), 50), picks(&mut GameRng::new(42), 50));
    }

    #[test]
    fn test_forks_differ_from_parent_and_each_other() {
        let mut rng = GameRng::new(42);
        let mut first = rng.fork();
        let mut second = rng.fork();

        let parent = picks(&mut rng, 20);
        let a = picks(&mut first, 20);
        let b = picks(&mut second, 20);
        assert_ne!(parent, a);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fork_is_reproducible() {
        let mut one = GameRng::new(7);
        let mut two = GameRng::new(7);
        assert_eq!(picks(&mut one.fork(), 10), picks(&mut two.fork(), 10));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(1);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_resume_from_checkpoint() {
        let mut rng = GameRng::new(42);
        picks(&mut rng, 30);

        let saved = rng.state();
        let expected = picks(&mut rng, 10);
        assert_eq!(picks(&mut GameRng::from_state(&saved), 10), expected);
    }

    #[test]
    fn test_checkpoint_keeps_fork_count() {
        let mut rng = GameRng::new(5);
        let _ = rng.fork();

        let mut resumed = GameRng::from_state(&rng.state());
        assert_eq!(picks(&mut resumed.fork(), 10), picks(&mut rng.fork(), 10));
    }

    #[test]
    fn test_state_json() {
        let state = GameRng::new(3).state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

//! Uniform-random baseline agent.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::BoardError;
use crate::state::GameState;

use super::Agent;

/// An agent that picks uniformly at random among available moves.
///
/// Seeded for reproducibility: the same seed against the same sequence
/// of states always produces the same moves. Used as a baseline
/// opponent in tests and benchmarks.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Create a random agent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose_move(&mut self, state: &S) -> Result<Option<usize>, BoardError> {
        if state.is_game_over() || state.available_moves().is_empty() {
            return Ok(None);
        }

        // Sort so the choice depends only on the seed, not on set order.
        let mut moves: Vec<usize> = state.available_moves().iter().copied().collect();
        moves.sort_unstable();

        let pick = self.rng.gen_range(0..moves.len());
        Ok(Some(moves[pick]))
    }

    fn name(&self) -> &str {
        "Random"
    }
}

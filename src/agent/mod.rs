//! Agents that choose moves over the [`GameState`](crate::GameState) capability surface.
//!
//! ## Overview
//!
//! - [`MinimaxAgent`]: exact full-depth minimax with alpha-beta pruning.
//!   Deterministic and optimal; explores the game tree to termination.
//! - [`RandomAgent`]: uniform choice over available moves with a seeded
//!   RNG. Useful as a baseline opponent in tests and benchmarks.
//!
//! Both are generic over `GameState`, so they work with any board
//! geometry the search can afford to solve.
//!
//! ## Usage
//!
//! ```
//! use krow::{Agent, Board, MinimaxAgent};
//!
//! let board = Board::standard();
//! let mut agent = MinimaxAgent::new();
//!
//! if let Some(index) = agent.choose_move(&board)? {
//!     println!("best move: {index}");
//! }
//! println!("visited {} nodes", agent.stats().nodes_visited);
//! # Ok::<(), krow::BoardError>(())
//! ```

pub mod minimax;
pub mod random;
pub mod stats;

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use stats::SearchStats;

use crate::core::BoardError;
use crate::state::GameState;

/// A move-choosing strategy over a game state.
///
/// `choose_move` never mutates the live state it is given; lookahead
/// happens on clones. `Ok(None)` means there is no move to make: the
/// state is terminal (or has no available moves). Callers should check
/// `is_game_over` first rather than lean on the sentinel.
pub trait Agent<S: GameState> {
    /// Choose a move for the player whose turn it is.
    fn choose_move(&mut self, state: &S) -> Result<Option<usize>, BoardError>;

    /// Human-readable agent name for logs and test output.
    fn name(&self) -> &str;
}

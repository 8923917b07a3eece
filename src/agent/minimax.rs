//! Exact minimax search with alpha-beta pruning.
//!
//! The agent explores the game tree all the way to termination: no
//! depth limit, no heuristic evaluation, no transposition table. Each
//! branch clones the state and plays one move on the clone, so the live
//! board is never touched. Terminal positions score +10 for an `X` win,
//! -10 for an `O` win, and 0 for a draw; the score carries no depth
//! component, so a fast win and a slow win are interchangeable.
//!
//! `X` maximizes and `O` minimizes. Among equally-scored moves the
//! first one in ascending index order is kept, which makes the choice
//! deterministic even though the underlying available-move set is
//! unordered.

use smallvec::SmallVec;
use std::time::Instant;

use crate::core::{BoardError, Mark};
use crate::state::GameState;

use super::stats::SearchStats;
use super::Agent;

/// Score of a terminal position from `X`'s point of view.
const WIN_SCORE: i32 = 10;

/// Move buffer sized for a 4x4 board without spilling to the heap.
type MoveBuf = SmallVec<[usize; 16]>;

/// Full-depth minimax agent with alpha-beta pruning.
///
/// Stateless between searches apart from the statistics of the most
/// recent call, available through [`MinimaxAgent::stats`].
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    stats: SearchStats,
}

impl MinimaxAgent {
    /// Create a new minimax agent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Top-level search: like the recursion but tracks which move
    /// produced the best score, not just the score itself.
    fn best_move<S: GameState>(
        &mut self,
        state: &S,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<Option<usize>, BoardError> {
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for index in ordered_moves(state) {
            let mut child = state.clone();
            child.play(index)?;
            let score = self.minimax(&child, alpha, beta, !maximizing)?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best_move)
    }

    /// Recursive evaluation of a position, alternating the maximizing
    /// flag each ply until the game ends.
    fn minimax<S: GameState>(
        &mut self,
        state: &S,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, BoardError> {
        self.stats.nodes_visited += 1;

        if state.is_game_over() {
            self.stats.leaves_scored += 1;
            return score(state);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in ordered_moves(state) {
            let mut child = state.clone();
            child.play(index)?;
            let eval = self.minimax(&child, alpha, beta, !maximizing)?;

            if maximizing {
                best = best.max(eval);
                alpha = alpha.max(eval);
            } else {
                best = best.min(eval);
                beta = beta.min(eval);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    /// Choose the optimal move for the player whose turn it is.
    ///
    /// Returns `Ok(None)` if the state is already terminal or has no
    /// available moves.
    fn choose_move(&mut self, state: &S) -> Result<Option<usize>, BoardError> {
        let start = Instant::now();
        self.stats.reset();

        if state.is_game_over() || state.available_moves().is_empty() {
            return Ok(None);
        }

        let maximizing = state.turn() == Mark::X;
        let chosen = self.best_move(state, i32::MIN, i32::MAX, maximizing)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(chosen)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Available moves in ascending index order.
///
/// The board's set is unordered; sorting here is what makes the agent's
/// tie-breaking deterministic.
fn ordered_moves<S: GameState>(state: &S) -> MoveBuf {
    let mut moves: MoveBuf = state.available_moves().iter().copied().collect();
    moves.sort_unstable();
    moves
}

/// Terminal score from `X`'s point of view: +10 for an `X` win, -10 for
/// an `O` win, 0 for a draw.
fn score<S: GameState>(state: &S) -> Result<i32, BoardError> {
    Ok(match state.winner()? {
        Mark::X => WIN_SCORE,
        Mark::O => -WIN_SCORE,
        Mark::Blank => 0,
    })
}

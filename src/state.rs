//! The `GameState` capability trait.
//!
//! Agents depend on this trait, never on [`Board`] directly. The trait
//! names exactly the capabilities lookahead needs: move enumeration,
//! move application, terminality, winner, and whose turn it is.
//! Cloning (via the `Clone` supertrait) stands in for the lookahead
//! copy: search branches clone the state and mutate the copy.
//!
//! Alternative board geometries or representations can be substituted
//! under the search without touching the algorithm, as long as they
//! honor the same contract: rejection of occupied cells as a value,
//! misuse after game over as an error, and a winner that is only
//! defined once the game has ended.

use rustc_hash::FxHashSet;

use crate::board::{Board, MoveOutcome};
use crate::core::{BoardError, Mark};

/// Capability surface a board exposes to agents.
pub trait GameState: Clone {
    /// The player to move.
    fn turn(&self) -> Mark;

    /// Whether the game has ended in a win or a draw.
    fn is_game_over(&self) -> bool;

    /// The winning player (`Blank` for a draw).
    ///
    /// Fails with [`BoardError::NotOver`] before the game ends.
    fn winner(&self) -> Result<Mark, BoardError>;

    /// The set of still-empty cell indices. Iteration order is
    /// unspecified; callers needing determinism must sort.
    fn available_moves(&self) -> &FxHashSet<usize>;

    /// Place the current player's mark at a linear index.
    ///
    /// Occupied cells are reported as [`MoveOutcome::Rejected`];
    /// playing after game over fails with [`BoardError::GameOver`].
    fn play(&mut self, index: usize) -> Result<MoveOutcome, BoardError>;
}

impl GameState for Board {
    fn turn(&self) -> Mark {
        Board::turn(self)
    }

    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }

    fn winner(&self) -> Result<Mark, BoardError> {
        Board::winner(self)
    }

    fn available_moves(&self) -> &FxHashSet<usize> {
        Board::available_moves(self)
    }

    fn play(&mut self, index: usize) -> Result<MoveOutcome, BoardError> {
        Board::play(self, index)
    }
}

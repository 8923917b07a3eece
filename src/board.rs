//! The board state machine.
//!
//! [`Board`] owns the grid, the player to move, the move count, the set
//! of still-available cells, and the derived game-over/winner status.
//! It is mutated only through [`Board::play`] / [`Board::play_at`];
//! everything else is a query.
//!
//! ## Win detection
//!
//! After every accepted move the whole grid is rescanned: for each
//! non-blank cell, four directions (right, down, down-right, down-left)
//! are walked looking for `win_length` consecutive identical marks,
//! bounds-checked against the edges. This is O(rows * cols * K) per
//! move. At the board sizes exact search can handle, rescanning from
//! scratch is cheaper to maintain than incremental win tracking and
//! should be preserved as-is unless the board size changes materially.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::{BoardConfig, BoardError, Mark};

/// Scan directions as `(row step, col step)`: right, down, down-right,
/// down-left. Left/up runs are found from their other endpoint.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Outcome of a legal call to [`Board::play`].
///
/// Rejection is a value, not an error: a driver that offers an occupied
/// cell is expected to ask again with a different one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed to the opponent.
    Placed,
    /// The target cell was occupied (or out of range); nothing changed.
    Rejected,
}

impl MoveOutcome {
    /// Check whether the move was accepted.
    #[must_use]
    pub const fn is_placed(self) -> bool {
        matches!(self, MoveOutcome::Placed)
    }
}

/// A connect-K board.
///
/// Created empty with `X` to move. Cells are addressed by zero-based
/// row-major linear index (`row * cols + col`).
///
/// ## Example
///
/// ```
/// use krow::{Board, Mark, MoveOutcome};
///
/// let mut board = Board::standard();
/// assert_eq!(board.turn(), Mark::X);
///
/// let outcome = board.play(4)?; // X takes the center
/// assert_eq!(outcome, MoveOutcome::Placed);
/// assert_eq!(board.turn(), Mark::O);
/// # Ok::<(), krow::BoardError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Vec<Mark>,
    turn: Mark,
    winner: Mark,
    move_count: usize,
    available: FxHashSet<usize>,
    game_over: bool,
}

impl Board {
    /// Create an empty board with the given geometry.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let mut board = Self {
            config,
            grid: vec![Mark::Blank; config.cell_count()],
            turn: Mark::X,
            winner: Mark::Blank,
            move_count: 0,
            available: FxHashSet::default(),
            game_over: false,
        };
        board.reset();
        board
    }

    /// Create an empty classic 3x3 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BoardConfig::standard())
    }

    /// Restart the game in place: all cells blank, `X` to move, every
    /// cell available again.
    pub fn reset(&mut self) {
        self.grid.fill(Mark::Blank);
        self.turn = Mark::X;
        self.winner = Mark::Blank;
        self.move_count = 0;
        self.game_over = false;
        self.available.clear();
        self.available.extend(0..self.config.cell_count());
    }

    /// The board geometry.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Place the current player's mark at a linear index.
    ///
    /// Returns [`MoveOutcome::Rejected`] without mutating anything if
    /// the cell is occupied or the index is out of range. Fails with
    /// [`BoardError::GameOver`] if the game has already ended; callers
    /// must check [`Board::is_game_over`] first.
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, BoardError> {
        if self.game_over {
            return Err(BoardError::GameOver);
        }
        if index >= self.config.cell_count() || !self.grid[index].is_blank() {
            return Ok(MoveOutcome::Rejected);
        }

        self.grid[index] = self.turn;
        self.move_count += 1;
        self.available.remove(&index);

        self.winner = self.scan_winner();
        if !self.winner.is_blank() || self.move_count == self.config.cell_count() {
            self.game_over = true;
        }

        self.turn = self.turn.opponent();
        Ok(MoveOutcome::Placed)
    }

    /// Place the current player's mark at `(row, col)`.
    ///
    /// Same semantics as [`Board::play`] with `index = row * cols + col`.
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<MoveOutcome, BoardError> {
        if row >= self.config.rows() || col >= self.config.cols() {
            if self.game_over {
                return Err(BoardError::GameOver);
            }
            return Ok(MoveOutcome::Rejected);
        }
        self.play(self.config.index_of(row, col))
    }

    /// Whether the game has ended in a win or a draw.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player to move.
    ///
    /// Stable once the game is over (it names whoever would have moved
    /// next), though terminal boards accept no further moves.
    #[must_use]
    pub const fn turn(&self) -> Mark {
        self.turn
    }

    /// The winning player, or `Blank` for a draw.
    ///
    /// Fails with [`BoardError::NotOver`] while the game is still in
    /// progress; the winner is undefined before terminality.
    pub fn winner(&self) -> Result<Mark, BoardError> {
        if !self.game_over {
            return Err(BoardError::NotOver);
        }
        Ok(self.winner)
    }

    /// The set of still-empty cell indices.
    ///
    /// This is a set, not a sequence: callers must not assume any
    /// particular iteration order.
    #[must_use]
    pub const fn available_moves(&self) -> &FxHashSet<usize> {
        &self.available
    }

    /// Number of marks placed so far.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    /// Whether the cell at a linear index is still blank.
    #[must_use]
    pub fn is_blank(&self, index: usize) -> bool {
        self.grid[index].is_blank()
    }

    /// The mark at `(row, col)`.
    #[must_use]
    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.grid[self.config.index_of(row, col)]
    }

    /// One successor board per available move, produced by cloning the
    /// receiver and applying that single move.
    ///
    /// Terminal boards have no successors. Intended for generic
    /// tree-walkers; the minimax agent clones and plays inline instead.
    #[must_use]
    pub fn children(&self) -> Vec<Board> {
        if self.game_over {
            return Vec::new();
        }
        self.available
            .iter()
            .map(|&index| {
                let mut child = self.clone();
                child
                    .play(index)
                    .expect("successor move on a non-terminal board");
                child
            })
            .collect()
    }

    /// Scan the whole grid for a completed run of `win_length` marks.
    ///
    /// Row-major over cells, then [`DIRECTIONS`] in order; returns the
    /// owner of the first run found, or `Blank`. In a legal game at most
    /// one player can have a completed run.
    fn scan_winner(&self) -> Mark {
        for row in 0..self.config.rows() {
            for col in 0..self.config.cols() {
                let mark = self.grid[self.config.index_of(row, col)];
                if mark.is_blank() {
                    continue;
                }
                for (row_step, col_step) in DIRECTIONS {
                    if self.run_complete(row, col, row_step, col_step, mark) {
                        return mark;
                    }
                }
            }
        }
        Mark::Blank
    }

    /// Whether `win_length` consecutive cells starting at `(row, col)`
    /// and stepping by `(row_step, col_step)` all carry `mark`.
    fn run_complete(
        &self,
        row: usize,
        col: usize,
        row_step: isize,
        col_step: isize,
        mark: Mark,
    ) -> bool {
        for i in 0..self.config.win_length() as isize {
            let r = row as isize + i * row_step;
            let c = col as isize + i * col_step;
            if !self.config.in_bounds(r, c) {
                return false;
            }
            if self.grid[self.config.index_of(r as usize, c as usize)] != mark {
                return false;
            }
        }
        true
    }
}

/// Boards compare by cell contents only: two boards with identical marks
/// reached along different move orders are equal. Turn, winner, and move
/// count are derived from play history and deliberately excluded.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.hash(state);
        self.grid.hash(state);
    }
}

/// Stable debug rendering: rows separated by newlines, every cell
/// followed by a space, blanks as `-`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.config.rows() {
            for col in 0..self.config.cols() {
                write!(f, "{} ", self.mark_at(row, col))?;
            }
            if row != self.config.rows() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

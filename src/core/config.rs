//! Board geometry configuration.
//!
//! A [`BoardConfig`] fixes the grid dimensions and the win length for
//! the lifetime of a board. Cells are addressed by a zero-based linear
//! index in row-major order: `index = row * cols + col`.

use serde::{Deserialize, Serialize};

/// Grid dimensions and win length for a connect-K board.
///
/// ## Example
///
/// ```
/// use krow::BoardConfig;
///
/// let config = BoardConfig::standard(); // classic 3x3, three in a row
/// assert_eq!(config.cell_count(), 9);
/// assert_eq!(config.index_of(1, 2), 5);
/// assert_eq!(config.coords_of(5), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl BoardConfig {
    /// Create a geometry with `rows` x `cols` cells and a win length of
    /// `win_length` consecutive marks.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if `win_length` is zero or
    /// longer than both dimensions (such a game could never be won).
    #[must_use]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        assert!(win_length > 0, "Win length must be at least 1");
        assert!(
            win_length <= rows.max(cols),
            "Win length cannot exceed the longer board dimension"
        );
        Self {
            rows,
            cols,
            win_length,
        }
    }

    /// The classic 3x3 board with three in a row to win.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_length: 3,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Consecutive marks needed to win.
    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Linear index of the cell at `(row, col)`.
    #[must_use]
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` coordinates of a linear index.
    #[must_use]
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Whether signed coordinates fall inside the grid.
    ///
    /// Takes signed values so win-scan walks can step off either edge
    /// without underflow.
    #[must_use]
    pub const fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

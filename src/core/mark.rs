//! Cell marks and player identity.
//!
//! A [`Mark`] does double duty: it is the content of a grid cell
//! (`Blank` or a player's mark) and the identity of a player
//! (`X` or `O`). `X` always moves first.

use serde::{Deserialize, Serialize};

/// The content of a cell, and the identity of a player.
///
/// `Blank` is never a player; it appears as a cell state and as the
/// "no winner" value for drawn or undecided games.
///
/// ## Example
///
/// ```
/// use krow::Mark;
///
/// assert_eq!(Mark::X.opponent(), Mark::O);
/// assert_eq!(Mark::O.opponent(), Mark::X);
/// assert!(Mark::Blank.is_blank());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// An empty cell, or "no winner".
    #[default]
    Blank,
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Mark {
    /// The opposing player's mark.
    ///
    /// `Blank` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Blank => Mark::Blank,
        }
    }

    /// Check whether this is the blank mark.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Mark::Blank)
    }

    /// Single-character rendering: `-`, `X`, or `O`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Mark::Blank => '-',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//! Error taxonomy for board misuse.
//!
//! Both variants signal a collaborator bug, not a game event: drivers
//! are expected to consult `is_game_over` before moving or asking for
//! the winner. Playing an *occupied* cell is deliberately not an error;
//! that is an expected, recoverable outcome reported as a value
//! (see `MoveOutcome`).

/// Fatal misuse of the board's capability surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A move was attempted after the game ended.
    #[error("game is over: no more moves can be played")]
    GameOver,

    /// The winner was requested before the game ended.
    #[error("game is not over yet: the winner is undefined")]
    NotOver,
}

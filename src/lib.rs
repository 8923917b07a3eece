//! # krow
//!
//! A generalized N×M connect-K board engine (tic-tac-toe and friends)
//! with an exact minimax agent.
//!
//! ## Design Principles
//!
//! 1. **Geometry-Agnostic**: Board dimensions and the win length are
//!    configured at construction via [`BoardConfig`], not hardcoded.
//!
//! 2. **Capability Trait at the Seam**: Agents depend on the small
//!    [`GameState`] trait, never on [`Board`] directly, so alternative
//!    board implementations can be substituted without touching search.
//!
//! 3. **Clone-Based Lookahead**: Search branches clone the state instead
//!    of mutating and undoing. Each branch owns its copy, so there is no
//!    shared mutable state anywhere in the search.
//!
//! ## Architecture
//!
//! - **Exact Search**: The minimax agent explores the game tree to
//!   termination with alpha-beta pruning. No heuristic evaluation and no
//!   depth limit; suitable only for boards small enough to solve.
//!
//! - **Rejection as a Value**: Playing an occupied cell is an expected,
//!   recoverable outcome ([`MoveOutcome::Rejected`]), not an error.
//!   Playing after the game has ended is collaborator misuse and is
//!   reported as [`BoardError::GameOver`].
//!
//! ## Modules
//!
//! - `core`: Cell marks, board geometry, error taxonomy
//! - `board`: The board state machine with win/draw detection
//! - `state`: The `GameState` capability trait shared with agents
//! - `agent`: Minimax and random agents plus search statistics

pub mod agent;
pub mod board;
pub mod core;
pub mod state;

// Re-export commonly used types
pub use crate::core::{BoardConfig, BoardError, Mark};

pub use crate::board::{Board, MoveOutcome};

pub use crate::state::GameState;

pub use crate::agent::{Agent, MinimaxAgent, RandomAgent, SearchStats};

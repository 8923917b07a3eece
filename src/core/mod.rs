//! Core engine types: cell marks, board geometry, error taxonomy.
//!
//! This module contains the fundamental building blocks shared by the
//! board state machine and the agents. Nothing here depends on a
//! particular board implementation.

pub mod config;
pub mod error;
pub mod mark;

pub use config::BoardConfig;
pub use error::BoardError;
pub use mark::Mark;

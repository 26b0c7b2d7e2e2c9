//! Rules a move library can break.

use thiserror::Error;

/// A single problem found in a list of move definitions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LibraryViolation {
    #[error("Move at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Move '{id}' has an empty name")]
    EmptyName { id: String },

    #[error("Move id '{id}' is defined more than once")]
    DuplicateId { id: String },
}

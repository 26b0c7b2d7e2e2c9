//! Move library error types.

use crate::library::violations::LibraryViolation;
use thiserror::Error;

/// Lookup of a move id that is not in the library.
///
/// Raised by `resolve`; never replaced by a default move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid move: '{id}' is not in the move library")]
pub struct InvalidMoveError {
    /// The id that was asked for
    pub id: String,
}

/// Errors that can occur while loading a move library
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Move data was not valid JSON or held out-of-domain values
    #[error("Move data could not be parsed: {0}")]
    Parse(String),

    /// One or more definitions broke a library rule
    #[error(
        "Move library failed validation with {} violation(s): {}",
        .violations.len(),
        summarize(.violations)
    )]
    Invalid { violations: Vec<LibraryViolation> },
}

fn summarize(violations: &[LibraryViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

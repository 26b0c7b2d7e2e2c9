//! Build errors for move and library builders.

use thiserror::Error;

/// Errors that can occur when building move definitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Move '{id}' has no name. Call .name(name) before .build()")]
    MissingName { id: String },

    #[error("Move '{id}' has no entry state. Call .entry(state) before .build()")]
    MissingEntry { id: String },

    #[error("Move '{id}' has no exit point. Call .exit_point(point) before .build()")]
    MissingExitPoint { id: String },
}

//! Errors raised while reading state values from text.

use thiserror::Error;

/// A label that names no value of the expected dimension.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {kind}: '{value}'")]
pub struct ParseDimensionError {
    /// Dimension being parsed, e.g. `"edge"`
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

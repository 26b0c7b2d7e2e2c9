//! Builder API for ergonomic move and library construction.
//!
//! This module provides fluent builders for assembling move definitions and
//! libraries in code, next to the JSON loader used for the built-in table.

pub mod error;
pub mod library;
pub mod moves;

pub use error::BuildError;
pub use library::LibraryBuilder;
pub use moves::MoveBuilder;

use crate::core::PhysicalState;
use crate::library::MoveDefinition;

/// Create a move that leaves the skater exactly as it found them.
///
/// # Example
///
/// ```
/// use wzrdbrain::builder::simple_move;
/// use wzrdbrain::core::{Direction, Edge, PhysicalState, Point, Stance};
///
/// let entry = PhysicalState::new(Direction::Front, Edge::Outside, Stance::Open, Point::All);
/// let def = simple_move("glide", "Glide", entry);
/// assert_eq!(def.exit.resolve(&def.entry), entry);
/// ```
pub fn simple_move(id: &str, name: &str, entry: PhysicalState) -> MoveDefinition {
    MoveBuilder::new(id)
        .name(name)
        .entry(entry)
        .exit_point(entry.point)
        .build()
        .expect("Simple move should always build")
}

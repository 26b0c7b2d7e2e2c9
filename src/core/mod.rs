//! Core state model for the trick engine.
//!
//! This module contains the pure building blocks every other layer uses:
//! - Physical state dimensions via the `Dimension` trait
//! - Exit values relative to entry via `Relative`
//! - Guard predicates deciding which entry states may follow an exit
//!
//! Everything here is plain data and pure functions.

#[macro_use]
mod macros;

mod error;
mod guard;
mod relative;
mod state;

pub use error::ParseDimensionError;
pub use guard::Guard;
pub use relative::{resolve_relative, Relative};
pub use state::{Dimension, Direction, Edge, Node, PhysicalState, Point, Stance};

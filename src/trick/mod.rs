//! Trick resolution.
//!
//! A `Trick` is one move with its exit state made absolute. Tricks are plain
//! values: they copy what they need from the definition and keep no link
//! back to the library.

use crate::core::{Direction, Edge, Node, PhysicalState, Point, Stance};
use crate::library::{InvalidMoveError, MoveDefinition, MoveLibrary};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A resolved move with absolute entry and exit state.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::core::{Direction, Edge, Point, Stance};
///
/// let trick = wzrdbrain::resolve("gazelle_f_o").unwrap();
/// assert_eq!(trick.entry().direction, Direction::Front);
/// assert_eq!(trick.exit_direction(), Direction::Back);
/// assert_eq!(trick.exit_edge(), Edge::Outside);
/// assert_eq!(trick.exit_stance(), Stance::Open);
/// assert_eq!(trick.exit_point(), Point::Toe);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trick {
    id: String,
    name: String,
    category: String,
    stage: u32,
    entry: PhysicalState,
    exit: PhysicalState,
}

impl Trick {
    /// Resolve a definition: entry is copied, exit is computed (pure).
    pub fn from_definition(def: &MoveDefinition) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            category: def.category.clone(),
            stage: def.stage,
            entry: def.entry,
            exit: def.exit.resolve(&def.entry),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn entry(&self) -> &PhysicalState {
        &self.entry
    }

    pub fn exit(&self) -> &PhysicalState {
        &self.exit
    }

    pub fn exit_direction(&self) -> Direction {
        self.exit.direction
    }

    pub fn exit_edge(&self) -> Edge {
        self.exit.edge
    }

    pub fn exit_stance(&self) -> Stance {
        self.exit.stance
    }

    pub fn exit_point(&self) -> Point {
        self.exit.point
    }

    /// Node the next trick has to start from.
    pub fn exit_node(&self) -> Node {
        self.exit.node()
    }

    /// Check whether `next` can be performed straight after this trick.
    pub fn chains_into(&self, next: &Trick) -> bool {
        next.entry.node() == self.exit_node()
    }

    /// Serializable snapshot of this trick.
    pub fn view(&self) -> TrickView {
        TrickView::from(self)
    }
}

impl Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The externally observable shape of a trick.
///
/// Field names and nesting are the serialization contract shared with every
/// consumer of generated combos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stage: u32,
    pub entry: PhysicalState,
    pub exit: PhysicalState,
}

impl From<&Trick> for TrickView {
    fn from(trick: &Trick) -> Self {
        Self {
            id: trick.id.clone(),
            name: trick.name.clone(),
            category: trick.category.clone(),
            stage: trick.stage,
            entry: trick.entry,
            exit: trick.exit,
        }
    }
}

impl From<Trick> for TrickView {
    fn from(trick: Trick) -> Self {
        Self {
            id: trick.id,
            name: trick.name,
            category: trick.category,
            stage: trick.stage,
            entry: trick.entry,
            exit: trick.exit,
        }
    }
}

/// Resolve a move id against the built-in library.
pub fn resolve(move_id: &str) -> Result<Trick, InvalidMoveError> {
    MoveLibrary::builtin().resolve(move_id)
}

//! The move catalog.
//!
//! A `MoveLibrary` is built once from a list of `MoveDefinition`s, validated,
//! and never mutated afterwards. The built-in catalog ships as embedded JSON
//! and is parsed on first use.

use crate::core::{Dimension, Direction, Edge, Node, PhysicalState, Point, Relative, Stance};
use crate::trick::Trick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;
pub mod validation;
pub mod violations;

pub use error::{InvalidMoveError, LibraryError};
pub use validation::validate;
pub use violations::LibraryViolation;

/// Highest stage allowed when the caller does not say otherwise.
pub const DEFAULT_MAX_STAGE: u32 = 5;

const BUILTIN_MOVES: &str = include_str!("../../data/moves.json");

static BUILTIN: Lazy<MoveLibrary> = Lazy::new(|| {
    MoveLibrary::from_json(BUILTIN_MOVES).expect("Built-in move table should always load")
});

/// Exit state of a move, relative to its entry where allowed.
///
/// Weight point is always absolute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExitSpec {
    pub direction: Relative<Direction>,
    pub edge: Relative<Edge>,
    pub stance: Relative<Stance>,
    pub point: Point,
}

impl ExitSpec {
    /// Resolve every relative value against an entry state (pure).
    pub fn resolve(&self, entry: &PhysicalState) -> PhysicalState {
        PhysicalState {
            direction: self.direction.resolve(entry.direction),
            edge: self.edge.resolve(entry.edge),
            stance: self.stance.resolve(entry.stance),
            point: self.point,
        }
    }
}

/// One entry of the move catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Unique key
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form classification, e.g. "pivot"
    pub category: String,
    /// Skill tier; lower is more basic
    pub stage: u32,
    /// Absolute state required to begin the move
    pub entry: PhysicalState,
    /// State after the move
    pub exit: ExitSpec,
}

impl MoveDefinition {
    /// Graph node this move starts from.
    pub fn entry_node(&self) -> Node {
        self.entry.node()
    }

    /// Graph node this move ends on.
    pub fn exit_node(&self) -> Node {
        self.exit.resolve(&self.entry).node()
    }
}

/// Immutable catalog of moves keyed by id.
///
/// Definitions keep their declaration order so that a seeded chooser
/// produces the same picks on every run.
#[derive(Clone, Debug)]
pub struct MoveLibrary {
    moves: Vec<MoveDefinition>,
    index: HashMap<String, usize>,
}

impl MoveLibrary {
    /// Build a library, validating every definition first.
    ///
    /// All violations are reported together.
    pub fn new(moves: Vec<MoveDefinition>) -> Result<Self, LibraryError> {
        validation::check(&moves)?;

        for def in &moves {
            let flips = [
                ("edge", def.exit.edge == Relative::Opposite && !def.entry.edge.has_polarity()),
                (
                    "stance",
                    def.exit.stance == Relative::Opposite && !def.entry.stance.has_polarity(),
                ),
            ];
            for (dimension, no_op) in flips {
                if no_op {
                    tracing::debug!(
                        id = %def.id,
                        dimension,
                        "opposite exit keeps entry value; entry has no polarity"
                    );
                }
            }
        }

        let index = moves
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id.clone(), i))
            .collect();

        Ok(Self { moves, index })
    }

    /// Parse and validate a JSON array of move definitions.
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let moves: Vec<MoveDefinition> =
            serde_json::from_str(json).map_err(|e| LibraryError::Parse(e.to_string()))?;
        Self::new(moves)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static MoveLibrary {
        &BUILTIN
    }

    /// Look a definition up by exact id.
    pub fn get(&self, id: &str) -> Result<&MoveDefinition, InvalidMoveError> {
        self.index
            .get(id)
            .map(|&i| &self.moves[i])
            .ok_or_else(|| InvalidMoveError { id: id.to_string() })
    }

    /// Resolve a move id into a trick with absolute entry and exit state.
    pub fn resolve(&self, id: &str) -> Result<Trick, InvalidMoveError> {
        self.get(id).map(Trick::from_definition)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All definitions in declaration order.
    pub fn moves(&self) -> &[MoveDefinition] {
        &self.moves
    }

    /// Definitions at or below a stage, in declaration order.
    pub fn eligible(&self, max_stage: u32) -> impl Iterator<Item = &MoveDefinition> + '_ {
        self.moves.iter().filter(move |def| def.stage <= max_stage)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

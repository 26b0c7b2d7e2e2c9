//! Builder for assembling move libraries.

use crate::builder::error::BuildError;
use crate::builder::moves::MoveBuilder;
use crate::library::{LibraryError, MoveDefinition, MoveLibrary};

/// Builder for move libraries with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct LibraryBuilder {
    moves: Vec<MoveDefinition>,
}

impl LibraryBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Add a finished definition.
    pub fn add(mut self, def: MoveDefinition) -> Self {
        self.moves.push(def);
        self
    }

    /// Add a definition from a move builder.
    /// Returns an error if the builder fails validation.
    pub fn add_move(mut self, builder: MoveBuilder) -> Result<Self, BuildError> {
        self.moves.push(builder.build()?);
        Ok(self)
    }

    /// Add multiple definitions at once.
    pub fn moves(mut self, moves: impl IntoIterator<Item = MoveDefinition>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Build the library, running every library rule.
    pub fn build(self) -> Result<MoveLibrary, LibraryError> {
        MoveLibrary::new(self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::simple_move;
    use crate::core::{Direction, Edge, PhysicalState, Point, Stance};
    use crate::library::LibraryViolation;

    fn entry() -> PhysicalState {
        PhysicalState::new(Direction::Back, Edge::Outside, Stance::Closed, Point::All)
    }

    #[test]
    fn builder_collects_moves() {
        let library = LibraryBuilder::new()
            .add(simple_move("a", "A", entry()))
            .moves(vec![simple_move("b", "B", entry()), simple_move("c", "C", entry())])
            .build()
            .unwrap();

        assert_eq!(library.len(), 3);
        assert!(library.contains("b"));
    }

    #[test]
    fn add_move_propagates_build_errors() {
        let result = LibraryBuilder::new().add_move(MoveBuilder::new("x"));
        assert!(matches!(result, Err(BuildError::MissingName { .. })));
    }

    #[test]
    fn build_rejects_duplicates() {
        let result = LibraryBuilder::new()
            .add(simple_move("a", "A", entry()))
            .add(simple_move("a", "A", entry()))
            .build();

        match result {
            Err(LibraryError::Invalid { violations }) => {
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, LibraryViolation::DuplicateId { .. })));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}

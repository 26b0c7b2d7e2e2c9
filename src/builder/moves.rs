//! Builder for constructing move definitions.

use crate::builder::error::BuildError;
use crate::core::{Direction, Edge, PhysicalState, Point, Relative, Stance};
use crate::library::{ExitSpec, MoveDefinition};

/// Builder for move definitions with a fluent API.
///
/// Relative exit values default to `Same`; category defaults to `"trick"`
/// and stage to 1.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::builder::MoveBuilder;
/// use wzrdbrain::core::{Direction, Edge, PhysicalState, Point, Relative, Stance};
///
/// let def = MoveBuilder::new("heel_pivot")
///     .name("Heel Pivot")
///     .category("pivot")
///     .entry(PhysicalState::new(Direction::Front, Edge::Center, Stance::Neutral, Point::Heel))
///     .exit_direction(Relative::Opposite)
///     .exit_point(Point::Heel)
///     .build()
///     .unwrap();
///
/// assert_eq!(def.stage, 1);
/// assert_eq!(def.exit.edge, Relative::Same);
/// ```
#[derive(Clone, Debug)]
pub struct MoveBuilder {
    id: String,
    name: Option<String>,
    category: Option<String>,
    stage: Option<u32>,
    entry: Option<PhysicalState>,
    exit_direction: Relative<Direction>,
    exit_edge: Relative<Edge>,
    exit_stance: Relative<Stance>,
    exit_point: Option<Point>,
}

impl MoveBuilder {
    /// Start a definition with its id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            stage: None,
            entry: None,
            exit_direction: Relative::Same,
            exit_edge: Relative::Same,
            exit_stance: Relative::Same,
            exit_point: None,
        }
    }

    /// Set the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn stage(mut self, stage: u32) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Set the entry state (required).
    pub fn entry(mut self, entry: PhysicalState) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Accepts `Relative` or a plain `Direction` (taken as fixed).
    pub fn exit_direction(mut self, value: impl Into<Relative<Direction>>) -> Self {
        self.exit_direction = value.into();
        self
    }

    pub fn exit_edge(mut self, value: impl Into<Relative<Edge>>) -> Self {
        self.exit_edge = value.into();
        self
    }

    pub fn exit_stance(mut self, value: impl Into<Relative<Stance>>) -> Self {
        self.exit_stance = value.into();
        self
    }

    /// Set the exit weight point (required, always absolute).
    pub fn exit_point(mut self, point: Point) -> Self {
        self.exit_point = Some(point);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MoveDefinition, BuildError> {
        let name = self
            .name
            .ok_or_else(|| BuildError::MissingName { id: self.id.clone() })?;
        let entry = self
            .entry
            .ok_or_else(|| BuildError::MissingEntry { id: self.id.clone() })?;
        let point = self
            .exit_point
            .ok_or_else(|| BuildError::MissingExitPoint { id: self.id.clone() })?;

        Ok(MoveDefinition {
            id: self.id,
            name,
            category: self.category.unwrap_or_else(|| "trick".to_string()),
            stage: self.stage.unwrap_or(1),
            entry,
            exit: ExitSpec {
                direction: self.exit_direction,
                edge: self.exit_edge,
                stance: self.exit_stance,
                point,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> PhysicalState {
        PhysicalState::new(Direction::Front, Edge::Inside, Stance::Open, Point::Heel)
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MoveBuilder::new("m").build();
        assert_eq!(
            result,
            Err(BuildError::MissingName {
                id: "m".to_string()
            })
        );

        let result = MoveBuilder::new("m").name("M").build();
        assert!(matches!(result, Err(BuildError::MissingEntry { .. })));

        let result = MoveBuilder::new("m").name("M").entry(entry()).build();
        assert!(matches!(result, Err(BuildError::MissingExitPoint { .. })));
    }

    #[test]
    fn fluent_api_builds_definition() {
        let def = MoveBuilder::new("gazelle_f_o")
            .name("Front Gazelle (Open)")
            .category("transition")
            .stage(2)
            .entry(entry())
            .exit_direction(Relative::Opposite)
            .exit_edge(Relative::Opposite)
            .exit_point(Point::Toe)
            .build()
            .unwrap();

        assert_eq!(def.id, "gazelle_f_o");
        assert_eq!(def.stage, 2);
        assert_eq!(def.exit.stance, Relative::Same);
        assert_eq!(
            def.exit.resolve(&def.entry),
            PhysicalState::new(Direction::Back, Edge::Outside, Stance::Open, Point::Toe)
        );
    }

    #[test]
    fn plain_values_become_fixed() {
        let def = MoveBuilder::new("m")
            .name("M")
            .entry(entry())
            .exit_stance(Stance::Closed)
            .exit_point(Point::All)
            .build()
            .unwrap();

        assert_eq!(def.exit.stance, Relative::Fixed(Stance::Closed));
        assert_eq!(def.category, "trick");
    }
}

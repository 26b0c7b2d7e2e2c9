//! Physical state dimensions and the absolute state tuple.
//!
//! A skater's body configuration is described by four small enumerated
//! dimensions. Moves declare the state they require on entry and the state
//! they leave behind on exit.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for one enumerated dimension of physical state.
///
/// All methods are pure. Dimensions are small `Copy` values with a fixed
/// lowercase label used both for display and for serialization.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::core::{Dimension, Direction, Edge};
///
/// assert_eq!(Direction::Front.opposite(), Some(Direction::Back));
/// assert_eq!(Edge::Center.opposite(), None);
/// assert_eq!(Direction::parse("back"), Some(Direction::Back));
/// ```
pub trait Dimension:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// Name of the dimension itself, e.g. `"direction"`.
    const KIND: &'static str;

    /// Every value of the dimension in declaration order.
    const ALL: &'static [Self];

    /// Lowercase label of this value.
    fn name(&self) -> &'static str;

    /// The paired opposite of this value, if the dimension defines one.
    ///
    /// Default implementation returns `None`.
    fn opposite(&self) -> Option<Self> {
        None
    }

    /// Check whether this value has a defined opposite.
    fn has_polarity(&self) -> bool {
        self.opposite().is_some()
    }

    /// Look a value up by its exact label. No case folding.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == value)
    }
}

dimension_enum! {
    /// Direction of travel relative to the skater's facing.
    pub enum Direction: "direction" {
        Front => "front",
        Back => "back",
    }
    opposite: [(Front, Back)]
}

dimension_enum! {
    /// Which edge of the skate carries the turn.
    pub enum Edge: "edge" {
        Inside => "inside",
        Outside => "outside",
        Center => "center",
    }
    opposite: [(Inside, Outside)]
}

dimension_enum! {
    /// Hip orientation relative to the line of travel.
    pub enum Stance: "stance" {
        Open => "open",
        Closed => "closed",
        Neutral => "neutral",
    }
    opposite: [(Open, Closed)]
}

dimension_enum! {
    /// Where the weight sits on the foot.
    pub enum Point: "point" {
        Toe => "toe",
        Heel => "heel",
        All => "all",
    }
}

/// Absolute physical state: one value per dimension.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PhysicalState {
    pub direction: Direction,
    pub edge: Edge,
    pub stance: Stance,
    pub point: Point,
}

impl PhysicalState {
    pub fn new(direction: Direction, edge: Edge, stance: Stance, point: Point) -> Self {
        Self {
            direction,
            edge,
            stance,
            point,
        }
    }

    /// The part of the state that gates chaining.
    pub fn node(&self) -> Node {
        Node {
            direction: self.direction,
            point: self.point,
        }
    }
}

impl Display for PhysicalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.direction, self.edge, self.stance, self.point
        )
    }
}

/// A node of the transition graph.
///
/// Only direction and weight point decide whether one move can follow
/// another; edge and stance are carried but never compared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Node {
    pub direction: Direction,
    pub point: Point,
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.direction, self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs_are_fixed() {
        assert_eq!(Direction::Front.opposite(), Some(Direction::Back));
        assert_eq!(Direction::Back.opposite(), Some(Direction::Front));
        assert_eq!(Edge::Inside.opposite(), Some(Edge::Outside));
        assert_eq!(Edge::Outside.opposite(), Some(Edge::Inside));
        assert_eq!(Stance::Open.opposite(), Some(Stance::Closed));
        assert_eq!(Stance::Closed.opposite(), Some(Stance::Open));
    }

    #[test]
    fn center_and_neutral_have_no_polarity() {
        assert!(!Edge::Center.has_polarity());
        assert!(!Stance::Neutral.has_polarity());
        for point in Point::ALL {
            assert!(!point.has_polarity());
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Edge::parse("inside"), Some(Edge::Inside));
        assert_eq!(Edge::parse("Inside"), None);
        assert_eq!(Point::parse("all"), Some(Point::All));
        assert!("toes".parse::<Point>().is_err());
    }

    #[test]
    fn node_drops_edge_and_stance() {
        let a = PhysicalState::new(Direction::Front, Edge::Inside, Stance::Open, Point::Heel);
        let b = PhysicalState::new(Direction::Front, Edge::Outside, Stance::Closed, Point::Heel);
        assert_ne!(a, b);
        assert_eq!(a.node(), b.node());
    }

    #[test]
    fn state_serializes_with_lowercase_labels() {
        let state = PhysicalState::new(Direction::Back, Edge::Center, Stance::Neutral, Point::All);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "direction": "back",
                "edge": "center",
                "stance": "neutral",
                "point": "all",
            })
        );
        let back: PhysicalState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn display_is_readable() {
        let state = PhysicalState::new(Direction::Front, Edge::Inside, Stance::Open, Point::Heel);
        assert_eq!(state.to_string(), "front inside open heel");
        assert_eq!(state.node().to_string(), "front/heel");
    }
}

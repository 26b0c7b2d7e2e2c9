//! Guard predicates for chaining moves.
//!
//! Guards are pure boolean functions over a move's entry state. The combo
//! generator builds one from the previous trick's exit and keeps only the
//! moves it accepts.

use super::state::{Node, PhysicalState};

/// Pure predicate that decides whether a move may be entered.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::core::{Direction, Edge, Guard, Node, PhysicalState, Point, Stance};
///
/// let guard = Guard::chains_from(Node {
///     direction: Direction::Back,
///     point: Point::Toe,
/// });
///
/// let entry = PhysicalState::new(Direction::Back, Edge::Center, Stance::Neutral, Point::Toe);
/// assert!(guard.check(&entry));
///
/// let entry = PhysicalState::new(Direction::Front, Edge::Center, Stance::Neutral, Point::Toe);
/// assert!(!guard.check(&entry));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&PhysicalState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&PhysicalState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts every entry state.
    pub fn any() -> Self {
        Guard::new(|_| true)
    }

    /// Guard accepting entries that match an exit node.
    ///
    /// Direction and point must both match. Edge and stance are ignored.
    pub fn chains_from(exit: Node) -> Self {
        Guard::new(move |entry: &PhysicalState| entry.node() == exit)
    }

    /// Check whether the guard admits this entry state.
    pub fn check(&self, entry: &PhysicalState) -> bool {
        (self.predicate)(entry)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimension, Direction, Edge, Point, Stance};

    fn state(direction: Direction, edge: Edge, stance: Stance, point: Point) -> PhysicalState {
        PhysicalState::new(direction, edge, stance, point)
    }

    #[test]
    fn chains_from_requires_direction_and_point() {
        let guard = Guard::chains_from(Node {
            direction: Direction::Front,
            point: Point::Heel,
        });

        assert!(guard.check(&state(Direction::Front, Edge::Inside, Stance::Open, Point::Heel)));
        assert!(!guard.check(&state(Direction::Back, Edge::Inside, Stance::Open, Point::Heel)));
        assert!(!guard.check(&state(Direction::Front, Edge::Inside, Stance::Open, Point::Toe)));
    }

    #[test]
    fn chains_from_ignores_edge_and_stance() {
        let guard = Guard::chains_from(Node {
            direction: Direction::Back,
            point: Point::All,
        });

        for edge in Edge::ALL {
            for stance in Stance::ALL {
                assert!(guard.check(&state(Direction::Back, *edge, *stance, Point::All)));
            }
        }
    }

    #[test]
    fn any_accepts_everything() {
        let guard = Guard::any();
        assert!(guard.check(&state(Direction::Back, Edge::Center, Stance::Neutral, Point::Toe)));
    }

    #[test]
    fn guard_is_deterministic() {
        let entry = state(Direction::Front, Edge::Outside, Stance::Closed, Point::All);
        let guard = Guard::new(|s: &PhysicalState| s.stance == Stance::Closed);

        assert_eq!(guard.check(&entry), guard.check(&entry));
        assert!(guard.check(&entry));
    }
}

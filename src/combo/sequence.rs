//! The ordered result of one generation run.

use crate::core::Node;
use crate::trick::{Trick, TrickView};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One step of the walk: the move taken and the nodes it connects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Node the move was entered from
    pub from: Node,
    /// Node the move left the skater on
    pub to: Node,
    /// Id of the move
    pub move_id: String,
}

/// Ordered sequence of resolved tricks.
///
/// Built once by the generator and read-only afterwards. The combo remembers
/// the length it was aiming for, whether asked for or drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combo {
    tricks: Vec<Trick>,
    target: usize,
}

impl Combo {
    pub fn new() -> Self {
        Self::with_target(0)
    }

    pub(crate) fn with_target(target: usize) -> Self {
        Self {
            tricks: Vec::with_capacity(target.min(16)),
            target,
        }
    }

    pub(crate) fn push(&mut self, trick: Trick) {
        self.tricks.push(trick);
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Length the walk aimed for.
    pub fn target(&self) -> usize {
        self.target
    }

    /// True when the walk hit a dead end before reaching its target.
    pub fn is_short(&self) -> bool {
        self.tricks.len() < self.target
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    pub fn last(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trick> {
        self.tricks.iter()
    }

    /// Nodes visited: the first entry, then every exit.
    pub fn path(&self) -> Vec<Node> {
        let mut path = Vec::with_capacity(self.tricks.len() + 1);
        if let Some(first) = self.tricks.first() {
            path.push(first.entry().node());
        }
        for trick in &self.tricks {
            path.push(trick.exit_node());
        }
        path
    }

    /// One link per trick, in order.
    pub fn links(&self) -> Vec<Link> {
        self.tricks
            .iter()
            .map(|trick| Link {
                from: trick.entry().node(),
                to: trick.exit_node(),
                move_id: trick.id().to_string(),
            })
            .collect()
    }

    /// Check that every trick starts where the previous one ended.
    pub fn is_chained(&self) -> bool {
        self.tricks.windows(2).all(|pair| pair[0].chains_into(&pair[1]))
    }

    pub fn views(&self) -> Vec<TrickView> {
        self.tricks.iter().map(TrickView::from).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tricks.iter().map(Trick::name).collect()
    }
}

impl<'a> IntoIterator for &'a Combo {
    type Item = &'a Trick;
    type IntoIter = std::slice::Iter<'a, Trick>;

    fn into_iter(self) -> Self::IntoIter {
        self.tricks.iter()
    }
}

impl Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Point};
    use crate::trick::resolve;

    fn combo_of(ids: &[&str]) -> Combo {
        let mut combo = Combo::new();
        for id in ids {
            combo.push(resolve(id).unwrap());
        }
        combo
    }

    #[test]
    fn new_combo_is_empty() {
        let combo = Combo::new();
        assert!(combo.is_empty());
        assert!(combo.path().is_empty());
        assert!(combo.links().is_empty());
        assert!(combo.is_chained());
        assert!(!combo.is_short());
    }

    #[test]
    fn short_against_target() {
        let mut combo = Combo::with_target(2);
        combo.push(resolve("lion_f_o").unwrap());
        assert_eq!(combo.target(), 2);
        assert!(combo.is_short());

        combo.push(resolve("lion_f_o").unwrap());
        assert!(!combo.is_short());
    }

    #[test]
    fn path_returns_node_sequence() {
        let combo = combo_of(&["gazelle_f_o", "toe_pivot"]);

        let path = combo.path();
        assert_eq!(path.len(), 3);
        assert_eq!(
            path[0],
            Node {
                direction: Direction::Front,
                point: Point::Heel
            }
        );
        assert_eq!(
            path[1],
            Node {
                direction: Direction::Back,
                point: Point::Toe
            }
        );
        assert_eq!(
            path[2],
            Node {
                direction: Direction::Front,
                point: Point::Toe
            }
        );
    }

    #[test]
    fn links_name_each_move() {
        let combo = combo_of(&["gazelle_f_o", "toe_pivot"]);
        let links = combo.links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].move_id, "gazelle_f_o");
        assert_eq!(links[0].to, links[1].from);
    }

    #[test]
    fn is_chained_detects_broken_pairs() {
        assert!(combo_of(&["gazelle_f_o", "toe_pivot", "lion_f_o"]).is_chained());
        assert!(!combo_of(&["gazelle_f_o", "heel_pivot"]).is_chained());
    }

    #[test]
    fn display_joins_names() {
        let combo = combo_of(&["predator_f_o", "parallel_turn_o"]);
        assert_eq!(
            combo.to_string(),
            "Front Predator (Open) -> Parallel Turn (Open)"
        );
    }

    #[test]
    fn views_keep_order() {
        let combo = combo_of(&["tree_turn_o", "predator_f_o"]);
        let ids: Vec<String> = combo.views().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["tree_turn_o", "predator_f_o"]);
    }
}

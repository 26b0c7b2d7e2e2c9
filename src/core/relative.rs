//! Exit values expressed relative to the entry state.

use super::error::ParseDimensionError;
use super::state::Dimension;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// An exit value for one dimension.
///
/// On the wire this is a single string: `"same"`, `"opposite"`, or one of the
/// dimension's own labels.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::core::{Direction, Edge, Relative};
///
/// assert_eq!(Relative::Same.resolve(Direction::Front), Direction::Front);
/// assert_eq!(Relative::Opposite.resolve(Direction::Front), Direction::Back);
/// assert_eq!(Relative::Fixed(Edge::Inside).resolve(Edge::Outside), Edge::Inside);
///
/// // `center` has no opposite, so the flip is a no-op.
/// assert_eq!(Relative::Opposite.resolve(Edge::Center), Edge::Center);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Relative<T: Dimension> {
    /// Keep the entry value.
    Same,
    /// Flip the entry value to its paired opposite.
    Opposite,
    /// Force a specific value regardless of entry.
    Fixed(T),
}

impl<T: Dimension> Relative<T> {
    /// Resolve against the entry value.
    ///
    /// `Opposite` on a value without polarity (`center`, `neutral`) returns
    /// the base unchanged. A move entering on such a value therefore cannot
    /// flip that dimension on exit.
    pub fn resolve(self, base: T) -> T {
        match self {
            Relative::Same => base,
            Relative::Opposite => base.opposite().unwrap_or(base),
            Relative::Fixed(value) => value,
        }
    }

    /// Check whether this value depends on the entry state.
    pub fn is_relative(&self) -> bool {
        !matches!(self, Relative::Fixed(_))
    }
}

/// Free-function form of [`Relative::resolve`].
pub fn resolve_relative<T: Dimension>(value: Relative<T>, base: T) -> T {
    value.resolve(base)
}

impl<T: Dimension> Default for Relative<T> {
    fn default() -> Self {
        Relative::Same
    }
}

impl<T: Dimension> From<T> for Relative<T> {
    fn from(value: T) -> Self {
        Relative::Fixed(value)
    }
}

impl<T: Dimension> Display for Relative<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relative::Same => f.write_str("same"),
            Relative::Opposite => f.write_str("opposite"),
            Relative::Fixed(value) => f.write_str(value.name()),
        }
    }
}

impl<T: Dimension> FromStr for Relative<T> {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same" => Ok(Relative::Same),
            "opposite" => Ok(Relative::Opposite),
            other => T::parse(other)
                .map(Relative::Fixed)
                .ok_or_else(|| ParseDimensionError {
                    kind: T::KIND,
                    value: other.to_string(),
                }),
        }
    }
}

impl<T: Dimension> Serialize for Relative<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Relative::Same => serializer.serialize_str("same"),
            Relative::Opposite => serializer.serialize_str("opposite"),
            Relative::Fixed(value) => serializer.serialize_str(value.name()),
        }
    }
}

impl<'de, T: Dimension> Deserialize<'de> for Relative<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Edge, Point, Stance};

    #[test]
    fn same_keeps_base() {
        for direction in Direction::ALL {
            assert_eq!(Relative::Same.resolve(*direction), *direction);
        }
        for edge in Edge::ALL {
            assert_eq!(Relative::Same.resolve(*edge), *edge);
        }
    }

    #[test]
    fn opposite_flips_paired_values() {
        assert_eq!(Relative::Opposite.resolve(Direction::Back), Direction::Front);
        assert_eq!(Relative::Opposite.resolve(Edge::Inside), Edge::Outside);
        assert_eq!(Relative::Opposite.resolve(Stance::Closed), Stance::Open);
    }

    #[test]
    fn opposite_without_polarity_is_noop() {
        assert_eq!(Relative::Opposite.resolve(Edge::Center), Edge::Center);
        assert_eq!(Relative::Opposite.resolve(Stance::Neutral), Stance::Neutral);
    }

    #[test]
    fn fixed_ignores_base() {
        for stance in Stance::ALL {
            assert_eq!(Relative::Fixed(Stance::Closed).resolve(*stance), Stance::Closed);
        }
    }

    #[test]
    fn free_function_matches_method() {
        assert_eq!(
            resolve_relative(Relative::Opposite, Direction::Front),
            Direction::Back
        );
    }

    #[test]
    fn parses_keywords_and_labels() {
        assert_eq!("same".parse::<Relative<Edge>>().unwrap(), Relative::Same);
        assert_eq!(
            "opposite".parse::<Relative<Edge>>().unwrap(),
            Relative::Opposite
        );
        assert_eq!(
            "center".parse::<Relative<Edge>>().unwrap(),
            Relative::Fixed(Edge::Center)
        );

        let err = "toe".parse::<Relative<Edge>>().unwrap_err();
        assert_eq!(err.kind, "edge");
    }

    #[test]
    fn serializes_as_plain_strings() {
        let values: Vec<Relative<Direction>> = vec![
            Relative::Same,
            Relative::Opposite,
            Relative::Fixed(Direction::Back),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["same","opposite","back"]"#);

        let back: Vec<Relative<Direction>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn deserialize_rejects_typos() {
        let result: Result<Relative<Point>, _> = serde_json::from_str(r#""opposit""#);
        assert!(result.is_err());
    }

    #[test]
    fn only_fixed_is_absolute() {
        assert!(Relative::<Edge>::Same.is_relative());
        assert!(Relative::<Edge>::Opposite.is_relative());
        assert!(!Relative::Fixed(Edge::Inside).is_relative());
    }
}

//! Generation settings.

use crate::library::DEFAULT_MAX_STAGE;
use serde::{Deserialize, Serialize};

/// Longest combo the configured range can ask for.
///
/// The built-in catalog has self-loops, so an unbounded length would keep
/// the walk growing until memory runs out.
pub const TRICK_LIMIT: usize = 100;

/// Settings for combo generation.
///
/// Missing fields fall back to their defaults when read from JSON, so a
/// config file only needs to name what it changes.
///
/// # Example
///
/// ```rust
/// use wzrdbrain::combo::ComboConfig;
///
/// let config = ComboConfig::from_json(r#"{ "max_stage": 2 }"#).unwrap();
/// assert_eq!(config.max_stage, 2);
/// assert_eq!(config.length_range(), (2, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// Inclusive upper bound on move stage
    pub max_stage: u32,
    /// Smallest combo drawn when no count is given
    pub min_tricks: usize,
    /// Largest combo drawn when no count is given
    pub max_tricks: usize,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            max_stage: DEFAULT_MAX_STAGE,
            min_tricks: 2,
            max_tricks: 5,
        }
    }
}

impl ComboConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_max_stage(mut self, max_stage: u32) -> Self {
        self.max_stage = max_stage;
        self
    }

    pub fn with_length_range(mut self, min_tricks: usize, max_tricks: usize) -> Self {
        self.min_tricks = min_tricks;
        self.max_tricks = max_tricks;
        self
    }

    /// Inclusive bounds for a drawn combo length.
    ///
    /// Both ends are clamped to `TRICK_LIMIT` and `max` never drops below `min`.
    pub fn length_range(&self) -> (usize, usize) {
        let lo = self.min_tricks.min(TRICK_LIMIT);
        (lo, self.max_tricks.clamp(lo, TRICK_LIMIT))
    }
}

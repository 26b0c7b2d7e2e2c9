//! Chaining moves into combos.
//!
//! Generation is a bounded random walk over `(direction, point)` nodes. The
//! first move is drawn from the whole stage-filtered pool; every later move
//! must start on the node the previous one ended on. When no move leaves the
//! current node the walk stops and the shorter combo is returned as-is.

use crate::combo::chooser::Chooser;
use crate::combo::config::ComboConfig;
use crate::combo::sequence::Combo;
use crate::core::Guard;
use crate::library::{MoveDefinition, MoveLibrary};
use crate::trick::Trick;

/// Generates combos from a move library.
#[derive(Clone, Debug)]
pub struct ComboGenerator<'a> {
    library: &'a MoveLibrary,
    config: ComboConfig,
}

impl<'a> ComboGenerator<'a> {
    /// Create a generator with default settings.
    pub fn new(library: &'a MoveLibrary) -> Self {
        Self::with_config(library, ComboConfig::default())
    }

    pub fn with_config(library: &'a MoveLibrary, config: ComboConfig) -> Self {
        Self { library, config }
    }

    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    /// Moves allowed for the whole run, in library order.
    pub fn pool(&self) -> Vec<&'a MoveDefinition> {
        self.library.eligible(self.config.max_stage).collect()
    }

    /// Generate one combo.
    ///
    /// With `num_tricks` omitted, the length is drawn from the configured
    /// range. The result never exceeds the requested length but may fall
    /// short when the walk reaches a node no pooled move starts from; the
    /// returned combo keeps its target so `Combo::is_short` reports that.
    /// An explicit count is taken as-is; only drawn lengths are capped at
    /// `TRICK_LIMIT`.
    pub fn generate<C: Chooser + ?Sized>(
        &self,
        chooser: &mut C,
        num_tricks: Option<usize>,
    ) -> Combo {
        let count = match num_tricks {
            Some(n) => n,
            None => {
                let (lo, hi) = self.config.length_range();
                chooser.between(lo, hi)
            }
        };

        let mut combo = Combo::with_target(count);
        if count == 0 {
            return combo;
        }

        let pool = self.pool();
        if pool.is_empty() {
            tracing::debug!(max_stage = self.config.max_stage, "no moves in pool");
            return combo;
        }

        let seed = pool[chooser.pick(pool.len())];
        tracing::debug!(id = %seed.id, requested = count, "seed move");
        combo.push(Trick::from_definition(seed));

        while combo.len() < count {
            let Some(exit) = combo.last().map(Trick::exit_node) else {
                break;
            };

            let guard = Guard::chains_from(exit);
            let candidates: Vec<&MoveDefinition> = pool
                .iter()
                .copied()
                .filter(|def| guard.check(&def.entry))
                .collect();

            if candidates.is_empty() {
                tracing::debug!(
                    node = %exit,
                    built = combo.len(),
                    requested = count,
                    "dead end, stopping early"
                );
                break;
            }

            let next = candidates[chooser.pick(candidates.len())];
            tracing::trace!(id = %next.id, from = %exit, options = candidates.len(), "chained move");
            combo.push(Trick::from_definition(next));
        }

        combo
    }
}

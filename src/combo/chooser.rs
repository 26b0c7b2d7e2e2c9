//! Injected source of random choices.

use rand::Rng;

/// Capability to pick uniformly among a number of options.
///
/// Every `rand::Rng` is a chooser, so a seeded `StdRng` makes generation
/// reproducible while `thread_rng()` gives independent runs.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use wzrdbrain::combo::Chooser;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let index = rng.pick(3);
/// assert!(index < 3);
///
/// let count = rng.between(2, 5);
/// assert!((2..=5).contains(&count));
/// ```
pub trait Chooser {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in the inclusive range `lo..=hi`.
    ///
    /// Requires `lo <= hi`. A range covering every `usize` is not supported
    /// by the default body; `ComboConfig::length_range` never produces one.
    fn between(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi, "empty range {lo}..={hi}");
        let span = hi.saturating_sub(lo).saturating_add(1);
        lo + self.pick(span).min(hi.saturating_sub(lo))
    }
}

impl<R: Rng> Chooser for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn between(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

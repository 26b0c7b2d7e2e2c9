//! Combo generation.
//!
//! - `Chooser` is the injected source of randomness
//! - `ComboConfig` holds the stage limit and the default length range
//! - `ComboGenerator` walks the move graph and returns a `Combo`

mod chooser;
mod config;
mod generator;
mod sequence;

pub use chooser::Chooser;
pub use config::{ComboConfig, TRICK_LIMIT};
pub use generator::ComboGenerator;
pub use sequence::{Combo, Link};

use crate::library::MoveLibrary;

/// Generate a combo from the built-in library using the thread-local RNG.
///
/// `num_tricks` omitted draws a length from 2 to 5. The result may be shorter
/// than asked for, or empty, when the walk runs out of compatible moves.
///
/// # Example
///
/// ```rust
/// let combo = wzrdbrain::generate_combo(Some(3), 5);
/// assert!(combo.len() <= 3);
/// assert!(combo.iter().all(|trick| trick.stage() <= 5));
/// ```
pub fn generate_combo(num_tricks: Option<usize>, max_stage: u32) -> Combo {
    let config = ComboConfig::default().with_max_stage(max_stage);
    ComboGenerator::with_config(MoveLibrary::builtin(), config)
        .generate(&mut rand::thread_rng(), num_tricks)
}

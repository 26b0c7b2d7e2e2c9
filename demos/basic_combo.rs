//! Basic Combo
//!
//! This example generates a reproducible combo from the built-in catalog
//! and exports it as a versioned record.
//!
//! Key concepts:
//! - Seeded randomness through any `rand::Rng`
//! - Stage-limited move pool
//! - Early stop when no move follows the last exit
//!
//! Run with: cargo run --example basic_combo

use rand::rngs::StdRng;
use rand::SeedableRng;
use wzrdbrain::combo::{ComboConfig, ComboGenerator};
use wzrdbrain::export::ComboRecord;
use wzrdbrain::library::MoveLibrary;

fn main() {
    println!("=== Basic Combo Example ===\n");

    let config = ComboConfig::default().with_max_stage(3);
    let generator = ComboGenerator::with_config(MoveLibrary::builtin(), config);
    println!("Pool at stage {}: {} moves", config.max_stage, generator.pool().len());

    // Same seed, same combo
    let mut rng = StdRng::seed_from_u64(42);
    let combo = generator.generate(&mut rng, Some(4));

    println!("\nCombo: {combo}");
    for link in combo.links() {
        println!("  {:<16} {} -> {}", link.move_id, link.from, link.to);
    }
    if combo.is_short() {
        println!("Stopped after {} of {} tricks", combo.len(), combo.target());
    }

    let record = ComboRecord::new(&combo, Some(4), config.max_stage);
    match record.to_json() {
        Ok(json) => println!("\nRecord:\n{json}"),
        Err(e) => eprintln!("export failed: {e}"),
    }

    println!("\n=== Example Complete ===");
}

//! wzrdbrain: a state-transition trick engine for wizard skating
//!
//! Every move is a transition between discrete physical states. A move
//! declares the state it needs on entry and the state it leaves behind,
//! partly relative to the entry. Combos are built by chaining moves whose
//! entry matches the previous move's exit.
//!
//! # Core Concepts
//!
//! - **State**: direction, edge, stance and weight point via the `Dimension` trait
//! - **Moves**: immutable definitions held in a validated `MoveLibrary`
//! - **Tricks**: moves resolved to absolute entry and exit state
//! - **Combos**: bounded random walks over `(direction, point)` nodes
//!
//! # Example
//!
//! ```rust
//! use wzrdbrain::combo::ComboGenerator;
//! use wzrdbrain::core::{Direction, Edge, Point, Stance};
//! use wzrdbrain::library::MoveLibrary;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let trick = wzrdbrain::resolve("gazelle_f_o").unwrap();
//! assert_eq!(trick.exit_direction(), Direction::Back);
//! assert_eq!(trick.exit_edge(), Edge::Outside);
//! assert_eq!(trick.exit_stance(), Stance::Open);
//! assert_eq!(trick.exit_point(), Point::Toe);
//!
//! let generator = ComboGenerator::new(MoveLibrary::builtin());
//! let combo = generator.generate(&mut StdRng::seed_from_u64(7), Some(4));
//! assert!(combo.len() <= 4);
//! assert!(combo.is_chained());
//! ```

pub mod core;

pub mod builder;
pub mod combo;
pub mod export;
pub mod library;
pub mod trick;

// Re-export commonly used types
pub use combo::{generate_combo, Chooser, Combo, ComboConfig, ComboGenerator};
pub use crate::core::{Direction, Edge, PhysicalState, Point, Relative, Stance};
pub use library::{InvalidMoveError, MoveDefinition, MoveLibrary};
pub use trick::{resolve, Trick, TrickView};

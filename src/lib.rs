//! Life-like cellular automata on a fixed-size 2D grid.
//!
//! This crate implements Conway's Game of Life and its survive/birth rule
//! variants: a flat boolean grid with a bounded or toroidal boundary, several
//! ways to seed it (random, built-in shapes, pattern files, checkerboard), and
//! a double-buffered engine that advances it one generation at a time.
//!
//! # Architecture
//!
//! - `schema`: Configuration, rule sets and seed options
//! - `pattern`: Plaintext (`.cells`) and run-length encoded (`.rle`) pattern loading
//! - `compute`: Grid storage, seeding and the generation engine
//! - `render`: Text rendering of the grid and a status line for terminals
//!
//! # Example
//!
//! ```rust,no_run
//! use life_sim::{
//!     compute::LifeEngine,
//!     schema::{SeedOptions, SimulationConfig},
//! };
//!
//! let config = SimulationConfig {
//!     width: 60,
//!     height: 30,
//!     wrap: true,
//!     rules: "23/3".to_string(),
//!     seed: SeedOptions {
//!         method: "shape".to_string(),
//!         shape: "r-pentomino".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let mut engine = LifeEngine::from_config(&config)?;
//! engine.run(100);
//!
//! println!("Alive after {} generations: {}", engine.generation(), engine.alive_count());
//! # Ok::<(), life_sim::schema::ConfigError>(())
//! ```

pub mod compute;
pub mod pattern;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, LifeEngine, SimulationStats};
pub use pattern::{ParsedPattern, PatternError};
pub use schema::{ConfigError, RuleSet, SeedMethod, SeedOptions, SimulationConfig};

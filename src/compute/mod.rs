//! Compute module - Grid storage, seeding and generational advance.

mod engine;
mod grid;
mod seeder;

pub use engine::*;
pub use grid::*;
pub use seeder::*;

//! Schema module - Configuration, rule and seeding types.

mod config;
mod rule;
mod seed;

pub use config::*;
pub use rule::*;
pub use seed::*;

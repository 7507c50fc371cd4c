//! Configuration types for a simulation run.

use serde::{Deserialize, Serialize};

use super::{RuleError, RuleSet, SeedOptions};
use crate::pattern::PatternError;

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Frames per second. Only the controller paces by this; the engine ignores it.
    pub fps: u32,
    /// Toroidal boundary.
    pub wrap: bool,
    /// Rule string: `original`, `copyworld` or `<survive>/<birth>`.
    pub rules: String,
    /// How to fill the grid before the first generation.
    pub seed: SeedOptions,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 30,
            fps: 25,
            wrap: false,
            rules: "original".to_string(),
            seed: SeedOptions::default(),
        }
    }
}

impl SimulationConfig {
    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate the plain numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }
        Ok(())
    }

    /// Parse the rule string.
    pub fn resolve_rules(&self) -> Result<RuleSet, ConfigError> {
        Ok(RuleSet::parse(&self.rules)?)
    }
}

/// Configuration errors. All of these abort setup before any generation runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Frames per second must be non-zero")]
    InvalidFps,
    #[error("Random threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("Checkerboard block size must be at least 1")]
    InvalidBlockSize,
    #[error("Unknown init method {0:?} (expected random, shape, checkerboard or pattern-file)")]
    UnknownInitMethod(String),
    #[error("Unknown shape {0:?} (expected double-u, r-pentomino, f, line or file)")]
    UnknownShape(String),
    #[error("A pattern file is required for this init method")]
    MissingPatternFile,
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

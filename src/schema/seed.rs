//! Seed types for initializing a grid.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Seed parameters as they arrive from a config file or command line.
///
/// Method and shape are plain names here; [`SeedOptions::resolve`] checks
/// them and produces a [`SeedMethod`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedOptions {
    /// One of `random`, `shape`, `checkerboard`, `pattern-file`.
    pub method: String,
    /// Random seed (None = draw one).
    pub seed: Option<u64>,
    /// Probability that a cell starts alive under `random`.
    pub threshold: f64,
    /// Built-in shape name for `shape`.
    pub shape: String,
    /// Pattern file for the `file` shape and the `pattern-file` method.
    pub pattern_file: Option<PathBuf>,
    /// Checkerboard block size.
    pub block_size: usize,
    /// Whether dead cells of a stamped pattern clear what is underneath.
    pub clear_background: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            method: "random".to_string(),
            seed: None,
            threshold: 0.5,
            shape: Shape::DoubleU.name().to_string(),
            pattern_file: None,
            block_size: 1,
            clear_background: true,
        }
    }
}

impl SeedOptions {
    /// Validate the options and pick the fill routine they name.
    pub fn resolve(&self) -> Result<SeedMethod, ConfigError> {
        match self.method.to_ascii_lowercase().as_str() {
            "random" => {
                if !(0.0..=1.0).contains(&self.threshold) {
                    return Err(ConfigError::InvalidThreshold(self.threshold));
                }
                Ok(SeedMethod::Random {
                    seed: self.seed.unwrap_or_else(rand::random),
                    threshold: self.threshold,
                })
            }
            "shape" => {
                let shape: Shape = self.shape.parse()?;
                let pattern_file = match shape {
                    Shape::File => Some(self.require_pattern_file()?),
                    _ => None,
                };
                Ok(SeedMethod::Shape {
                    shape,
                    pattern_file,
                    clear_background: self.clear_background,
                })
            }
            "checkerboard" => {
                if self.block_size == 0 {
                    return Err(ConfigError::InvalidBlockSize);
                }
                Ok(SeedMethod::Checkerboard {
                    block_size: self.block_size,
                })
            }
            "pattern-file" => Ok(SeedMethod::PatternFile {
                path: self.require_pattern_file()?,
                clear_background: self.clear_background,
            }),
            _ => Err(ConfigError::UnknownInitMethod(self.method.clone())),
        }
    }

    fn require_pattern_file(&self) -> Result<PathBuf, ConfigError> {
        self.pattern_file
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingPatternFile)
    }
}

/// A validated fill routine with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedMethod {
    /// Each cell alive with probability `threshold`, reproducible from `seed`.
    Random { seed: u64, threshold: f64 },
    /// A built-in shape stamped at the grid center.
    Shape {
        shape: Shape,
        /// Set only for [`Shape::File`].
        pattern_file: Option<PathBuf>,
        clear_background: bool,
    },
    /// Alternating runs of `block_size` cells along the flat index.
    Checkerboard { block_size: usize },
    /// A pattern file stamped at the grid center.
    PatternFile {
        path: PathBuf,
        clear_background: bool,
    },
}

impl SeedMethod {
    /// Method name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            SeedMethod::Random { .. } => "random",
            SeedMethod::Shape { .. } => "shape",
            SeedMethod::Checkerboard { .. } => "checkerboard",
            SeedMethod::PatternFile { .. } => "pattern-file",
        }
    }
}

/// Built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    DoubleU,
    RPentomino,
    F,
    Line,
    /// Loaded from a pattern file.
    File,
}

const DOUBLE_U: &[(isize, isize)] = &[
    // upper U
    (-1, -1),
    (-1, -2),
    (-1, -3),
    (0, -3),
    (1, -3),
    (1, -2),
    (1, -1),
    // lower U
    (-1, 1),
    (-1, 2),
    (-1, 3),
    (0, 3),
    (1, 3),
    (1, 2),
    (1, 1),
];

const R_PENTOMINO: &[(isize, isize)] = &[(0, 0), (-1, 0), (0, 1), (0, -1), (1, -1)];

const F: &[(isize, isize)] = &[
    (0, 0),
    (0, -1),
    (0, -2),
    (0, -3),
    (-1, -3),
    (1, -3),
    (0, -4),
    (0, -5),
    (0, -6),
    (1, -6),
    (2, -6),
    (-1, -6),
    (-2, -6),
];

/// Horizontal extent of the `line` shape: dx in -23..=22.
const LINE_LEFT: isize = -23;
const LINE_RIGHT: isize = 22;

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::DoubleU,
        Shape::RPentomino,
        Shape::F,
        Shape::Line,
        Shape::File,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::DoubleU => "double-u",
            Shape::RPentomino => "r-pentomino",
            Shape::F => "f",
            Shape::Line => "line",
            Shape::File => "file",
        }
    }

    /// Live-cell offsets relative to the stamp center. Empty for [`Shape::File`].
    pub fn offsets(self) -> Vec<(isize, isize)> {
        match self {
            Shape::DoubleU => DOUBLE_U.to_vec(),
            Shape::RPentomino => R_PENTOMINO.to_vec(),
            Shape::F => F.to_vec(),
            Shape::Line => (LINE_LEFT..=LINE_RIGHT).map(|dx| (dx, 0)).collect(),
            Shape::File => Vec::new(),
        }
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == lowered)
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

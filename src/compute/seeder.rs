//! Grid seeding: random fill, built-in shapes, pattern files, checkerboard.
//!
//! Seeding writes straight into the live grid, cell by cell; nothing reads
//! neighbor state while it runs.

use std::path::Path;

use rand::prelude::*;

use super::Grid;
use crate::pattern::{self, Marker, ParsedPattern, PatternError};
use crate::schema::{SeedMethod, Shape};

/// Fill `grid` using `method`, starting from an all-dead grid.
///
/// Only the pattern-backed methods can fail, when the file is missing or has
/// an unsupported extension.
pub fn seed_grid(grid: &mut Grid, method: &SeedMethod) -> Result<(), PatternError> {
    grid.clear();
    match method {
        SeedMethod::Random { seed, threshold } => fill_random(grid, *seed, *threshold),
        SeedMethod::Shape {
            shape: Shape::File,
            pattern_file,
            clear_background,
        } => {
            // resolve() always sets a path for the file shape
            let path = pattern_file.as_deref().unwrap_or(Path::new(""));
            stamp_file(grid, path, *clear_background)?;
        }
        SeedMethod::Shape { shape, .. } => stamp_shape(grid, *shape),
        SeedMethod::Checkerboard { block_size } => fill_checkerboard(grid, *block_size),
        SeedMethod::PatternFile {
            path,
            clear_background,
        } => stamp_file(grid, path, *clear_background)?,
    }

    log::info!(
        "Seeded {}x{} grid with {}: {} alive",
        grid.width(),
        grid.height(),
        method.name(),
        grid.count_alive()
    );
    Ok(())
}

/// Set every cell, in row-major order, alive iff a uniform draw in [0, 1)
/// is below `threshold`. The same seed always yields the same grid.
pub fn fill_random(grid: &mut Grid, seed: u64, threshold: f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for cell in grid.cells_mut() {
        *cell = rng.r#gen::<f64>() < threshold;
    }
}

/// Cell `i` is alive iff `(i / block_size) % 2 == 0`.
pub fn fill_checkerboard(grid: &mut Grid, block_size: usize) {
    let block_size = block_size.max(1);
    for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
        *cell = (i / block_size) % 2 == 0;
    }
}

/// Grid center using floor division.
pub fn center(grid: &Grid) -> (isize, isize) {
    ((grid.width() / 2) as isize, (grid.height() / 2) as isize)
}

/// Stamp a built-in shape at the grid center. Cells falling off a bounded
/// grid are dropped.
pub fn stamp_shape(grid: &mut Grid, shape: Shape) {
    let (cx, cy) = center(grid);
    for (dx, dy) in shape.offsets() {
        grid.set(cx + dx, cy + dy, true);
    }
}

/// Load a pattern file and stamp it at the grid center.
pub fn stamp_file(grid: &mut Grid, path: &Path, clear_background: bool) -> Result<(), PatternError> {
    let pattern = pattern::load(path)?;
    let (cx, cy) = center(grid);
    stamp_pattern(grid, &pattern, cx, cy, clear_background);
    Ok(())
}

/// Stamp `pattern` so its own center lands on `(cx, cy)`.
///
/// Alive markers set cells alive. Dead markers clear cells only when
/// `clear_background` is set. Unspecified markers are never written.
pub fn stamp_pattern(
    grid: &mut Grid,
    pattern: &ParsedPattern,
    cx: isize,
    cy: isize,
    clear_background: bool,
) {
    let left = cx - (pattern.width() / 2) as isize;
    let top = cy - (pattern.height() / 2) as isize;

    for (y, row) in pattern.rows.iter().enumerate() {
        for (x, marker) in row.iter().enumerate() {
            let (gx, gy) = (left + x as isize, top + y as isize);
            match marker {
                Marker::Alive => grid.set(gx, gy, true),
                Marker::Dead if clear_background => grid.set(gx, gy, false),
                _ => {}
            }
        }
    }
}

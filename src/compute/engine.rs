//! Life engine - generational advance over a [`Grid`].
//!
//! Each generation is computed from the previous one into a separate buffer
//! and then swapped in, so no cell ever sees a neighbor that has already been
//! updated in the same pass.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Grid, seed_grid};
use crate::schema::{ConfigError, RuleSet, SeedMethod, SimulationConfig};

/// Moore neighborhood offsets.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Seeded, generation 0.
    Ready,
    /// At least one advance has run.
    Advanced,
}

/// Double-buffered Life-like simulation.
pub struct LifeEngine {
    grid: Grid,
    rules: RuleSet,
    /// Scratch buffer for the next generation. Holds the previous generation
    /// right after a swap.
    next: Vec<bool>,
    /// Per-cell flag: did the cell change in the last advance.
    changes: Vec<bool>,
    generation: u64,
    last_advance: Duration,
    /// How the grid was seeded, when built from configuration.
    seed: Option<SeedMethod>,
}

impl LifeEngine {
    /// Wrap an already seeded grid.
    pub fn new(grid: Grid, rules: RuleSet) -> Self {
        let size = grid.len();
        Self {
            grid,
            rules,
            next: vec![false; size],
            // nothing to compare against yet, so every cell counts as changed
            changes: vec![true; size],
            generation: 0,
            last_advance: Duration::ZERO,
            seed: None,
        }
    }

    /// Build and seed an engine from configuration.
    ///
    /// Every configuration problem (bad dimensions, rule string, init method,
    /// missing pattern file) is reported here, before any generation runs.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = config.resolve_rules()?;
        let method = config.seed.resolve()?;

        let mut grid = Grid::new(config.width, config.height, config.wrap);
        seed_grid(&mut grid, &method)?;

        log::info!(
            "Engine ready: {}x{} {}, rules {}",
            config.width,
            config.height,
            if config.wrap { "toroidal" } else { "bounded" },
            rules
        );
        let mut engine = Self::new(grid, rules);
        engine.seed = Some(method);
        Ok(engine)
    }

    /// Live neighbors of `(x, y)` under the grid's boundary policy.
    pub fn count_alive_neighbors(&self, x: isize, y: isize) -> u8 {
        count_neighbors(&self.grid, x, y)
    }

    /// State `(x, y)` will have in the next generation.
    pub fn next_state(&self, x: isize, y: isize) -> bool {
        next_cell(&self.grid, &self.rules, x, y)
    }

    /// Advance one generation.
    pub fn advance(&mut self) {
        let start = Instant::now();
        let width = self.grid.width().max(1);
        let grid = &self.grid;
        let rules = &self.rules;

        self.next
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = next_cell(grid, rules, x as isize, y as isize);
                }
            });

        self.grid.swap_cells(&mut self.next);

        // `next` now holds the previous generation
        for ((changed, &now), &before) in self
            .changes
            .iter_mut()
            .zip(self.grid.cells())
            .zip(&self.next)
        {
            *changed = now != before;
        }

        self.generation += 1;
        self.last_advance = start.elapsed();
        log::debug!(
            "Generation {} computed in {:?}",
            self.generation,
            self.last_advance
        );
    }

    /// Advance `generations` times.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    pub fn state(&self) -> EngineState {
        if self.generation == 0 {
            EngineState::Ready
        } else {
            EngineState::Advanced
        }
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Seed method used by [`LifeEngine::from_config`], with any random seed
    /// already drawn.
    pub fn seed_method(&self) -> Option<&SeedMethod> {
        self.seed.as_ref()
    }

    /// Cell state under the grid's boundary policy.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.grid.get(x, y)
    }

    /// Whether `(x, y)` changed in the last advance. Same boundary policy as
    /// [`Grid::get`].
    pub fn changed(&self, x: isize, y: isize) -> bool {
        self.grid.resolve(x, y).is_some_and(|i| self.changes[i])
    }

    /// Row-major change flags from the last advance.
    pub fn change_mask(&self) -> &[bool] {
        &self.changes
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.grid.count_alive()
    }

    /// Wall-clock time of the last advance. Diagnostic only.
    pub fn last_advance_duration(&self) -> Duration {
        self.last_advance
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            generation: self.generation,
            alive: self.alive_count(),
            last_advance: self.last_advance,
        }
    }
}

fn count_neighbors(grid: &Grid, x: isize, y: isize) -> u8 {
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy))
        .count() as u8
}

fn next_cell(grid: &Grid, rules: &RuleSet, x: isize, y: isize) -> bool {
    let neighbors = count_neighbors(grid, x, y);
    if grid.get(x, y) {
        rules.is_survive(neighbors)
    } else {
        rules.is_birth(neighbors)
    }
}

/// Summary of the current generation for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub alive: usize,
    pub last_advance: Duration,
}

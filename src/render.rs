//! Text rendering of an engine for a terminal.

use crate::compute::{Grid, LifeEngine};
use crate::schema::SeedMethod;

/// ANSI sequence: clear screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Width of one HUD column.
pub const HUD_COL_WIDTH: usize = 25;

const ALIVE: char = '█';
const DEAD: char = ' ';

/// One line per grid row.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() * ALIVE.len_utf8() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
        out.push('\n');
    }
    out
}

/// Two status lines: run statistics, then setup.
pub fn render_hud(engine: &LifeEngine) -> String {
    let stats = engine.stats();
    let grid = engine.grid();

    let mut out = String::new();
    push_col(&mut out, format!("Generation: {}", stats.generation));
    push_col(&mut out, format!("Alive: {}", stats.alive));
    push_col(
        &mut out,
        format!("Calc time: {:.4} sec", stats.last_advance.as_secs_f64()),
    );
    push_col(
        &mut out,
        format!("Resolution: {}x{}", grid.width(), grid.height()),
    );
    out.push('\n');

    match engine.seed_method() {
        Some(method) => {
            push_col(&mut out, format!("Init method: {}", method.name()));
            match method {
                SeedMethod::Random { seed, threshold } => {
                    push_col(&mut out, format!("Seed: {seed}"));
                    push_col(&mut out, format!("Threshold: {threshold}"));
                }
                SeedMethod::Shape { shape, .. } => push_col(&mut out, format!("Shape: {shape}")),
                SeedMethod::Checkerboard { block_size } => {
                    push_col(&mut out, format!("Block size: {block_size}"))
                }
                SeedMethod::PatternFile { path, .. } => {
                    push_col(&mut out, format!("Pattern: {}", path.display()))
                }
            }
        }
        None => push_col(&mut out, "Init method: manual".to_string()),
    }
    push_col(&mut out, format!("Rules: {}", engine.rules()));
    out.push('\n');
    out
}

/// Grid followed by the HUD.
pub fn render_frame(engine: &LifeEngine) -> String {
    let mut out = render_grid(engine.grid());
    out.push('\n');
    out.push_str(&render_hud(engine));
    out
}

fn push_col(out: &mut String, text: String) {
    out.push_str(&format!("{text:<width$}", width = HUD_COL_WIDTH));
}

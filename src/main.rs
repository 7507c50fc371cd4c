//! Life CLI - Run a simulation from JSON configuration in the terminal.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use life_sim::{
    compute::LifeEngine,
    render::{CLEAR_SCREEN, render_frame},
    schema::SimulationConfig,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Life-like cellular automaton from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Stop after this many generations (default: run until Ctrl+C)");
        eprintln!();
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: Option<u64> = args.get(2).map(|s| {
        s.parse().unwrap_or_else(|e| {
            eprintln!("Invalid generation count {:?}: {}", s, e);
            std::process::exit(1);
        })
    });

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    // Build and seed; every configuration error stops us here
    let mut engine = LifeEngine::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run(&mut engine, config.fps, generations) {
        eprintln!("Error writing frame: {}", e);
        std::process::exit(1);
    }
}

/// Draw, sleep, advance until `generations` is reached (or forever).
fn run(engine: &mut LifeEngine, fps: u32, generations: Option<u64>) -> io::Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let mut stdout = io::stdout().lock();

    loop {
        write!(stdout, "{}{}", CLEAR_SCREEN, render_frame(engine))?;
        writeln!(stdout, "\nPress CTRL+C to quit!")?;
        stdout.flush()?;

        if generations.is_some_and(|limit| engine.generation() >= limit) {
            return Ok(());
        }

        thread::sleep(frame_time);
        engine.advance();
    }
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example config: {}", e),
    }
}

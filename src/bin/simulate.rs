//! Headless pilot simulator CLI.
//!
//! Plays many episodes with a built-in pilot and reports how they went.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 gap-follower runs
//!   cargo run --bin simulate -- -n 20 --pilot idle
//!   cargo run --bin simulate -- --seed 42 --json # Reproducible, with JSON report

use flappy::core::GameConfig;
use flappy::logging;
use flappy::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, save_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };
    logging::init(config.verbosity >= 2);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 FLAPPY PILOT SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Pilot:          {:?}", config.pilot);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Tick Rate:      {}", config.game.tick_rate);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            std::process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut save_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(9_000);
                    i += 1;
                }
            }
            "-p" | "--pilot" => {
                let name = args.get(i + 1).ok_or("--pilot needs a name")?;
                config.pilot = name.parse()?;
                i += 1;
            }
            "-c" | "--config" => {
                let path = args.get(i + 1).ok_or("--config needs a path")?;
                config.game = GameConfig::load(path).map_err(|e| e.to_string())?;
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                save_json = true;
            }
            "--quick" => {
                let seed = config.seed.unwrap_or(42);
                config = SimConfig::quick(seed);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    Ok((config, save_json))
}

fn print_help() {
    println!("Flappy Pilot Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of episodes (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per episode (default: 9,000)");
    println!("    -p, --pilot <P>     Pilot: idle or gap (default: gap)");
    println!("    -c, --config <F>    Game parameters from a JSON file");
    println!("    -v, --verbose       Per-run output and debug logging");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (5 seeded runs)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 20 -p idle    # Idle baseline");
    println!("    cargo run --bin simulate -- --seed 42 --json # Reproducible");
}

use flappy::build_info;
use flappy::core::{run_episode, EpisodeEnd, GameConfig, GameError, InputSource, Simulation, Ticker};
use flappy::input::{self, TerminalInput};
use flappy::logging;
use flappy::pilot::{GapFollower, Pilot};
use flappy::sprite::SpriteSheet;
use flappy::ui::TerminalRenderer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    autopilot: bool,
    log: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(options: Options) -> Result<(), GameError> {
    if options.log {
        logging::init(options.verbose);
    }

    let config = match &options.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let sprites = Arc::new(SpriteSheet::procedural());
    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut sim = Simulation::new(config.clone(), Arc::clone(&sprites), &mut rng)?;
    let mut autopilot = options.autopilot.then(|| GapFollower::new(&sprites));

    let summary = {
        let world = (config.world.width, config.world.height);
        let mut renderer = TerminalRenderer::new(Arc::clone(&sprites), world)?;
        let mut keys = TerminalInput;
        let mut ticker = Ticker::new(config.tick_rate);

        let summary = run_episode(
            &mut sim,
            &mut rng,
            &mut ticker,
            &mut keys,
            &mut renderer,
            autopilot.as_mut().map(|p| p as &mut dyn Pilot),
        )?;

        if let EpisodeEnd::Died(_) = summary.end {
            // Swallow the flaps still in flight, then hold the crash screen.
            std::thread::sleep(Duration::from_millis(400));
            keys.drain()?;
            input::wait_for_key(Duration::from_secs(30))?;
        }
        summary
    };

    match summary.end {
        EpisodeEnd::Died(cause) => {
            println!("{} - final score {}", cause, summary.score);
        }
        EpisodeEnd::Quit => {
            println!(
                "Quit after {} ticks - score {}",
                summary.ticks, summary.score
            );
        }
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                let path = args.get(i + 1).ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "-s" | "--seed" => {
                let seed = args.get(i + 1).ok_or("--seed needs a number")?;
                options.seed = Some(
                    seed.parse()
                        .map_err(|_| format!("invalid seed: {}", seed))?,
                );
                i += 1;
            }
            "-a" | "--autopilot" => options.autopilot = true,
            "--log" => options.log = true,
            "--verbose" => {
                options.log = true;
                options.verbose = true;
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Flappy - steer the bird through the pipes\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  -c, --config <path>  Load game parameters from a JSON file");
    println!("  -s, --seed <n>       Seed the pipe generator");
    println!("  -a, --autopilot      Let the built-in pilot fly");
    println!("      --log            Log to stderr (redirect it: 2>flappy.log)");
    println!("      --verbose        Log debug detail too");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Controls: Space/Up/Enter to flap, Esc or q to quit.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("flappy")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert!(options.config_path.is_none());
        assert!(options.seed.is_none());
        assert!(!options.autopilot);
    }

    #[test]
    fn test_parse_all_flags() {
        let options =
            parse_args(&args(&["--config", "game.json", "-s", "42", "-a", "--verbose"])).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("game.json")));
        assert_eq!(options.seed, Some(42));
        assert!(options.autopilot);
        assert!(options.log && options.verbose);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}

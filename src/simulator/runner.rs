//! Plays simulation batches on the real game engine.
//!
//! Runs use `Simulation` exactly as the interactive game does, minus the
//! renderer and the wall clock, so results match what a player would see.

use super::config::SimConfig;
use super::report::{RunEnd, RunStats, SimReport};
use crate::core::error::GameError;
use crate::core::simulation::{Simulation, TickInput};
use crate::sprite::SpriteSheet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Run the whole batch and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    config.game.validate()?;
    let sprites = Arc::new(SpriteSheet::procedural());
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, Arc::clone(&sprites), &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, {} ticks, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.end
            );
        }
        log::debug!("run {} finished: {:?}", run_idx, stats);
        runs.push(stats);
    }

    Ok(SimReport::from_runs(runs, config.max_ticks_per_run))
}

/// Play one episode from a fresh simulation until it ends or times out.
pub fn simulate_single_run(
    config: &SimConfig,
    sprites: Arc<SpriteSheet>,
    rng: &mut ChaCha8Rng,
) -> Result<RunStats, GameError> {
    let mut pilot = config.pilot.build(&sprites);
    let mut sim = Simulation::new(config.game.clone(), sprites, rng)?;
    let mut snapshot = sim.snapshot();
    let mut jumps = 0u64;

    while sim.tick_count() < config.max_ticks_per_run {
        let jump = pilot.wants_jump(&snapshot);
        if jump {
            jumps += 1;
        }
        let result = sim.tick(TickInput { jump }, rng)?;
        snapshot = result.snapshot;

        if let Some(cause) = result.death {
            return Ok(RunStats {
                score: sim.score(),
                ticks: sim.tick_count(),
                jumps,
                end: RunEnd::Died(cause),
            });
        }
    }

    Ok(RunStats {
        score: sim.score(),
        ticks: sim.tick_count(),
        jumps,
        end: RunEnd::TimedOut,
    })
}

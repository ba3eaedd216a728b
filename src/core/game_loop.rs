//! Fixed-rate driver for one episode.
//!
//! The driver owns no game state. It waits for each tick boundary, drains
//! the input queue once, asks either the player's keys or a [`Pilot`] for the
//! jump decision, runs one whole simulation tick, and hands the snapshot to
//! the renderer. Quit requests are only honored between ticks.

use super::error::{DeathCause, GameError};
use super::simulation::{Simulation, Snapshot, TickInput};
use crate::pilot::Pilot;
use rand::Rng;
use std::time::{Duration, Instant};

/// Discrete requests from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Quit,
}

/// Source of player commands, drained once per tick.
pub trait InputSource {
    fn drain(&mut self) -> Result<Vec<Command>, GameError>;
}

/// Consumer of per-tick snapshots.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), GameError>;
}

/// Sleeps until successive tick boundaries.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            next: None,
        }
    }

    /// A ticker that never sleeps, for headless runs.
    pub fn unpaced() -> Self {
        Self {
            interval: Duration::ZERO,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next tick boundary.
    pub fn wait(&mut self) {
        if self.interval.is_zero() {
            return;
        }
        let now = Instant::now();
        let next = *self.next.get_or_insert(now);
        if next > now {
            std::thread::sleep(next - now);
        }
        // Fall behind by more than a tick and the schedule restarts rather
        // than replaying missed ticks in a burst.
        let after = next + self.interval;
        self.next = Some(if after < now { now + self.interval } else { after });
    }
}

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEnd {
    Died(DeathCause),
    Quit,
}

#[derive(Debug, Clone)]
pub struct EpisodeSummary {
    pub score: u32,
    pub ticks: u64,
    pub end: EpisodeEnd,
    pub last_snapshot: Snapshot,
}

/// Drive `sim` until the bird dies or the player quits.
///
/// With a pilot attached, jump keys are ignored and the pilot decides; quit
/// still comes from `input`.
pub fn run_episode<R: Rng>(
    sim: &mut Simulation,
    rng: &mut R,
    ticker: &mut Ticker,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    mut pilot: Option<&mut dyn Pilot>,
) -> Result<EpisodeSummary, GameError> {
    let mut snapshot = sim.snapshot();
    renderer.render(&snapshot)?;

    loop {
        ticker.wait();

        let commands = input.drain()?;
        if commands.contains(&Command::Quit) {
            log::info!("quit requested at tick {}", sim.tick_count());
            return Ok(EpisodeSummary {
                score: sim.score(),
                ticks: sim.tick_count(),
                end: EpisodeEnd::Quit,
                last_snapshot: snapshot,
            });
        }

        let jump = match pilot.as_deref_mut() {
            Some(pilot) => pilot.wants_jump(&snapshot),
            None => commands.contains(&Command::Jump),
        };
        if jump {
            log::debug!("jump at tick {}", sim.tick_count() + 1);
        }

        let result = sim.tick(TickInput { jump }, rng)?;
        renderer.render(&result.snapshot)?;
        snapshot = result.snapshot;

        if let Some(cause) = result.death {
            return Ok(EpisodeSummary {
                score: sim.score(),
                ticks: sim.tick_count(),
                end: EpisodeEnd::Died(cause),
                last_snapshot: snapshot,
            });
        }
    }
}

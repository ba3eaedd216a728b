//! Headless batch runner.
//!
//! Plays many independent episodes with a programmatic pilot and summarizes
//! how they went:
//! - score distribution (mean, median, min, max)
//! - how long episodes last
//! - what killed the bird
//!
//! Every run builds a fresh [`Simulation`](crate::core::simulation::Simulation)
//! from its own seeded RNG, so runs share no state and a given seed always
//! replays the same episode.

mod config;
mod report;
mod runner;

pub use config::{PilotKind, SimConfig};
pub use report::{RunEnd, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};

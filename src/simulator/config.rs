//! Simulation configuration.

use crate::core::config::GameConfig;
use crate::pilot::{GapFollower, IdlePilot, Pilot};
use crate::sprite::SpriteSheet;
use std::str::FromStr;

/// Which built-in pilot flies the bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotKind {
    Idle,
    GapFollower,
}

impl PilotKind {
    pub fn build(&self, sprites: &SpriteSheet) -> Box<dyn Pilot> {
        match self {
            Self::Idle => Box::new(IdlePilot),
            Self::GapFollower => Box::new(GapFollower::new(sprites)),
        }
    }
}

impl FromStr for PilotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "gap" | "gap-follower" => Ok(Self::GapFollower),
            other => Err(format!("unknown pilot '{}' (expected idle or gap)", other)),
        }
    }
}

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of episodes to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-running episode is cut off
    pub max_ticks_per_run: u64,

    pub pilot: PilotKind,

    /// Game parameters shared by every run
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 30 * 60 * 5, // five minutes of play
            pilot: PilotKind::GapFollower,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for smoke tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 3_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}

//! Flappy - a side-scrolling bird game simulation.
//!
//! The library holds the whole game: bird kinematics, the pipe stream, the
//! scrolling ground, pixel-exact collision and the tick controller, plus a
//! terminal front end and a headless batch simulator.

pub mod bird;
pub mod build_info;
pub mod collision;
pub mod core;
pub mod ground;
pub mod input;
pub mod logging;
pub mod obstacle;
pub mod pilot;
pub mod simulator;
pub mod sprite;
pub mod ui;

pub use crate::core::{
    DeathCause, GameConfig, GameError, Phase, Simulation, Snapshot, TickInput, TickResult,
};
pub use sprite::SpriteSheet;

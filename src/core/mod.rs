//! Core simulation: configuration, the controller and its fixed-rate driver.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;
pub mod simulation;

pub use config::GameConfig;
pub use error::{DeathCause, GameError};
pub use game_loop::{run_episode, Command, EpisodeEnd, EpisodeSummary, InputSource, Renderer, Ticker};
pub use simulation::{Phase, Simulation, Snapshot, TickInput, TickResult};

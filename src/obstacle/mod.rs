//! Pipe obstacles.
//!
//! Each obstacle is a top and bottom pipe with a fixed-size gap between
//! them. The stream spawns them at the right edge, scrolls them left,
//! credits the bird once each is behind it, and retires them once fully off
//! screen.

pub mod stream;
pub mod types;

pub use stream::ObstacleStream;
pub use types::{Obstacle, ObstacleView};

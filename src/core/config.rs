//! Game configuration.
//!
//! Every constant the simulation uses is supplied here at construction time.
//! The defaults reproduce the reference behavior at 30 ticks per second; a
//! JSON file may override any subset of fields.

use super::constants::*;
use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bird motion and animation parameters (all per tick).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Velocity set by a jump impulse (negative = upward).
    pub jump_velocity: f64,
    /// Coefficient of t² in `d = v*t + a*t²`.
    pub acceleration: f64,
    /// Largest downward displacement applied in one tick.
    pub terminal_displacement: f64,
    /// Extra upward displacement applied whenever the bird is ascending.
    pub ascent_boost: f64,
    pub max_tilt: f64,
    pub min_tilt: f64,
    /// Degrees of downward rotation per tick once the bird is falling.
    pub rotation_velocity: f64,
    /// Distance below the jump height the bird may sink before it noses down.
    pub tilt_hold_margin: f64,
    /// Ticks each wing frame is shown.
    pub animation_ticks: u32,
    /// At or below this tilt the wings freeze on the level frame.
    pub nosedive_tilt: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            jump_velocity: JUMP_VELOCITY,
            acceleration: ACCELERATION,
            terminal_displacement: TERMINAL_DISPLACEMENT,
            ascent_boost: ASCENT_BOOST,
            max_tilt: MAX_TILT,
            min_tilt: MIN_TILT,
            rotation_velocity: ROTATION_VELOCITY,
            tilt_hold_margin: TILT_HOLD_MARGIN,
            animation_ticks: ANIMATION_TICKS,
            nosedive_tilt: NOSEDIVE_TILT,
        }
    }
}

/// Pipe generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Vertical opening between the top and bottom segment.
    pub gap: f64,
    /// Lowest gap top (inclusive).
    pub min_height: u32,
    /// Highest gap top (exclusive).
    pub max_height: u32,
    /// Horizontal position new pipes appear at.
    pub spawn_x: f64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            gap: PIPE_GAP,
            min_height: PIPE_MIN_HEIGHT,
            max_height: PIPE_MAX_HEIGHT,
            spawn_x: PIPE_SPAWN_X,
        }
    }
}

/// Screen bounds, bird spawn point and world scroll speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub bird_x: f64,
    pub bird_y: f64,
    /// Top of the ground strip; touching it is fatal.
    pub ground_y: f64,
    /// Pixels per tick the pipes and ground move left.
    pub scroll_velocity: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            bird_x: BIRD_SPAWN_X,
            bird_y: BIRD_SPAWN_Y,
            ground_y: GROUND_Y,
            scroll_velocity: SCROLL_VELOCITY,
        }
    }
}

/// Complete configuration for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_rate: u32,
    pub kinematics: KinematicsConfig,
    pub obstacles: ObstacleConfig,
    pub world: WorldConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICKS_PER_SECOND,
            kinematics: KinematicsConfig::default(),
            obstacles: ObstacleConfig::default(),
            world: WorldConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.as_ref().display());

        // Per-tick values in a file are always given at the reference rate.
        if config.tick_rate == TICKS_PER_SECOND {
            return Ok(config);
        }
        let rate = config.tick_rate;
        let reference = GameConfig {
            tick_rate: TICKS_PER_SECOND,
            ..config
        };
        log::debug!("rescaling config from {} to {} ticks/s", TICKS_PER_SECOND, rate);
        reference.with_tick_rate(rate)
    }

    /// Reject configurations that would produce undefined motion.
    pub fn validate(&self) -> Result<(), GameError> {
        let k = &self.kinematics;
        let o = &self.obstacles;
        let w = &self.world;

        if self.tick_rate == 0 {
            return Err(GameError::config("tick rate must be positive"));
        }
        if !(o.gap.is_finite() && o.gap > 0.0) {
            return Err(GameError::config(format!(
                "pipe gap must be positive, got {}",
                o.gap
            )));
        }
        if o.min_height >= o.max_height {
            return Err(GameError::config(format!(
                "pipe height range [{}, {}) is empty",
                o.min_height, o.max_height
            )));
        }
        if !(w.scroll_velocity.is_finite() && w.scroll_velocity > 0.0) {
            return Err(GameError::config("scroll velocity must be positive"));
        }
        if !(k.jump_velocity.is_finite() && k.jump_velocity < 0.0) {
            return Err(GameError::config("jump velocity must point upward"));
        }
        if !(k.terminal_displacement.is_finite() && k.terminal_displacement > 0.0) {
            return Err(GameError::config("terminal displacement must be positive"));
        }
        if k.acceleration <= 0.0 || k.ascent_boost < 0.0 || k.rotation_velocity <= 0.0 {
            return Err(GameError::config(
                "acceleration and rotation velocity must be positive, ascent boost non-negative",
            ));
        }
        if k.min_tilt >= k.max_tilt {
            return Err(GameError::config(format!(
                "tilt bounds out of order: [{}, {}]",
                k.min_tilt, k.max_tilt
            )));
        }
        if k.animation_ticks == 0 {
            return Err(GameError::config("animation ticks must be positive"));
        }
        if o.spawn_x <= w.bird_x {
            return Err(GameError::config("pipes must spawn to the right of the bird"));
        }
        if w.ground_y <= w.bird_y || w.ground_y > w.height as f64 {
            return Err(GameError::config(format!(
                "ground line {} must lie below the bird and inside the window",
                w.ground_y
            )));
        }
        Ok(())
    }

    /// Rescale every per-tick constant so the game plays at the same speed
    /// in wall-clock time when driven at `rate` ticks per second.
    ///
    /// With `s` the new tick length in old ticks, the tick counter `t` in
    /// `d = v*t + a*t²` also runs `1/s` times faster, so the velocity term
    /// scales by `s²` and the t² term by `s³`. Flat per-tick amounts scale
    /// by `s`.
    pub fn with_tick_rate(&self, rate: u32) -> Result<Self, GameError> {
        if rate == 0 {
            return Err(GameError::config("tick rate must be positive"));
        }
        let step = self.tick_rate as f64 / rate as f64;
        let mut scaled = self.clone();
        scaled.tick_rate = rate;

        let k = &mut scaled.kinematics;
        k.jump_velocity *= step * step;
        k.acceleration *= step * step * step;
        k.terminal_displacement *= step;
        k.ascent_boost *= step;
        k.rotation_velocity *= step;
        k.animation_ticks = ((k.animation_ticks as f64 / step).round() as u32).max(1);

        scaled.world.scroll_velocity *= step;
        scaled.validate()?;
        Ok(scaled)
    }
}

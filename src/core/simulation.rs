//! The simulation controller: one episode of the game.
//!
//! A `Simulation` exclusively owns the bird, the pipes, the ground and the
//! score. Each call to [`Simulation::tick`] runs the full per-tick sequence
//! to completion:
//!
//! 1. apply the queued jump, if any
//! 2. move the bird
//! 3. scroll the ground
//! 4. scroll the pipes
//! 5. pipe collision (ends the tick immediately on a hit)
//! 6. pass flags, scoring and spawning
//! 7. retire off-screen pipes
//! 8. ground collision
//! 9. hand back an owned snapshot for rendering
//!
//! Once the episode is over every further tick is rejected.

use super::config::GameConfig;
use super::error::{DeathCause, GameError};
use crate::bird::{Bird, BirdPose};
use crate::collision;
use crate::ground::{Ground, GroundView};
use crate::obstacle::{ObstacleStream, ObstacleView};
use crate::sprite::SpriteSheet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Episode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Terminal(DeathCause),
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Controls applied at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
}

impl TickInput {
    pub const IDLE: Self = Self { jump: false };
    pub const JUMP: Self = Self { jump: true };
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub bird: BirdPose,
    pub obstacles: Vec<ObstacleView>,
    pub ground: GroundView,
    pub score: u32,
    pub phase: Phase,
}

/// What happened during one tick.
#[derive(Debug, Clone)]
pub struct TickResult {
    /// A pipe was passed (and a new one spawned) this tick.
    pub scored: bool,
    /// The episode ended this tick.
    pub death: Option<DeathCause>,
    pub snapshot: Snapshot,
}

pub struct Simulation {
    config: GameConfig,
    sprites: Arc<SpriteSheet>,
    bird: Bird,
    obstacles: ObstacleStream,
    ground: Ground,
    score: u32,
    phase: Phase,
    tick_count: u64,
}

impl Simulation {
    /// Start a fresh episode: bird at its spawn point, one pipe at the spawn
    /// line, ground tiles side by side.
    pub fn new<R: Rng>(
        config: GameConfig,
        sprites: Arc<SpriteSheet>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut sim = Self::empty(config, sprites)?;
        let spawn_x = sim.config.obstacles.spawn_x;
        sim.obstacles.spawn(spawn_x, rng);
        Ok(sim)
    }

    /// Like [`Simulation::new`] but with no pipes; callers place their own
    /// with [`Simulation::obstacles_mut`].
    pub fn empty(config: GameConfig, sprites: Arc<SpriteSheet>) -> Result<Self, GameError> {
        config.validate()?;
        let w = &config.world;
        let bird = Bird::new(w.bird_x, w.bird_y);
        let ground = Ground::new(w.ground_y, sprites.ground_width());
        let obstacles =
            ObstacleStream::new(&config.obstacles, sprites.pipe_width(), sprites.pipe_height());
        Ok(Self {
            config,
            sprites,
            bird,
            obstacles,
            ground,
            score: 0,
            phase: Phase::Running,
            tick_count: 0,
        })
    }

    /// Run one full tick.
    pub fn tick<R: Rng>(&mut self, input: TickInput, rng: &mut R) -> Result<TickResult, GameError> {
        if let Phase::Terminal(cause) = self.phase {
            log::warn!("tick requested after episode end ({})", cause);
            return Err(GameError::EpisodeOver {
                score: self.score,
                cause,
            });
        }
        self.tick_count += 1;
        let velocity = self.config.world.scroll_velocity;

        if input.jump {
            self.bird.jump(&self.config.kinematics);
        }
        self.bird.advance(&self.config.kinematics);
        self.ground.advance(velocity);
        self.obstacles.advance(velocity);

        let shape = self.bird.pose().shape(&self.sprites);
        if collision::first_hit(&shape, &self.obstacles, &self.sprites).is_some() {
            return Ok(self.finish(DeathCause::Pipe, false));
        }

        let passes = self.obstacles.update_pass_flags(self.bird.x());
        for _ in 0..passes {
            self.credit_pass(rng);
        }

        self.obstacles.reap();

        let bird_bottom = self.bird.y() + self.sprites.bird_height() as f64;
        if bird_bottom >= self.ground.y() {
            return Ok(self.finish(DeathCause::Ground, passes > 0));
        }

        Ok(TickResult {
            scored: passes > 0,
            death: None,
            snapshot: self.snapshot(),
        })
    }

    /// A pass is one transition with two effects: a point and a new pipe.
    fn credit_pass<R: Rng>(&mut self, rng: &mut R) {
        self.score += 1;
        let spawn_x = self.config.obstacles.spawn_x;
        self.obstacles.spawn(spawn_x, rng);
        log::info!("pipe passed, score {}", self.score);
    }

    fn finish(&mut self, cause: DeathCause, scored: bool) -> TickResult {
        self.phase = Phase::Terminal(cause);
        log::info!(
            "{} after {} ticks, final score {}",
            cause,
            self.tick_count,
            self.score
        );
        TickResult {
            scored,
            death: Some(cause),
            snapshot: self.snapshot(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick_count,
            bird: self.bird.pose(),
            obstacles: self.obstacles.views(),
            ground: self.ground.view(),
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sprites(&self) -> &Arc<SpriteSheet> {
        &self.sprites
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }


    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleStream {
        &mut self.obstacles
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        !self.phase.is_running()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sim() -> (Simulation, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sim = Simulation::new(
            GameConfig::default(),
            Arc::new(SpriteSheet::procedural()),
            &mut rng,
        )
        .unwrap();
        (sim, rng)
    }

    #[test]
    fn test_new_episode_layout() {
        let (sim, _) = sim();
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.obstacles().len(), 1);
        let first = sim.obstacles().iter().next().unwrap();
        assert!((first.x - 700.0).abs() < f64::EPSILON);
        assert!((sim.bird().x() - 230.0).abs() < f64::EPSILON);
        assert!((sim.bird().y() - 250.0).abs() < f64::EPSILON);
        assert_eq!(sim.ground().tiles(), [0.0, 672.0]);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = GameConfig::default();
        config.obstacles.gap = -1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = Simulation::new(config, Arc::new(SpriteSheet::procedural()), &mut rng);
        assert!(matches!(result, Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_tick_scrolls_world_together() {
        let (mut sim, mut rng) = sim();
        let result = sim.tick(TickInput::IDLE, &mut rng).unwrap();
        assert!(result.death.is_none());
        assert_eq!(result.snapshot.tick, 1);
        assert!((result.snapshot.obstacles[0].x - 695.0).abs() < f64::EPSILON);
        assert_eq!(result.snapshot.ground.tiles, [-5.0, 667.0]);
    }

    #[test]
    fn test_jump_applies_before_motion() {
        let (mut sim, mut rng) = sim();
        sim.tick(TickInput::JUMP, &mut rng).unwrap();
        // -10.5 + 1.5 = -9, boosted to -11.
        assert!((sim.bird().y() - 239.0).abs() < 1e-9);
        assert_eq!(sim.bird().ticks_since_jump(), 1);
    }

    #[test]
    fn test_tick_after_terminal_is_rejected() {
        let (mut sim, mut rng) = sim();
        let mut ticks = 0;
        while !sim.is_over() {
            sim.tick(TickInput::IDLE, &mut rng).unwrap();
            ticks += 1;
            assert!(ticks < 1000);
        }
        let score = sim.score();
        let err = sim.tick(TickInput::JUMP, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EpisodeOver { .. }));
        assert_eq!(sim.score(), score);
        assert_eq!(sim.tick_count(), ticks);
    }

    #[test]
    fn test_pipe_hit_short_circuits_tick() {
        let mut sim =
            Simulation::empty(GameConfig::default(), Arc::new(SpriteSheet::procedural())).unwrap();
        // Gap far below the bird: the top segment covers it. The pipe is
        // also already behind the bird, yet must not be credited.
        sim.obstacles_mut().push_with_height(226.0, 420.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = sim.tick(TickInput::IDLE, &mut rng).unwrap();
        assert_eq!(result.death, Some(DeathCause::Pipe));
        assert!(!result.scored);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.obstacles().len(), 1);
        assert_eq!(sim.phase(), Phase::Terminal(DeathCause::Pipe));
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let (mut sim, mut rng) = sim();
        let before = sim.snapshot();
        sim.tick(TickInput::IDLE, &mut rng).unwrap();
        assert_eq!(before.tick, 0);
        assert!((before.obstacles[0].x - 700.0).abs() < f64::EPSILON);
        assert_ne!(before, sim.snapshot());
    }
}

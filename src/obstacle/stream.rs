//! The ordered set of live pipes.

use super::types::{Obstacle, ObstacleView};
use crate::core::config::ObstacleConfig;
use rand::Rng;

/// Live obstacles in spawn order. All scroll at one velocity, so spawn order
/// is also left-to-right order.
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
    gap: f64,
    min_height: u32,
    max_height: u32,
    /// Width of a pipe sprite, for the off-screen test.
    width: f64,
    /// Height of one segment sprite, for placing the top segment.
    segment_height: f64,
}

impl ObstacleStream {
    pub fn new(config: &ObstacleConfig, width: u32, segment_height: u32) -> Self {
        Self {
            obstacles: Vec::new(),
            gap: config.gap,
            min_height: config.min_height,
            max_height: config.max_height,
            width: width as f64,
            segment_height: segment_height as f64,
        }
    }

    /// Append a pipe at `x` with a gap top drawn uniformly from the
    /// configured range.
    pub fn spawn<R: Rng>(&mut self, x: f64, rng: &mut R) -> &Obstacle {
        let height = rng.gen_range(self.min_height..self.max_height) as f64;
        log::debug!("spawned pipe at x={} with gap top {}", x, height);
        self.push_with_height(x, height)
    }

    /// Append a pipe with an explicit gap top.
    pub fn push_with_height(&mut self, x: f64, height: f64) -> &Obstacle {
        self.obstacles
            .push(Obstacle::new(x, height, self.gap, self.segment_height));
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every pipe left by `velocity`.
    pub fn advance(&mut self, velocity: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= velocity;
        }
    }

    /// Drop pipes whose right edge has scrolled past the left boundary.
    /// Returns how many were removed.
    pub fn reap(&mut self) -> usize {
        let width = self.width;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.x + width >= 0.0);
        let reaped = before - self.obstacles.len();
        if reaped > 0 {
            log::debug!("reaped {} off-screen pipe(s)", reaped);
        }
        reaped
    }

    /// Mark every pipe now behind `bird_x` as passed. Each pipe reports at
    /// most once over its lifetime; the return value is the number of new
    /// pass transitions.
    pub fn update_pass_flags(&mut self, bird_x: f64) -> u32 {
        let mut transitions = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed() && obstacle.x < bird_x && obstacle.mark_passed() {
                transitions += 1;
            }
        }
        transitions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn views(&self) -> Vec<ObstacleView> {
        self.obstacles.iter().map(Obstacle::view).collect()
    }
}

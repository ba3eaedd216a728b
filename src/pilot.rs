//! Programmatic controllers that stand in for the player.
//!
//! A pilot looks at the most recent snapshot before each tick and decides
//! whether to jump. It sees only the same immutable copy a renderer sees.

use crate::core::simulation::Snapshot;
use crate::sprite::SpriteSheet;

pub trait Pilot {
    /// Called once per tick before the simulation advances.
    fn wants_jump(&mut self, snapshot: &Snapshot) -> bool;

    fn name(&self) -> &'static str;
}

/// Never jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePilot;

impl Pilot for IdlePilot {
    fn wants_jump(&mut self, _snapshot: &Snapshot) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}

/// Holds the bird around a line a little below the middle of the next gap.
///
/// It jumps only while falling and below that line. One jump lifts the bird
/// roughly half a gap before it falls back, so the target sits below center
/// to keep the arc inside the opening.
#[derive(Debug, Clone)]
pub struct GapFollower {
    bird_width: f64,
    bird_height: f64,
    pipe_width: f64,
    /// Target distance below the gap center, as a fraction of the gap.
    aim: f64,
}

impl GapFollower {
    pub fn new(sprites: &SpriteSheet) -> Self {
        Self {
            bird_width: sprites.bird_width() as f64,
            bird_height: sprites.bird_height() as f64,
            pipe_width: sprites.pipe_width() as f64,
            aim: 0.2,
        }
    }

    /// The y the bird's center should hover around.
    pub fn target_line(&self, snapshot: &Snapshot) -> Option<f64> {
        // Keep aiming at a pipe until its trailing edge clears the bird's tail.
        let margin = self.bird_width / 4.0;
        snapshot
            .obstacles
            .iter()
            .find(|o| o.x + self.pipe_width >= snapshot.bird.x - margin)
            .map(|o| {
                let gap = o.bottom - o.gap_top;
                o.gap_top + gap / 2.0 + gap * self.aim
            })
    }
}

impl Pilot for GapFollower {
    fn wants_jump(&mut self, snapshot: &Snapshot) -> bool {
        let falling = snapshot.bird.last_displacement > 0.0;
        let center = snapshot.bird.y + self.bird_height / 2.0;
        match self.target_line(snapshot) {
            Some(target) => falling && center > target,
            None => false,
        }
    }

    fn name(&self) -> &'static str {
        "gap-follower"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::BirdPose;
    use crate::core::simulation::Phase;
    use crate::ground::GroundView;
    use crate::obstacle::ObstacleView;

    fn snapshot(bird_y: f64, last_displacement: f64, pipes: Vec<ObstacleView>) -> Snapshot {
        Snapshot {
            tick: 10,
            bird: BirdPose {
                x: 230.0,
                y: bird_y,
                tilt: 0.0,
                frame: 0,
                last_displacement,
            },
            obstacles: pipes,
            ground: GroundView {
                y: 730.0,
                width: 672.0,
                tiles: [0.0, 672.0],
            },
            score: 0,
            phase: Phase::Running,
        }
    }

    fn pipe(x: f64, gap_top: f64) -> ObstacleView {
        ObstacleView {
            x,
            top: gap_top - 640.0,
            gap_top,
            bottom: gap_top + 200.0,
            passed: x < 230.0,
        }
    }

    #[test]
    fn test_idle_never_jumps() {
        let mut pilot = IdlePilot;
        assert!(!pilot.wants_jump(&snapshot(600.0, 16.0, vec![pipe(400.0, 100.0)])));
    }

    #[test]
    fn test_target_skips_cleared_pipes() {
        let pilot = GapFollower::new(&SpriteSheet::procedural());
        let snap = snapshot(300.0, 5.0, vec![pipe(50.0, 100.0), pipe(500.0, 300.0)]);
        assert_eq!(pilot.target_line(&snap), Some(440.0));
    }

    #[test]
    fn test_jumps_only_when_falling_below_target() {
        let mut pilot = GapFollower::new(&SpriteSheet::procedural());
        // Gap 100..300, target 240; bird center = y + 24.
        let pipes = vec![pipe(400.0, 100.0)];
        assert!(pilot.wants_jump(&snapshot(230.0, 16.0, pipes.clone())));
        assert!(!pilot.wants_jump(&snapshot(230.0, -11.0, pipes.clone())));
        assert!(!pilot.wants_jump(&snapshot(150.0, 16.0, pipes)));
    }

    #[test]
    fn test_no_pipes_no_jump() {
        let mut pilot = GapFollower::new(&SpriteSheet::procedural());
        assert!(!pilot.wants_jump(&snapshot(500.0, 16.0, vec![])));
    }
}

//! The bird and its kinematics.
//!
//! Motion is a discrete closed form rather than an integrator: every tick the
//! bird moves by `d = v*t + a*t²`, where `t` counts ticks since the last jump.
//! The result is clamped to a terminal fall speed and exaggerated while
//! climbing. Tilt and wing animation follow from the displacement.

use crate::core::config::KinematicsConfig;
use crate::sprite::{Mask, SpriteSheet, MID_FRAME};
use serde::{Deserialize, Serialize};

/// Wing frame shown in each quarter of the flap cycle: up, level, down, level.
const FLAP_CYCLE: [usize; 4] = [0, MID_FRAME, 2, MID_FRAME];

/// Raw displacement for velocity `v` after `t` ticks, before clamping.
pub fn raw_displacement(velocity: f64, ticks: u32, k: &KinematicsConfig) -> f64 {
    let t = ticks as f64;
    velocity * t + k.acceleration * t * t
}

/// Displacement actually applied for one tick: falls are capped at the
/// terminal displacement, climbs get an extra boost.
pub fn clamped_displacement(velocity: f64, ticks: u32, k: &KinematicsConfig) -> f64 {
    let d = raw_displacement(velocity, ticks, k);
    if d >= k.terminal_displacement {
        k.terminal_displacement
    } else if d < 0.0 {
        d - k.ascent_boost
    } else {
        d
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed for the whole episode; the world scrolls instead.
    x: f64,
    y: f64,
    velocity: f64,
    /// Ticks since the last jump.
    tick_count: u32,
    /// Degrees, positive = nose up.
    tilt: f64,
    /// Height the last jump started from.
    jump_height: f64,
    /// Position within the flap cycle.
    anim_tick: u32,
    frame: usize,
    /// Displacement applied on the most recent tick.
    last_displacement: f64,
}

impl Bird {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            tick_count: 0,
            tilt: 0.0,
            jump_height: y,
            anim_tick: 0,
            frame: 0,
            last_displacement: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Ticks since the last jump.
    pub fn ticks_since_jump(&self) -> u32 {
        self.tick_count
    }

    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    pub fn jump_height(&self) -> f64 {
        self.jump_height
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Impulse: restart the arc from the current height.
    pub fn jump(&mut self, k: &KinematicsConfig) {
        self.velocity = k.jump_velocity;
        self.tick_count = 0;
        self.jump_height = self.y;
    }

    /// Advance one tick of motion, tilt and wing animation. Returns the
    /// displacement applied.
    pub fn advance(&mut self, k: &KinematicsConfig) -> f64 {
        self.tick_count += 1;
        let d = clamped_displacement(self.velocity, self.tick_count, k);
        self.y += d;
        self.last_displacement = d;

        if d < 0.0 || self.y < self.jump_height + k.tilt_hold_margin {
            if self.tilt < k.max_tilt {
                self.tilt = k.max_tilt;
            }
        } else {
            self.tilt = (self.tilt - k.rotation_velocity).max(k.min_tilt);
        }

        self.animate(k);
        d
    }

    fn animate(&mut self, k: &KinematicsConfig) {
        let period = k.animation_ticks * FLAP_CYCLE.len() as u32;
        self.anim_tick = (self.anim_tick + 1) % period;
        self.frame = FLAP_CYCLE[(self.anim_tick / k.animation_ticks) as usize];

        // No flapping in a nosedive; resume from mid-cycle on recovery.
        if self.tilt <= k.nosedive_tilt {
            self.frame = MID_FRAME;
            self.anim_tick = k.animation_ticks * 2;
        }
    }

    pub fn pose(&self) -> BirdPose {
        BirdPose {
            x: self.x,
            y: self.y,
            tilt: self.tilt,
            frame: self.frame,
            last_displacement: self.last_displacement,
        }
    }
}

/// Where and how the bird is drawn on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdPose {
    pub x: f64,
    pub y: f64,
    pub tilt: f64,
    pub frame: usize,
    pub last_displacement: f64,
}

impl BirdPose {
    /// The rotated mask for this pose, placed so it shares its center with
    /// the unrotated frame at `(x, y)`.
    pub fn shape(&self, sprites: &SpriteSheet) -> BirdShape {
        let frame = sprites.bird_frame(self.frame);
        let mask = frame.rotated(self.tilt);
        let x = self.x + (frame.width() as f64 - mask.width() as f64) / 2.0;
        let y = self.y + (frame.height() as f64 - mask.height() as f64) / 2.0;
        BirdShape {
            mask,
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

/// A bird mask with its top-left corner in world pixels.
#[derive(Debug, Clone)]
pub struct BirdShape {
    pub mask: Mask,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k() -> KinematicsConfig {
        KinematicsConfig::default()
    }

    #[test]
    fn test_fall_is_capped_at_terminal_displacement() {
        let k = k();
        for t in 1..40 {
            let d = clamped_displacement(0.0, t, &k);
            assert!(d <= 16.0);
            if raw_displacement(0.0, t, &k) >= 16.0 {
                assert!((d - 16.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_climb_gets_boost() {
        let k = k();
        // v = -10.5, t = 1: raw = -9
        let raw = raw_displacement(-10.5, 1, &k);
        assert!((raw - (-9.0)).abs() < 1e-9);
        assert!((clamped_displacement(-10.5, 1, &k) - (-11.0)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_resets_arc() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        for _ in 0..5 {
            bird.advance(&k);
        }
        bird.jump(&k);
        assert!((bird.velocity - (-10.5)).abs() < f64::EPSILON);
        assert_eq!(bird.tick_count, 0);
        assert!((bird.jump_height - bird.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accessors_report_motion_state() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        bird.advance(&k);
        bird.advance(&k);
        assert_eq!(bird.ticks_since_jump(), 2);
        assert!((bird.y() - 257.5).abs() < 1e-9);

        bird.jump(&k);
        assert!((bird.velocity() - (-10.5)).abs() < f64::EPSILON);
        assert!((bird.jump_height() - 257.5).abs() < f64::EPSILON);
        bird.advance(&k);
        assert!((bird.y() - 246.5).abs() < 1e-9);
        assert!((bird.tilt() - 25.0).abs() < f64::EPSILON);
        assert_eq!(bird.frame(), bird.pose().frame);
    }

    #[test]
    fn test_x_never_changes() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        for i in 0..50 {
            if i % 7 == 0 {
                bird.jump(&k);
            }
            bird.advance(&k);
            assert!((bird.x() - 230.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_tilt_snaps_up_then_noses_down() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        bird.advance(&k);
        assert!((bird.tilt - 25.0).abs() < f64::EPSILON);

        // Falling well below the jump height rotates down 20 degrees a tick.
        let mut previous = bird.tilt;
        let mut saw_rotation = false;
        for _ in 0..20 {
            bird.advance(&k);
            if bird.tilt < previous {
                assert!((previous - bird.tilt - 20.0).abs() < 1e-9 || bird.tilt == -90.0);
                saw_rotation = true;
            }
            previous = bird.tilt;
        }
        assert!(saw_rotation);
        assert!((bird.tilt - (-90.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tilt_stays_within_bounds() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        for i in 0..200 {
            if i % 23 == 0 {
                bird.jump(&k);
            }
            bird.advance(&k);
            assert!(bird.tilt >= -90.0 && bird.tilt <= 25.0);
        }
    }

    #[test]
    fn test_flap_cycle_period() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        let mut frames = Vec::new();
        for _ in 0..20 {
            // Keep the bird level so the nosedive freeze never kicks in.
            bird.jump(&k);
            bird.advance(&k);
            frames.push(bird.frame);
        }
        assert_eq!(&frames[0..4], &[0, 0, 0, 0]);
        assert_eq!(&frames[4..9], &[1, 1, 1, 1, 1]);
        assert_eq!(&frames[9..14], &[2, 2, 2, 2, 2]);
        assert_eq!(&frames[14..19], &[1, 1, 1, 1, 1]);
        assert_eq!(frames[19], 0);
    }

    #[test]
    fn test_nosedive_freezes_wings() {
        let k = k();
        let mut bird = Bird::new(230.0, 250.0);
        while bird.tilt > -80.0 {
            bird.advance(&k);
        }
        for _ in 0..10 {
            bird.advance(&k);
            assert_eq!(bird.frame, MID_FRAME);
            assert_eq!(bird.anim_tick, 10);
        }
        // Recovery resumes from the middle of the cycle.
        bird.jump(&k);
        bird.advance(&k);
        assert_eq!(bird.anim_tick, 11);
        assert_eq!(bird.frame, 2);
    }

    #[test]
    fn test_level_pose_shape_matches_frame() {
        let sprites = SpriteSheet::procedural();
        let pose = BirdPose {
            x: 230.0,
            y: 250.4,
            tilt: 0.0,
            frame: 0,
            last_displacement: 0.0,
        };
        let shape = pose.shape(&sprites);
        assert_eq!(shape.x, 230);
        assert_eq!(shape.y, 250);
        assert_eq!(&shape.mask, sprites.bird_frame(0));
    }

    #[test]
    fn test_tilted_shape_keeps_center() {
        let sprites = SpriteSheet::procedural();
        let pose = BirdPose {
            x: 230.0,
            y: 250.0,
            tilt: 25.0,
            frame: 1,
            last_displacement: -11.0,
        };
        let shape = pose.shape(&sprites);
        let cx = shape.x as f64 + shape.mask.width() as f64 / 2.0;
        let cy = shape.y as f64 + shape.mask.height() as f64 / 2.0;
        assert!((cx - 264.0).abs() <= 1.0);
        assert!((cy - 274.0).abs() <= 1.0);
    }
}

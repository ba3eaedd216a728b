//! A single pipe pair.

use serde::{Deserialize, Serialize};

/// A top and bottom pipe segment with a fixed gap between them.
///
/// `height` is the y of the gap's upper edge (the top segment's bottom edge);
/// the bottom segment starts exactly `gap` below it. Neither changes after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    height: f64,
    gap: f64,
    segment_height: f64,
    passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, height: f64, gap: f64, segment_height: f64) -> Self {
        Self {
            x,
            height,
            gap,
            segment_height,
            passed: false,
        }
    }

    /// Upper edge of the gap.
    pub fn gap_top(&self) -> f64 {
        self.height
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Top-left y of the top segment's mask.
    pub fn top(&self) -> f64 {
        self.height - self.segment_height
    }

    /// Top-left y of the bottom segment's mask (lower edge of the gap).
    pub fn bottom(&self) -> f64 {
        self.height + self.gap
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Flip the pass flag. Returns true only on the first call.
    pub(crate) fn mark_passed(&mut self) -> bool {
        if self.passed {
            return false;
        }
        self.passed = true;
        true
    }

    pub fn view(&self) -> ObstacleView {
        ObstacleView {
            x: self.x,
            top: self.top(),
            gap_top: self.gap_top(),
            bottom: self.bottom(),
            passed: self.passed,
        }
    }
}

/// Immutable copy of an obstacle for renderers and pilots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f64,
    pub top: f64,
    pub gap_top: f64,
    pub bottom: f64,
    pub passed: bool,
}

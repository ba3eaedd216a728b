//! The scrolling ground strip.
//!
//! Two identical tiles sit side by side; whichever scrolls fully off the left
//! edge is moved to follow the other, so the strip never shows a seam.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    y: f64,
    width: f64,
    tiles: [f64; 2],
}

impl Ground {
    pub fn new(y: f64, width: u32) -> Self {
        let width = width as f64;
        Self {
            y,
            width,
            tiles: [0.0, width],
        }
    }

    /// Scroll both tiles left by `velocity`, wrapping any tile that has left
    /// the screen to the right edge of the other.
    pub fn advance(&mut self, velocity: f64) {
        self.tiles[0] -= velocity;
        self.tiles[1] -= velocity;

        if self.tiles[0] + self.width < 0.0 {
            self.tiles[0] = self.tiles[1] + self.width;
        }
        if self.tiles[1] + self.width < 0.0 {
            self.tiles[1] = self.tiles[0] + self.width;
        }
    }

    /// The line the bird dies on.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn tiles(&self) -> [f64; 2] {
        self.tiles
    }

    pub fn view(&self) -> GroundView {
        GroundView {
            y: self.y,
            width: self.width,
            tiles: self.tiles,
        }
    }
}

/// Immutable copy of the ground for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundView {
    pub y: f64,
    pub width: f64,
    pub tiles: [f64; 2],
}

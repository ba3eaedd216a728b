//! The sprite sheet: shapes of every visual entity.
//!
//! The simulation never sees pixels, only masks and dimensions. The sheet is
//! built once at startup and shared read-only between the simulation and the
//! renderer.

use super::mask::Mask;
use crate::core::constants::*;
use crate::core::error::GameError;

/// Index of the level-wing frame shown mid-flap and during a nosedive.
pub const MID_FRAME: usize = 1;

#[derive(Debug, Clone)]
pub struct SpriteSheet {
    bird_frames: Vec<Mask>,
    pipe_top: Mask,
    pipe_bottom: Mask,
    ground_width: u32,
    ground_height: u32,
}

impl SpriteSheet {
    /// Assemble a sheet from explicit masks. The pipe mask is the bottom
    /// segment; the top segment is its vertical mirror.
    pub fn new(
        bird_frames: Vec<Mask>,
        pipe: Mask,
        ground_width: u32,
        ground_height: u32,
    ) -> Result<Self, GameError> {
        if bird_frames.len() != BIRD_FRAME_COUNT {
            return Err(GameError::sprite(format!(
                "expected {} bird frames, got {}",
                BIRD_FRAME_COUNT,
                bird_frames.len()
            )));
        }
        if bird_frames.iter().any(Mask::is_empty) || pipe.is_empty() {
            return Err(GameError::sprite("sprite masks must have non-zero size"));
        }
        if ground_width == 0 {
            return Err(GameError::sprite("ground tile width must be positive"));
        }
        Ok(Self {
            bird_frames,
            pipe_top: pipe.flipped_vertical(),
            pipe_bottom: pipe,
            ground_width,
            ground_height,
        })
    }

    /// The built-in art: an oval bird with a beak and three wing positions,
    /// and a pipe with a wider lip at its open end.
    pub fn procedural() -> Self {
        let bird_frames = [12.0, 26.0, 38.0]
            .iter()
            .map(|&wing_y| bird_frame(wing_y))
            .collect();
        Self {
            bird_frames,
            pipe_top: pipe_segment().flipped_vertical(),
            pipe_bottom: pipe_segment(),
            ground_width: GROUND_TILE_WIDTH,
            ground_height: GROUND_TILE_HEIGHT,
        }
    }

    /// Mask for a wing frame; out-of-range indices wrap.
    pub fn bird_frame(&self, frame: usize) -> &Mask {
        &self.bird_frames[frame % self.bird_frames.len()]
    }

    pub fn bird_width(&self) -> u32 {
        self.bird_frames[0].width()
    }

    pub fn bird_height(&self) -> u32 {
        self.bird_frames[0].height()
    }

    pub fn pipe_top(&self) -> &Mask {
        &self.pipe_top
    }

    pub fn pipe_bottom(&self) -> &Mask {
        &self.pipe_bottom
    }

    pub fn pipe_width(&self) -> u32 {
        self.pipe_bottom.width()
    }

    pub fn pipe_height(&self) -> u32 {
        self.pipe_bottom.height()
    }

    pub fn ground_width(&self) -> u32 {
        self.ground_width
    }

    pub fn ground_height(&self) -> u32 {
        self.ground_height
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::procedural()
    }
}

fn inside_ellipse(x: u32, y: u32, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn bird_frame(wing_y: f64) -> Mask {
    Mask::from_fn(BIRD_SPRITE_WIDTH, BIRD_SPRITE_HEIGHT, |x, y| {
        let body = inside_ellipse(x, y, 32.0, 25.0, 26.0, 18.0);
        let wing = inside_ellipse(x, y, 20.0, wing_y, 13.0, 8.0);
        // Beak: a wedge off the right side of the body.
        let beak = (54..68).contains(&x) && {
            let reach = (x - 54) as f64 / 2.0;
            (y as f64 - 28.0).abs() <= 6.0 - reach
        };
        body || wing || beak
    })
}

fn pipe_segment() -> Mask {
    Mask::from_fn(PIPE_SPRITE_WIDTH, PIPE_SPRITE_HEIGHT, |x, y| {
        y < PIPE_LIP_HEIGHT || (PIPE_LIP_INSET..PIPE_SPRITE_WIDTH - PIPE_LIP_INSET).contains(&x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_dimensions() {
        let sheet = SpriteSheet::procedural();
        assert_eq!(sheet.bird_width(), 68);
        assert_eq!(sheet.bird_height(), 48);
        assert_eq!(sheet.pipe_width(), 104);
        assert_eq!(sheet.pipe_height(), 640);
        assert_eq!(sheet.ground_width(), 672);
    }

    #[test]
    fn test_wing_frames_differ() {
        let sheet = SpriteSheet::procedural();
        assert_ne!(sheet.bird_frame(0), sheet.bird_frame(1));
        assert_ne!(sheet.bird_frame(1), sheet.bird_frame(2));
        assert_eq!(sheet.bird_frame(3), sheet.bird_frame(0));
    }

    #[test]
    fn test_pipe_lip_faces_the_gap() {
        let sheet = SpriteSheet::procedural();
        let bottom = sheet.pipe_bottom();
        let top = sheet.pipe_top();
        // Bottom segment: lip at its top edge, narrower body below.
        assert!(bottom.get(0, 0));
        assert!(!bottom.get(0, 100));
        assert!(bottom.get(50, 100));
        // Top segment is mirrored: lip along its bottom edge.
        assert!(top.get(0, 639));
        assert!(!top.get(0, 0));
    }

    #[test]
    fn test_new_rejects_wrong_frame_count() {
        let frame = Mask::from_fn(4, 4, |_, _| true);
        let pipe = Mask::from_fn(4, 20, |_, _| true);
        let result = SpriteSheet::new(vec![frame.clone(), frame], pipe, 10, 4);
        assert!(matches!(result, Err(GameError::InvalidSprite { .. })));
    }

    #[test]
    fn test_new_mirrors_pipe() {
        let frame = Mask::from_fn(4, 4, |_, _| true);
        let pipe = Mask::from_rows(&["####", ".##.", ".##."]);
        let sheet = SpriteSheet::new(vec![frame.clone(), frame.clone(), frame], pipe, 10, 4).unwrap();
        assert!(sheet.pipe_bottom().get(0, 0));
        assert!(sheet.pipe_top().get(0, 2));
        assert!(!sheet.pipe_top().get(0, 0));
    }
}

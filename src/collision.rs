//! Pixel-exact collision between the bird and pipes.
//!
//! Bounding boxes are not enough here: the tilted bird and the pipe lips
//! leave empty corners that would register hits near the gap edges.

use crate::bird::BirdShape;
use crate::obstacle::{Obstacle, ObstacleStream};
use crate::sprite::SpriteSheet;

/// True if any opaque bird pixel overlaps an opaque pixel of either segment.
pub fn collides(bird: &BirdShape, obstacle: &Obstacle, sprites: &SpriteSheet) -> bool {
    let pipe_x = obstacle.x.round() as i32;
    let top_offset = (pipe_x - bird.x, obstacle.top().round() as i32 - bird.y);
    let bottom_offset = (pipe_x - bird.x, obstacle.bottom().round() as i32 - bird.y);

    bird.mask.overlap(sprites.pipe_top(), top_offset).is_some()
        || bird.mask.overlap(sprites.pipe_bottom(), bottom_offset).is_some()
}

/// First pipe in the stream the bird touches, if any.
pub fn first_hit<'a>(
    bird: &BirdShape,
    stream: &'a ObstacleStream,
    sprites: &SpriteSheet,
) -> Option<&'a Obstacle> {
    stream.iter().find(|o| collides(bird, o, sprites))
}

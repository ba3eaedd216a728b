//! Sprite shapes: opacity masks and the sheet that provides them.

pub mod mask;
pub mod sheet;

pub use mask::Mask;
pub use sheet::{SpriteSheet, MID_FRAME};

//! Per-pixel opacity bitmaps used for exact collision tests.

/// A rectangular bitmap of opaque pixels.
///
/// Coordinates follow screen convention: `(0, 0)` is the top-left pixel and
/// y grows downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// A fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Build a mask by evaluating `opaque(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if opaque(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Build a mask from rows of text where `#` marks an opaque pixel.
    /// Short rows are padded with transparent pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        Self::from_fn(width, height, |x, y| {
            rows[y as usize].chars().nth(x as usize) == Some('#')
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Opacity at `(x, y)`; anything outside the bitmap is transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = opaque;
        }
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Mirror top-to-bottom.
    pub fn flipped_vertical(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.width, h, |x, y| self.get(x as i32, (h - 1 - y) as i32))
    }

    /// Rotate counter-clockwise (as seen on screen) by `degrees` about the
    /// center. The result is grown to the rotated bounding box and keeps the
    /// same center, so a sprite at top-left `(x, y)` is drawn rotated at
    /// `(x + (w - w')/2, y + (h - h')/2)`.
    pub fn rotated(&self, degrees: f64) -> Self {
        if degrees == 0.0 || self.is_empty() {
            return self.clone();
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let w = self.width as f64;
        let h = self.height as f64;
        // Trim float noise so 90° turns don't gain a spurious row.
        let new_w = ((w * cos.abs() + h * sin.abs()) - 1e-9).ceil().max(1.0);
        let new_h = ((w * sin.abs() + h * cos.abs()) - 1e-9).ceil().max(1.0);
        let (cx, cy) = (w / 2.0, h / 2.0);
        let (ncx, ncy) = (new_w / 2.0, new_h / 2.0);

        Self::from_fn(new_w as u32, new_h as u32, |dx, dy| {
            let rx = dx as f64 + 0.5 - ncx;
            let ry = dy as f64 + 0.5 - ncy;
            let sx = rx * cos - ry * sin + cx;
            let sy = rx * sin + ry * cos + cy;
            self.get(sx.floor() as i32, sy.floor() as i32)
        })
    }

    /// First opaque pixel shared with `other` when `other`'s top-left sits at
    /// `offset` relative to this mask's top-left. Returns the pixel in this
    /// mask's coordinates, or `None` when nothing overlaps.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (ox, oy) = offset;
        let x_start = ox.max(0);
        let y_start = oy.max(0);
        let x_end = (self.width as i32).min(ox + other.width as i32);
        let y_end = (self.height as i32).min(oy + other.height as i32);

        // Disjoint bounding boxes leave an empty range here.
        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - ox, y - oy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let mask = Mask::from_rows(&["#.", ".#", "#"]);
        assert_eq!(mask.width(), 2);
        assert_eq!(mask.height(), 3);
        assert!(mask.get(0, 0));
        assert!(!mask.get(1, 0));
        assert!(mask.get(1, 1));
        assert!(!mask.get(1, 2));
        assert_eq!(mask.count(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_transparent() {
        let mask = Mask::from_fn(3, 3, |_, _| true);
        assert!(!mask.get(-1, 0));
        assert!(!mask.get(0, 3));
        assert!(!mask.get(3, 0));
    }

    #[test]
    fn test_overlap_solid_squares() {
        let a = Mask::from_fn(10, 10, |_, _| true);
        let b = Mask::from_fn(10, 10, |_, _| true);
        assert_eq!(a.overlap(&b, (5, 5)), Some((5, 5)));
        assert_eq!(a.overlap(&b, (-9, -9)), Some((0, 0)));
    }

    #[test]
    fn test_disjoint_bounds_never_overlap() {
        let a = Mask::from_fn(10, 10, |_, _| true);
        let b = Mask::from_fn(10, 10, |_, _| true);
        assert_eq!(a.overlap(&b, (10, 0)), None);
        assert_eq!(a.overlap(&b, (0, 10)), None);
        assert_eq!(a.overlap(&b, (-10, 0)), None);
        assert_eq!(a.overlap(&b, (-10, -10)), None);
        assert_eq!(a.overlap(&b, (500, -300)), None);
    }

    #[test]
    fn test_overlapping_bounds_without_shared_pixels() {
        // Two diagonal halves of a square: boxes coincide, pixels do not.
        let upper = Mask::from_fn(8, 8, |x, y| x > y);
        let lower = Mask::from_fn(8, 8, |x, y| x <= y);
        assert_eq!(upper.overlap(&lower, (0, 0)), None);
        assert!(upper.overlap(&upper, (0, 0)).is_some());
    }

    #[test]
    fn test_flipped_vertical() {
        let mask = Mask::from_rows(&["##", "..", "#."]);
        let flipped = mask.flipped_vertical();
        assert!(flipped.get(0, 0));
        assert!(!flipped.get(1, 0));
        assert!(flipped.get(0, 2));
        assert!(flipped.get(1, 2));
        assert_eq!(flipped.count(), mask.count());
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let mask = Mask::from_rows(&["#..", "##.", "###"]);
        assert_eq!(mask.rotated(0.0), mask);
    }

    #[test]
    fn test_rotate_quarter_turn_counter_clockwise() {
        // Right-hand column moves to the top row.
        let mask = Mask::from_rows(&["...#", "...#"]);
        let turned = mask.rotated(90.0);
        assert_eq!(turned.width(), 2);
        assert_eq!(turned.height(), 4);
        assert!(turned.get(0, 0));
        assert!(turned.get(1, 0));
        assert_eq!(turned.count(), 2);
    }

    #[test]
    fn test_rotate_grows_bounding_box() {
        let mask = Mask::from_fn(68, 48, |_, _| true);
        let tilted = mask.rotated(25.0);
        assert!(tilted.width() > 68);
        assert!(tilted.height() > 48);
    }
}

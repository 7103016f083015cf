//! Content bounds detection.
//!
//! Finds the tight bounding box of visible pixels in a buffer. Every
//! downstream operation that anchors or measures a sprite goes through this.

use crate::types::PixelBuffer;

/// Alpha values above this count as visible content (0-255).
///
/// Slightly above zero so near-invisible anti-aliasing residue does not
/// inflate the measured bounds.
pub const ALPHA_VISIBLE: u8 = 10;

/// The smallest axis-aligned rectangle containing all visible pixels of a
/// buffer, in that buffer's own pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ContentBounds {
    /// Bounds covering an entire buffer extent.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Measure the content bounds of a buffer.
    ///
    /// A pixel is content iff its alpha exceeds [`ALPHA_VISIBLE`]. A buffer
    /// with no content at all yields the full buffer extent, never an empty
    /// rectangle: callers divide by these dimensions when computing scale
    /// factors and must not need to special-case "no content".
    pub fn of(buffer: &PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();

        let mut min_x = width;
        let mut min_y = height;
        let mut max_x = 0u32;
        let mut max_y = 0u32;

        for y in 0..height {
            for x in 0..width {
                if buffer.alpha(x, y) > ALPHA_VISIBLE {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }

        // Fully transparent: fall back to the whole buffer.
        if min_x > max_x || min_y > max_y {
            return Self::full(width, height);
        }

        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottommost row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_fully_transparent_falls_back_to_extent() {
        let buffer = PixelBuffer::new(7, 5);
        let bounds = ContentBounds::of(&buffer);
        assert_eq!(bounds, ContentBounds::full(7, 5));
    }

    #[test]
    fn test_single_pixel_bounds() {
        let mut buffer = PixelBuffer::new(16, 16);
        buffer.set(5, 7, Colour::rgb(255, 0, 0));

        let bounds = ContentBounds::of(&buffer);
        assert_eq!(
            bounds,
            ContentBounds {
                x: 5,
                y: 7,
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_bounds_span_multiple_pixels() {
        let mut buffer = PixelBuffer::new(10, 10);
        buffer.set(2, 3, Colour::rgb(0, 0, 255));
        buffer.set(8, 6, Colour::rgb(0, 0, 255));

        let bounds = ContentBounds::of(&buffer);
        assert_eq!(bounds.x, 2);
        assert_eq!(bounds.y, 3);
        assert_eq!(bounds.width, 7);
        assert_eq!(bounds.height, 4);
    }

    #[test]
    fn test_threshold_excludes_faint_pixels() {
        let mut buffer = PixelBuffer::new(8, 8);
        // Alpha at the threshold is not content; one above is.
        buffer.set(1, 1, Colour::new(255, 255, 255, ALPHA_VISIBLE));
        buffer.set(4, 4, Colour::new(255, 255, 255, ALPHA_VISIBLE + 1));

        let bounds = ContentBounds::of(&buffer);
        assert_eq!(
            bounds,
            ContentBounds {
                x: 4,
                y: 4,
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_right_bottom() {
        let bounds = ContentBounds {
            x: 2,
            y: 3,
            width: 4,
            height: 5,
        };
        assert_eq!(bounds.right(), 6);
        assert_eq!(bounds.bottom(), 8);
    }
}

//! PNG codec boundary.
//!
//! The pipeline's contract begins once a `PixelBuffer` exists in memory;
//! this module is the only place encoded images are touched. Round-tripping
//! a buffer through `write_png` and `read_png` preserves exact pixel values.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{FramepackError, Result};
use crate::types::PixelBuffer;

/// Decode a PNG file into a pixel buffer.
pub fn read_png(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| FramepackError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(FramepackError::Precondition {
            message: format!("Image has zero dimensions ({}x{})", width, height),
            help: Some("Input image must have non-zero width and height".to_string()),
        });
    }

    PixelBuffer::from_raw(width, height, img.into_raw())
}

/// Encode a pixel buffer to a PNG file.
///
/// `scale` is an integer nearest-neighbour upscale factor for pixel-art
/// export (1 = no scaling).
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let scaled;
    let out = if scale > 1 {
        scaled = scale_buffer(buffer, scale);
        &scaled
    } else {
        buffer
    };

    let img: RgbaImage =
        ImageBuffer::from_raw(out.width(), out.height(), out.data().to_vec()).ok_or_else(|| {
            FramepackError::Precondition {
                message: "Pixel buffer does not match its declared dimensions".to_string(),
                help: None,
            }
        })?;

    img.save(path).map_err(|e| FramepackError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Upscale a buffer by an integer factor, nearest-neighbour.
///
/// Keeps pixel art crisp; never used for downscaling.
pub fn scale_buffer(buffer: &PixelBuffer, scale: u32) -> PixelBuffer {
    if scale <= 1 {
        return buffer.clone();
    }

    let mut out = PixelBuffer::new(buffer.width() * scale, buffer.height() * scale);

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let colour = buffer.get(x, y);
            for sy in 0..scale {
                for sx in 0..scale {
                    out.set(x * scale + sx, y * scale + sy, colour);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set(0, 0, Colour::new(255, 0, 0, 255));
        buffer.set(1, 0, Colour::new(0, 255, 0, 128));
        buffer.set(2, 1, Colour::new(12, 34, 56, 78));

        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        write_png(&buffer, &path, 1).unwrap();
        let loaded = read_png(&path).unwrap();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.data(), buffer.data());
    }

    #[test]
    fn test_write_png_scaled() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set(0, 0, Colour::rgb(255, 0, 0));
        buffer.set(1, 0, Colour::rgb(0, 255, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&buffer, &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let buffer = PixelBuffer::filled(1, 1, Colour::BLACK);

        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");

        write_png(&buffer, &path, 0).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 1);
        assert_eq!(img.height(), 1);
    }

    #[test]
    fn test_read_png_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_png(&dir.path().join("nope.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scale_buffer() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set(0, 0, Colour::BLACK);
        buffer.set(1, 0, Colour::WHITE);

        let scaled = scale_buffer(&buffer, 2);
        assert_eq!(scaled.dimensions(), (4, 2));
        assert_eq!(scaled.get(0, 0), Colour::BLACK);
        assert_eq!(scaled.get(1, 1), Colour::BLACK);
        assert_eq!(scaled.get(2, 0), Colour::WHITE);
        assert_eq!(scaled.get(3, 1), Colour::WHITE);
    }

    #[test]
    fn test_scale_buffer_identity() {
        let buffer = PixelBuffer::filled(2, 2, Colour::BLACK);
        let scaled = scale_buffer(&buffer, 1);
        assert_eq!(scaled, buffer);
    }
}

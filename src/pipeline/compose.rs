//! Sheet composition.
//!
//! The inverse of slicing: arranges frames back into a single sheet canvas.
//! Cell iteration order matches the slicer exactly so a slice/compose round
//! trip reproduces the source sheet pixel for pixel.

use crate::error::{FramepackError, Result};
use crate::types::{DirectionSet8, Frame, PixelBuffer};

/// Arrange frames into a row-major sheet of `columns` cells per row.
///
/// All frames must share identical dimensions; mixing sizes indicates a
/// logic error upstream, not a recoverable runtime condition. Frame `i`
/// lands at cell `(i % columns, i / columns)`.
pub fn compose_flat(frames: &[Frame], columns: u32) -> Result<PixelBuffer> {
    if columns == 0 {
        return Err(FramepackError::InvalidGrid {
            message: "Sheet must have at least one column".to_string(),
            help: None,
        });
    }
    let Some(first) = frames.first() else {
        return Err(FramepackError::Precondition {
            message: "No frames to compose".to_string(),
            help: None,
        });
    };

    let (frame_width, frame_height) = (first.width(), first.height());
    check_uniform(frames, frame_width, frame_height)?;

    let rows = (frames.len() as u32).div_ceil(columns);
    let mut sheet = PixelBuffer::new(columns * frame_width, rows * frame_height);

    for (i, frame) in frames.iter().enumerate() {
        let col = i as u32 % columns;
        let row = i as u32 / columns;
        sheet.blit(frame.pixels(), col * frame_width, row * frame_height);
    }

    Ok(sheet)
}

/// Arrange an 8-way direction set into a sheet with one row per direction.
///
/// Rows follow the canonical direction order. Each row holds up to
/// `columns` frames left-to-right; directions with fewer frames leave the
/// remaining cells transparent - uneven frame counts per direction are
/// expected, not an error. A set with no frames at all has no frame size to
/// allocate from and is rejected.
pub fn compose_directional(set: &DirectionSet8, columns: u32) -> Result<PixelBuffer> {
    if columns == 0 {
        return Err(FramepackError::InvalidGrid {
            message: "Sheet must have at least one column".to_string(),
            help: None,
        });
    }
    let Some((frame_width, frame_height)) = set.frame_size() else {
        return Err(FramepackError::Precondition {
            message: "Direction set has no frames to compose".to_string(),
            help: Some("Author at least one direction before exporting".to_string()),
        });
    };

    for (direction, frames) in set.iter() {
        for frame in frames {
            if frame.width() != frame_width || frame.height() != frame_height {
                return Err(FramepackError::Precondition {
                    message: format!(
                        "Frame size mismatch in direction {}: expected {}x{}, got {}x{}",
                        direction,
                        frame_width,
                        frame_height,
                        frame.width(),
                        frame.height()
                    ),
                    help: Some("Normalize frames to a uniform size before composing".to_string()),
                });
            }
        }
    }

    let mut sheet = PixelBuffer::new(columns * frame_width, 8 * frame_height);

    for (direction, frames) in set.iter() {
        let y = direction.row_index() as u32 * frame_height;
        for (i, frame) in frames.iter().take(columns as usize).enumerate() {
            sheet.blit(frame.pixels(), i as u32 * frame_width, y);
        }
    }

    Ok(sheet)
}

fn check_uniform(frames: &[Frame], width: u32, height: u32) -> Result<()> {
    for (i, frame) in frames.iter().enumerate() {
        if frame.width() != width || frame.height() != height {
            return Err(FramepackError::Precondition {
                message: format!(
                    "Frame size mismatch: frame 0 is {}x{} but frame {} is {}x{}",
                    width,
                    height,
                    i,
                    frame.width(),
                    frame.height()
                ),
                help: Some("Normalize frames to a uniform size before composing".to_string()),
            });
        }
    }
    Ok(())
}

//! Grid slicing.
//!
//! Partitions a sheet into an M x N grid of cells, each becoming an
//! independent frame. Selection and filtering of cells is a caller concern:
//! the slicer always produces every cell, transparent or not, in row-major
//! order so composition can reverse it exactly.

use crate::error::{FramepackError, Result};
use crate::types::{Direction, DirectionSet8, Frame, GridSpec, PixelBuffer};

/// Slice a sheet into `columns * rows` frames in row-major order.
///
/// Cell dimensions truncate (`sheet_width / columns`); remainder pixels on
/// the right and bottom edges belong to no cell. Sheets should be authored
/// as exact multiples of the grid for lossless slicing - the CLI warns when
/// they are not.
pub fn slice(sheet: &PixelBuffer, grid: &GridSpec) -> Result<Vec<Frame>> {
    let (cell_width, cell_height) = grid.cell_size(sheet.width(), sheet.height())?;

    let mut frames = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            let x = col * cell_width;
            let y = row * cell_height;
            let cell = sheet.extract(x, y, cell_width, cell_height);
            frames.push(Frame::new(cell, x, y));
        }
    }

    Ok(frames)
}

/// Slice an 8-row sheet into per-direction frame sequences.
///
/// Row `i` maps to `Direction::CANONICAL[i]`: row 0 is south, row 4 is
/// north. Any other row count is a caller error, never silently truncated
/// or wrapped.
pub fn slice_directions(sheet: &PixelBuffer, grid: &GridSpec) -> Result<DirectionSet8> {
    if grid.rows != 8 {
        return Err(FramepackError::InvalidGrid {
            message: format!(
                "Directional slicing requires exactly 8 rows, got {}",
                grid.rows
            ),
            help: Some(
                "Rows map to south, south_west, west, north_west, north, north_east, east, south_east in fixed order"
                    .to_string(),
            ),
        });
    }

    let frames = slice(sheet, grid)?;

    let mut set = DirectionSet8::new();
    for (i, frame) in frames.into_iter().enumerate() {
        let direction = Direction::CANONICAL[i / grid.columns as usize];
        set.push(direction, frame);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_slice_exact_grid() {
        // 128x48 sheet, 4x1 grid: 4 frames of 32x48.
        let sheet = PixelBuffer::filled(128, 48, Colour::rgb(1, 2, 3));
        let grid = GridSpec::new(4, 1).unwrap();

        let frames = slice(&sheet, &grid).unwrap();
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_eq!((frame.width(), frame.height()), (32, 48));
        }
    }

    #[test]
    fn test_slice_row_major_origins() {
        let sheet = PixelBuffer::new(6, 4);
        let grid = GridSpec::new(3, 2).unwrap();

        let frames = slice(&sheet, &grid).unwrap();
        let origins: Vec<(u32, u32)> = frames.iter().map(|f| f.origin()).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (2, 0), (4, 0), (0, 2), (2, 2), (4, 2)]
        );
    }

    #[test]
    fn test_slice_extracts_cell_content() {
        let mut sheet = PixelBuffer::new(4, 2);
        sheet.set(2, 0, Colour::rgb(255, 0, 0)); // cell (1, 0), local (0, 0)
        let grid = GridSpec::new(2, 1).unwrap();

        let frames = slice(&sheet, &grid).unwrap();
        assert_eq!(frames[1].pixels().get(0, 0), Colour::rgb(255, 0, 0));
        assert_eq!(frames[0].pixels().get(0, 0), Colour::TRANSPARENT);
    }

    #[test]
    fn test_slice_keeps_empty_cells() {
        // Transparent cells are produced like any other; filtering is the
        // caller's business.
        let sheet = PixelBuffer::new(8, 4);
        let grid = GridSpec::new(2, 1).unwrap();
        let frames = slice(&sheet, &grid).unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_slice_truncates_remainder() {
        // 10x10 with a 3x3 grid: 3x3 cells, 1px remainder each axis dropped.
        let sheet = PixelBuffer::filled(10, 10, Colour::rgb(7, 7, 7));
        let grid = GridSpec::new(3, 3).unwrap();

        let frames = slice(&sheet, &grid).unwrap();
        assert_eq!(frames.len(), 9);
        for frame in &frames {
            assert_eq!((frame.width(), frame.height()), (3, 3));
        }
        assert_eq!(frames[8].origin(), (6, 6));
    }

    #[test]
    fn test_slice_grid_too_fine() {
        let sheet = PixelBuffer::new(4, 4);
        let grid = GridSpec::new(8, 1).unwrap();
        assert!(slice(&sheet, &grid).is_err());
    }

    // -- slice_directions --

    #[test]
    fn test_directions_require_eight_rows() {
        let sheet = PixelBuffer::new(16, 16);
        let grid = GridSpec::new(4, 4).unwrap();
        assert!(slice_directions(&sheet, &grid).is_err());
    }

    #[test]
    fn test_directions_row_mapping() {
        // 2 columns x 8 rows; mark row 0 and row 4 with distinct colours.
        let mut sheet = PixelBuffer::new(8, 32); // 4x4 cells
        sheet.set(0, 0, Colour::rgb(255, 0, 0)); // row 0 -> south
        sheet.set(0, 16, Colour::rgb(0, 0, 255)); // row 4 -> north
        let grid = GridSpec::new(2, 8).unwrap();

        let set = slice_directions(&sheet, &grid).unwrap();
        assert_eq!(set.frames(Direction::South).len(), 2);
        assert_eq!(
            set.frames(Direction::South)[0].pixels().get(0, 0),
            Colour::rgb(255, 0, 0)
        );
        assert_eq!(
            set.frames(Direction::North)[0].pixels().get(0, 0),
            Colour::rgb(0, 0, 255)
        );
        assert_eq!(set.frame_count(), 16);
    }

    #[test]
    fn test_directions_playback_order_is_column_order() {
        let mut sheet = PixelBuffer::new(8, 8); // 2x8 grid of 4x1 cells
        sheet.set(0, 0, Colour::rgb(1, 0, 0));
        sheet.set(4, 0, Colour::rgb(2, 0, 0));
        let grid = GridSpec::new(2, 8).unwrap();

        let set = slice_directions(&sheet, &grid).unwrap();
        let south = set.frames(Direction::South);
        assert_eq!(south[0].pixels().get(0, 0), Colour::rgb(1, 0, 0));
        assert_eq!(south[1].pixels().get(0, 0), Colour::rgb(2, 0, 0));
    }
}

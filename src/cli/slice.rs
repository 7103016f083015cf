//! Slice command implementation.
//!
//! Partitions a sheet PNG into individual frame PNGs, optionally mapping
//! the rows of an 8-row sheet to compass directions.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::cli::parse_pair;
use crate::error::{FramepackError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{slice, slice_directions};
use crate::png::{read_png, write_png};
use crate::types::GridSpec;

/// Slice a sheet PNG into individual frame PNGs
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Sheet PNG to slice into frames
    #[arg(required = true)]
    pub input: PathBuf,

    /// Grid as COLUMNSxROWS (e.g. 4x8)
    #[arg(long)]
    pub grid: String,

    /// Map the 8 sheet rows to compass directions (south row first)
    #[arg(long)]
    pub directional: bool,

    /// Output directory for frame PNGs
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Base name for frame files (default: input filename stem)
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: SliceArgs, printer: &Printer) -> Result<()> {
    let path = &args.input;
    let display = display_path(path);

    if !path.exists() {
        return Err(FramepackError::Io {
            path: path.clone(),
            message: format!("File not found: {}", display),
        });
    }

    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning("Warning", &format!("{} does not have a .png extension", display));
    }

    printer.status("Loading", &display);
    let sheet = read_png(path)?;

    let (columns, rows) = parse_pair(&args.grid, "grid")?;
    let grid = GridSpec::new(columns, rows)?;

    // Remainder pixels fall outside every cell; surface that before slicing.
    let (rem_x, rem_y) = grid.remainder(sheet.width(), sheet.height());
    if rem_x > 0 {
        printer.warning(
            "Warning",
            &format!(
                "Sheet width {} is not divisible by {} columns; {}px on the right edge ignored",
                sheet.width(),
                columns,
                rem_x
            ),
        );
    }
    if rem_y > 0 {
        printer.warning(
            "Warning",
            &format!(
                "Sheet height {} is not divisible by {} rows; {}px on the bottom edge ignored",
                sheet.height(),
                rows,
                rem_y
            ),
        );
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| FramepackError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let base_name = args.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("frame")
            .to_string()
    });

    let (cell_width, cell_height) = grid.cell_size(sheet.width(), sheet.height())?;
    printer.status(
        "Slicing",
        &format!("{}x{} grid ({}x{} cells)", columns, rows, cell_width, cell_height),
    );

    let mut written = 0usize;
    if args.directional {
        let set = slice_directions(&sheet, &grid)?;
        for (direction, frames) in set.iter() {
            for (i, frame) in frames.iter().enumerate() {
                let file = args
                    .output
                    .join(format!("{}-{}-{}.png", base_name, direction, i));
                write_png(frame.pixels(), &file, 1)?;
                printer.verbose("Wrote", &display_path(&file));
                written += 1;
            }
        }
    } else {
        let frames = slice(&sheet, &grid)?;
        for (i, frame) in frames.iter().enumerate() {
            let row = i as u32 / columns;
            let col = i as u32 % columns;
            let file = args
                .output
                .join(format!("{}-{}-{}.png", base_name, row, col));
            write_png(frame.pixels(), &file, 1)?;
            printer.verbose("Wrote", &display_path(&file));
            written += 1;
        }
    }

    printer.info(
        "Finished",
        &format!(
            "{} -> {}",
            plural(written, "frame", "frames"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

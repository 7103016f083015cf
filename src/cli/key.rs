//! Key command implementation.
//!
//! Removes a flat chroma-key background from frames and optionally cleans
//! up the halo fringe the key leaves behind.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{FramepackError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{chroma_key, remove_halo};
use crate::png::{read_png, write_png};
use crate::types::Colour;

/// Remove a chroma-key background and clean halo fringes
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Frame PNGs to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Background colour to remove (hex, e.g. '#00FF00')
    #[arg(long)]
    pub color: Option<String>,

    /// Colour distance tolerance (0 = exact matches only)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Halo cleanup radius in pixels (0 = off)
    #[arg(long)]
    pub halo: Option<u32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read defaults from (default: ./framepack.yaml if present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: KeyArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::resolve(args.manifest.as_deref())?;

    let colour_str = args
        .color
        .clone()
        .or_else(|| manifest.key_colour.clone())
        .ok_or_else(|| FramepackError::Parse {
            message: "No chroma key colour given".to_string(),
            help: Some(
                "Pass --color '#00FF00' or set key_colour in framepack.yaml".to_string(),
            ),
        })?;
    let target = Colour::from_hex(&colour_str)?;

    let tolerance = args.tolerance.unwrap_or(manifest.key_tolerance);
    if tolerance < 0.0 {
        return Err(FramepackError::Parse {
            message: format!("Tolerance must be non-negative, got {}", tolerance),
            help: None,
        });
    }
    let halo = args.halo.unwrap_or(manifest.halo);

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| FramepackError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    printer.status(
        "Keying",
        &format!("{} (tolerance {}, halo {}px)", target, tolerance, halo),
    );

    for path in &args.inputs {
        let buffer = read_png(path)?;
        let mut keyed = chroma_key(&buffer, target, tolerance);
        if halo > 0 {
            keyed = remove_halo(&keyed, halo);
        }

        let file_name = path.file_name().ok_or_else(|| FramepackError::Io {
            path: path.clone(),
            message: "Input path has no file name".to_string(),
        })?;
        let out_path = output.join(file_name);
        write_png(&keyed, &out_path, 1)?;
        printer.verbose("Wrote", &display_path(&out_path));
    }

    printer.info(
        "Finished",
        &format!(
            "{} -> {}",
            plural(args.inputs.len(), "frame", "frames"),
            display_path(&output)
        ),
    );

    Ok(())
}

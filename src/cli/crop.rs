//! Crop command implementation.
//!
//! Normalizes a frame sequence to a uniform target size under a crop
//! policy. Input order matters: in animation-relative mode the first file
//! is the reference frame the whole sequence is measured against.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::cli::parse_pair;
use crate::error::{FramepackError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{crop_sequence, CropMode, CropPolicy, HorizontalAlign, VerticalAlign};
use crate::png::{read_png, write_png};
use crate::types::Frame;

/// Normalize frames to a uniform size under a crop policy
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Frame PNGs in playback order (first = reference frame)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Target size as WIDTHxHEIGHT (e.g. 32x48)
    #[arg(long)]
    pub size: Option<String>,

    /// Crop mode: animation-relative or center-center
    #[arg(long, default_value = "animation-relative")]
    pub mode: String,

    /// Horizontal alignment: left, center, right
    #[arg(long, default_value = "center")]
    pub align_x: String,

    /// Vertical alignment: top, center, bottom
    #[arg(long, default_value = "bottom")]
    pub align_y: String,

    /// Pixels to erode from each side of the measured bounds
    #[arg(long, default_value = "0")]
    pub reduction: u32,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read defaults from (default: ./framepack.yaml if present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: CropArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::resolve(args.manifest.as_deref())?;

    let (target_width, target_height) = match &args.size {
        Some(size) => parse_pair(size, "size")?,
        None => match (manifest.frame_width, manifest.frame_height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(FramepackError::Parse {
                    message: "No target frame size given".to_string(),
                    help: Some(
                        "Pass --size 32x48 or set frame_width/frame_height in framepack.yaml"
                            .to_string(),
                    ),
                })
            }
        },
    };

    let policy = CropPolicy {
        mode: parse_mode(&args.mode)?,
        target_width,
        target_height,
        align_x: parse_align_x(&args.align_x)?,
        align_y: parse_align_y(&args.align_y)?,
        reduction: args.reduction,
    };

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| FramepackError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut frames = Vec::with_capacity(args.inputs.len());
    for (i, path) in args.inputs.iter().enumerate() {
        let buffer = read_png(path)?;
        frames.push(Frame::new(buffer, i as u32, 0));
    }

    printer.status(
        "Cropping",
        &format!(
            "{} to {}x{} ({})",
            plural(frames.len(), "frame", "frames"),
            target_width,
            target_height,
            args.mode
        ),
    );

    let cropped = crop_sequence(&frames, &policy);

    for (path, frame) in args.inputs.iter().zip(&cropped) {
        let file_name = path.file_name().ok_or_else(|| FramepackError::Io {
            path: path.clone(),
            message: "Input path has no file name".to_string(),
        })?;
        let out_path = output.join(file_name);
        write_png(frame.pixels(), &out_path, 1)?;
        printer.verbose("Wrote", &display_path(&out_path));
    }

    printer.info(
        "Finished",
        &format!(
            "{} -> {}",
            plural(cropped.len(), "frame", "frames"),
            display_path(&output)
        ),
    );

    Ok(())
}

fn parse_mode(s: &str) -> Result<CropMode> {
    match s {
        "animation-relative" => Ok(CropMode::AnimationRelative),
        "center-center" => Ok(CropMode::CenterCenter),
        _ => Err(FramepackError::Parse {
            message: format!("Unknown crop mode: {}", s),
            help: Some("Expected animation-relative or center-center".to_string()),
        }),
    }
}

fn parse_align_x(s: &str) -> Result<HorizontalAlign> {
    match s {
        "left" => Ok(HorizontalAlign::Left),
        "center" => Ok(HorizontalAlign::Center),
        "right" => Ok(HorizontalAlign::Right),
        _ => Err(FramepackError::Parse {
            message: format!("Unknown horizontal alignment: {}", s),
            help: Some("Expected left, center, or right".to_string()),
        }),
    }
}

fn parse_align_y(s: &str) -> Result<VerticalAlign> {
    match s {
        "top" => Ok(VerticalAlign::Top),
        "center" => Ok(VerticalAlign::Center),
        "bottom" => Ok(VerticalAlign::Bottom),
        _ => Err(FramepackError::Parse {
            message: format!("Unknown vertical alignment: {}", s),
            help: Some("Expected top, center, or bottom".to_string()),
        }),
    }
}

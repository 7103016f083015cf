//! Compose command implementation.
//!
//! Assembles normalized frame PNGs back into a single sheet and writes the
//! layout metadata the consuming game samples it with.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::error::{FramepackError, Result};
use crate::layout::{write_layout_json, SheetLayout};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{compose_directional, compose_flat};
use crate::png::{read_png, write_png};
use crate::types::{Direction, DirectionSet8, Frame};

/// Compose frame PNGs into a sheet plus layout metadata
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Directory of frame PNGs, or individual frame files in playback order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Cells per sheet row (default: one row, or the longest direction)
    #[arg(long)]
    pub columns: Option<u32>,

    /// Build an 8-row directional sheet from '-<direction>-' file names
    #[arg(long)]
    pub directional: bool,

    /// Animation name recorded in layout metadata
    #[arg(long)]
    pub name: Option<String>,

    /// Output sheet path (default: <name>.png under the output directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Layout metadata path (default: sheet path with a .json extension)
    #[arg(long)]
    pub meta: Option<PathBuf>,

    /// Display duration per frame in milliseconds
    #[arg(long)]
    pub duration: Option<u32>,

    /// Mark the animation as non-looping
    #[arg(long)]
    pub no_loop: bool,

    /// Manifest to read defaults from (default: ./framepack.yaml if present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ComposeArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::resolve(args.manifest.as_deref())?;

    let files = collect_frame_files(&args.inputs)?;
    if files.is_empty() {
        return Err(FramepackError::Precondition {
            message: "No frame PNGs found to compose".to_string(),
            help: Some("Pass a directory of .png frames or the frame files themselves".to_string()),
        });
    }

    let name = args.name.clone().unwrap_or_else(|| default_name(&args.inputs));
    let duration = args.duration.unwrap_or(manifest.frame_duration_ms);
    let looped = if args.no_loop { false } else { manifest.looped };

    let sheet_path = args
        .output
        .clone()
        .unwrap_or_else(|| manifest.output.join(format!("{}.png", name)));
    let meta_path = args
        .meta
        .clone()
        .unwrap_or_else(|| sheet_path.with_extension("json"));
    let image_name = sheet_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("sheet.png")
        .to_string();

    printer.status(
        "Composing",
        &format!("{} from {}", name, plural(files.len(), "frame", "frames")),
    );

    let (sheet, layout) = if args.directional {
        let mut set = DirectionSet8::new();
        for (i, file) in files.iter().enumerate() {
            let direction = direction_of(file).ok_or_else(|| FramepackError::Parse {
                message: format!(
                    "Cannot tell which direction {} belongs to",
                    display_path(file)
                ),
                help: Some(
                    "Name directional frames like walk-south-0.png, walk-north_east-1.png"
                        .to_string(),
                ),
            })?;
            set.push(direction, Frame::new(read_png(file)?, i as u32, 0));
        }

        let columns = args
            .columns
            .or(manifest.columns)
            .unwrap_or(set.max_len() as u32)
            .max(1);

        for (direction, frames) in set.iter() {
            if frames.len() > columns as usize {
                printer.warning(
                    "Warning",
                    &format!(
                        "Direction {} has {} frames but only {} columns; extra frames dropped",
                        direction,
                        frames.len(),
                        columns
                    ),
                );
            }
        }

        let sheet = compose_directional(&set, columns)?;
        let frame_width = sheet.width() / columns;
        let frame_height = sheet.height() / 8;
        let layout = SheetLayout::directional(
            image_name.as_str(),
            name.as_str(),
            frame_width,
            frame_height,
            columns,
            &set,
            duration,
            looped,
        );
        (sheet, layout)
    } else {
        let mut frames = Vec::with_capacity(files.len());
        for (i, file) in files.iter().enumerate() {
            frames.push(Frame::new(read_png(file)?, i as u32, 0));
        }

        let columns = args
            .columns
            .or(manifest.columns)
            .unwrap_or(frames.len() as u32)
            .max(1);

        let sheet = compose_flat(&frames, columns)?;
        let layout = SheetLayout::flat(
            image_name.as_str(),
            name.as_str(),
            frames[0].width(),
            frames[0].height(),
            columns,
            frames.len() as u32,
            duration,
            looped,
        );
        (sheet, layout)
    };

    if let Some(parent) = sheet_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| FramepackError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_png(&sheet, &sheet_path, 1)?;
    write_layout_json(&layout, &meta_path)?;

    printer.info(
        "Finished",
        &format!(
            "{} ({}x{}) + {}",
            display_path(&sheet_path),
            sheet.width(),
            sheet.height(),
            display_path(&meta_path)
        ),
    );

    Ok(())
}

/// Expand a single directory input into its .png files, sorted by path for
/// deterministic cell order; pass explicit file lists through untouched.
fn collect_frame_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if inputs.len() == 1 && inputs[0].is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(&inputs[0])
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("png"))
            .collect();
        files.sort();
        return Ok(files);
    }

    for path in inputs {
        if !path.exists() {
            return Err(FramepackError::Io {
                path: path.clone(),
                message: format!("File not found: {}", display_path(path)),
            });
        }
    }
    Ok(inputs.to_vec())
}

/// Default animation name: the input directory's name, or "sprite" for
/// loose file lists.
fn default_name(inputs: &[PathBuf]) -> String {
    if inputs.len() == 1 && inputs[0].is_dir() {
        if let Some(name) = inputs[0].file_name().and_then(|n| n.to_str()) {
            return name.to_string();
        }
    }
    "sprite".to_string()
}

/// Pull a compass direction out of a '-' separated file stem.
fn direction_of(path: &Path) -> Option<Direction> {
    let stem = path.file_stem()?.to_str()?;
    stem.split('-').find_map(|token| token.parse::<Direction>().ok())
}

//! Sheet layout metadata.
//!
//! Alongside each composed sheet the tool writes a JSON document telling the
//! consuming game how to sample it: which rows belong to which animation or
//! compass direction, where each sequence starts, how many frames it has,
//! how long each frame displays, and whether it loops.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FramepackError, Result};
use crate::types::DirectionSet8;

/// Layout metadata for one composed sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Sheet image file name.
    pub image: String,
    /// Cell width in pixels.
    pub frame_width: u32,
    /// Cell height in pixels.
    pub frame_height: u32,
    /// Cells per sheet row.
    pub columns: u32,
    /// One record per animation (per direction for directional sheets).
    pub animations: Vec<AnimationEntry>,
}

/// How to play one frame sequence out of the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationEntry {
    /// Animation name (e.g. "walk").
    pub name: String,
    /// Compass label for directional sheets, absent for flat ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Sheet row holding this sequence.
    pub row: u32,
    /// Row-major cell index of the first frame.
    pub start_cell: u32,
    /// Number of frames in the sequence.
    pub frame_count: u32,
    /// Display duration per frame, in milliseconds.
    pub frame_duration_ms: u32,
    /// Whether playback wraps around.
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl SheetLayout {
    /// Layout for a flat single-animation sheet.
    pub fn flat(
        image: impl Into<String>,
        name: impl Into<String>,
        frame_width: u32,
        frame_height: u32,
        columns: u32,
        frame_count: u32,
        frame_duration_ms: u32,
        looped: bool,
    ) -> Self {
        Self {
            image: image.into(),
            frame_width,
            frame_height,
            columns,
            animations: vec![AnimationEntry {
                name: name.into(),
                direction: None,
                row: 0,
                start_cell: 0,
                frame_count,
                frame_duration_ms,
                looped,
            }],
        }
    }

    /// Layout for an 8-way directional sheet.
    ///
    /// One record per authored direction, in canonical row order; unauthored
    /// directions are incomplete work and get no record. Sequences longer
    /// than `columns` are capped to match what the composer actually drew.
    pub fn directional(
        image: impl Into<String>,
        name: impl Into<String>,
        frame_width: u32,
        frame_height: u32,
        columns: u32,
        set: &DirectionSet8,
        frame_duration_ms: u32,
        looped: bool,
    ) -> Self {
        let name = name.into();
        let animations = set
            .iter()
            .filter(|(_, frames)| !frames.is_empty())
            .map(|(direction, frames)| {
                let row = direction.row_index() as u32;
                AnimationEntry {
                    name: name.clone(),
                    direction: Some(direction.as_str().to_string()),
                    row,
                    start_cell: row * columns,
                    frame_count: (frames.len() as u32).min(columns),
                    frame_duration_ms,
                    looped,
                }
            })
            .collect();

        Self {
            image: image.into(),
            frame_width,
            frame_height,
            columns,
            animations,
        }
    }
}

/// Write layout metadata as pretty-printed JSON.
pub fn write_layout_json(layout: &SheetLayout, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(layout).map_err(|e| FramepackError::Precondition {
        message: format!("Failed to serialize sheet layout: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| FramepackError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet layout: {}", e),
    })?;
    Ok(())
}

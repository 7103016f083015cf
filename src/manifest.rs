//! Project manifest (framepack.yaml) parsing.
//!
//! The manifest carries per-project defaults for the CLI - output
//! directory, chroma key settings, target frame size, sheet shape, and
//! playback metadata. Command-line flags always win over manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FramepackError, Result};

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "framepack.yaml";

/// Project manifest loaded from framepack.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated files.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Chroma key background colour (hex), if the project uses one.
    #[serde(default)]
    pub key_colour: Option<String>,

    /// Chroma key distance tolerance.
    #[serde(default)]
    pub key_tolerance: f64,

    /// Halo cleanup radius in pixels (0 = off).
    #[serde(default)]
    pub halo: u32,

    /// Target frame width for crop normalization.
    #[serde(default)]
    pub frame_width: Option<u32>,

    /// Target frame height for crop normalization.
    #[serde(default)]
    pub frame_height: Option<u32>,

    /// Cells per row in composed sheets.
    #[serde(default)]
    pub columns: Option<u32>,

    /// Display duration per frame, in milliseconds.
    #[serde(default = "default_frame_duration")]
    pub frame_duration_ms: u32,

    /// Whether composed animations loop.
    #[serde(default = "default_loop", rename = "loop")]
    pub looped: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_frame_duration() -> u32 {
    100
}

fn default_loop() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            key_colour: None,
            key_tolerance: 0.0,
            halo: 0,
            frame_width: None,
            frame_height: None,
            columns: None,
            frame_duration_ms: default_frame_duration(),
            looped: default_loop(),
        }
    }
}

impl Manifest {
    /// Load manifest from a framepack.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FramepackError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FramepackError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check framepack.yaml syntax".to_string()),
        })
    }

    /// Resolve the manifest for a command.
    ///
    /// An explicit path must exist; otherwise framepack.yaml in the current
    /// directory is used when present, and built-in defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let conventional = PathBuf::from(MANIFEST_FILENAME);
        if conventional.exists() {
            return Self::load(&conventional);
        }

        Ok(Self::default())
    }
}

pub mod completions;
pub mod compose;
pub mod crop;
pub mod init;
pub mod key;
pub mod slice;

use clap::{Parser, Subcommand};

use crate::error::{FramepackError, Result};

/// framepack - Sprite frame normalization and sheet assembly
#[derive(Parser, Debug)]
#[command(name = "framepack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print extra detail while running
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice a sheet PNG into individual frame PNGs
    Slice(slice::SliceArgs),

    /// Remove a chroma-key background and clean halo fringes
    Key(key::KeyArgs),

    /// Normalize frames to a uniform size under a crop policy
    Crop(crop::CropArgs),

    /// Compose frame PNGs into a sheet plus layout metadata
    Compose(compose::ComposeArgs),

    /// Initialize a framepack project (generates framepack.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse an "AxB" pair like "4x8" or "32x48" into (a, b).
pub(crate) fn parse_pair(s: &str, what: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(FramepackError::Parse {
            message: format!("Invalid {} '{}': expected AxB (e.g. 4x8)", what, s),
            help: Some("Use the format AxB, for example: 4x8, 32x48".to_string()),
        });
    }

    let a: u32 = parts[0].parse().map_err(|_| FramepackError::Parse {
        message: format!("Invalid value '{}' in {} '{}'", parts[0], what, s),
        help: Some("Both values must be positive integers".to_string()),
    })?;

    let b: u32 = parts[1].parse().map_err(|_| FramepackError::Parse {
        message: format!("Invalid value '{}' in {} '{}'", parts[1], what, s),
        help: Some("Both values must be positive integers".to_string()),
    })?;

    if a == 0 || b == 0 {
        return Err(FramepackError::Parse {
            message: format!("{} must be non-zero, got {}x{}", what, a, b),
            help: Some("Both values must be at least 1".to_string()),
        });
    }

    Ok((a, b))
}

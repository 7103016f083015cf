//! Init command implementation.
//!
//! Generates a starter `framepack.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{FramepackError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};

/// Initialize a framepack project by generating a framepack.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing framepack.yaml
    #[arg(long)]
    pub force: bool,
}

/// Starter manifest: built-in defaults spelled out, optional keys commented.
const TEMPLATE: &str = "\
# framepack project manifest. Command-line flags override these values.
output: dist
frame_duration_ms: 100
loop: true

# Chroma key defaults for `framepack key`:
# key_colour: \"#00FF00\"
# key_tolerance: 0
# halo: 2

# Crop target for `framepack crop`:
# frame_width: 32
# frame_height: 48

# Cells per sheet row for `framepack compose`:
# columns: 8
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(FramepackError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILENAME),
        });
    }

    fs::write(&manifest_path, TEMPLATE).map_err(|e| FramepackError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new(false)).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        assert!(manifest_path.exists());

        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_template_parses() {
        let manifest = Manifest::parse(TEMPLATE).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.frame_duration_ms, 100);
        assert!(manifest.looped);
        assert_eq!(manifest.key_colour, None);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new(false)).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new(false)).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: dist"));
    }
}

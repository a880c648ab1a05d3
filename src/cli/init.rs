//! Init command implementation.
//!
//! Writes a `swatch.yaml` manifest holding the default selections.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILE};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::types::ColorModel;

/// Initialize a swatch project by generating a swatch.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Harmony model to record
    #[arg(long, value_enum)]
    pub model: Option<ColorModel>,

    /// Seed to record for reproducible palettes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILE);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILE),
        });
    }

    let manifest = Manifest {
        model: args.model.unwrap_or_default(),
        seed: args.seed,
        ..Manifest::default()
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

//! Extract command implementation.
//!
//! Runs the colour extractor over images, walking directories for
//! supported files, and prints one hex list per image.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SwatchError};
use crate::extract::{extract_from_path, is_supported_image, ExtractOptions, ImageCrateDecoder};
use crate::output::{display_path, plural, Printer};

/// Extract a palette from images
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Maximum number of colours per image (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub max: Option<u8>,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let images = collect_images(&args.paths)?;
    if images.is_empty() {
        printer.warning("Skipped", "no supported images found");
        return Ok(());
    }

    let decoder = ImageCrateDecoder::default();
    let mut options = ExtractOptions::default();
    if let Some(max) = args.max {
        options.clusters = max as usize;
    }

    let multiple = images.len() > 1;
    let mut failures = 0;

    for path in &images {
        let display = display_path(path);
        match extract_from_path(path, &decoder, &options) {
            Ok(colours) => {
                printer.status(
                    "Extracted",
                    &format!("{} from {}", plural(colours.len(), "colour", "colours"), display),
                );
                let hexes: Vec<String> = colours.iter().map(|c| c.to_string()).collect();
                if multiple {
                    println!("{}: {}", display, hexes.join(" "));
                } else {
                    for hex in hexes {
                        println!("{}", hex);
                    }
                }
            }
            Err(e) if multiple => {
                failures += 1;
                printer.error("Failed", &e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    if failures > 0 {
        printer.warning(
            "Finished",
            &format!("{} could not be analyzed", plural(failures, "image", "images")),
        );
    }

    Ok(())
}

/// Expand directories into the supported images they contain. Files named
/// directly are kept as-is so an unsupported one is reported.
fn collect_images(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for path in paths {
        if !path.is_dir() {
            images.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry.map_err(|e| SwatchError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() && is_supported_image(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        debug!(dir = %path.display(), count = found.len(), "scanned directory");
        images.extend(found);
    }

    Ok(images)
}

//! Export command implementation.
//!
//! Assembles a design from the manifest and flags, then prints or writes
//! the CSS stylesheet or the JSON design bundle.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::session::DesignState;
use crate::tokens::BUNDLE_FILE_NAME;
use crate::types::ColorModel;

use super::{parse_palette_arg, Context};

/// File name used when `--output` names a directory and the format is CSS.
pub const CSS_FILE_NAME: &str = "design-tokens.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSS custom properties and utility classes
    #[default]
    Css,
    /// JSON bundle with colours, typography, scale, background and CSS
    Json,
}

impl ExportFormat {
    fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Css => CSS_FILE_NAME,
            ExportFormat::Json => BUNDLE_FILE_NAME,
        }
    }
}

/// Export the design as CSS custom properties or a JSON bundle
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Css)]
    pub format: ExportFormat,

    /// Use a template's colours and recommendations
    #[arg(long, short)]
    pub template: Option<String>,

    /// Palette as five comma-separated hex colours (wins over --template)
    #[arg(long)]
    pub palette: Option<String>,

    /// Harmony model for a generated palette
    #[arg(long, short, value_enum)]
    pub model: Option<ColorModel>,

    /// Seed for a generated palette
    #[arg(long)]
    pub seed: Option<u64>,

    /// Font scale id
    #[arg(long)]
    pub font_scale: Option<String>,

    /// Typography pairing id
    #[arg(long)]
    pub typography: Option<String>,

    /// Gradient id
    #[arg(long)]
    pub gradient: Option<String>,

    /// Texture id
    #[arg(long)]
    pub texture: Option<String>,

    /// Write to this file (or directory) instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    let state = build_state(&args, ctx)?;

    let Some(output) = &args.output else {
        match args.format {
            ExportFormat::Css => print!("{}", state.css()),
            ExportFormat::Json => print!("{}", state.bundle().to_json()?),
        }
        return Ok(());
    };

    let path = resolve_output(output, args.format);
    create_parent(&path)?;
    match args.format {
        ExportFormat::Css => fs::write(&path, state.css()).map_err(|e| SwatchError::Io {
            path: path.clone(),
            message: format!("Failed to write export: {}", e),
        })?,
        ExportFormat::Json => state.bundle().write(&path)?,
    }
    printer.status("Exported", &display_path(&path));

    Ok(())
}

/// Manifest selections first, then the template, then explicit flags.
fn build_state(args: &ExportArgs, ctx: &Context) -> Result<DesignState> {
    let catalog = &ctx.catalog;
    let mut rng = ctx.manifest.rng(args.seed);
    let mut state = DesignState::new(catalog, &ctx.manifest, &mut rng)?;

    if let Some(model) = args.model {
        state.model = model;
        state.regenerate(&mut rng);
    }
    if let Some(id) = &args.template {
        state.apply_template(catalog.template(id)?, catalog);
    }
    if let Some(text) = &args.palette {
        state.apply_extracted(&parse_palette_arg(text)?);
    }

    if let Some(id) = &args.font_scale {
        state.select_font_scale(catalog, id)?;
    }
    if let Some(id) = &args.typography {
        state.select_typography(catalog, id)?;
    }
    if let Some(id) = &args.gradient {
        state.select_gradient(catalog, id)?;
    }
    if let Some(id) = &args.texture {
        state.select_texture(catalog, id)?;
    }

    Ok(state)
}

fn resolve_output(output: &Path, format: ExportFormat) -> PathBuf {
    if output.is_dir() {
        output.join(format.default_file_name())
    } else {
        output.to_path_buf()
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SwatchError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

pub mod completions;
pub mod export;
pub mod extract;
pub mod generate;
pub mod gradient;
pub mod init;
pub mod list;
pub mod template;
pub mod texture;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::catalog::Catalog;
use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::types::{Colour, PALETTE_SIZE};

/// swatch - Colour palette and design token generator
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a swatch.yaml manifest (default: ./swatch.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra catalog YAML merged over the builtin one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a harmonious five-colour palette
    Generate(generate::GenerateArgs),

    /// Extract a palette from images
    Extract(extract::ExtractArgs),

    /// Browse palette templates
    Template(template::TemplateArgs),

    /// Export the design as CSS custom properties or a JSON bundle
    Export(export::ExportArgs),

    /// Browse and export background gradients
    Gradient(gradient::GradientArgs),

    /// Browse and export background textures
    Texture(texture::TextureArgs),

    /// List the catalog inventory
    List(list::ListArgs),

    /// Check a catalog for problems
    Validate(validate::ValidateArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Manifest and catalog shared by the subcommands.
#[derive(Debug, Clone)]
pub struct Context {
    pub manifest: Manifest,
    pub catalog: Catalog,
}

impl Context {
    /// Load the manifest, then the builtin catalog with any overlay. A
    /// `--catalog` flag wins over the manifest's `catalog` entry.
    pub fn load(config: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let manifest = Manifest::discover(config)?;
        let catalog = Catalog::with_overlay(catalog.or(manifest.catalog.as_deref()))?;
        Ok(Self { manifest, catalog })
    }
}

/// Parse a comma-separated list of exactly five hex colours.
pub fn parse_palette_arg(text: &str) -> Result<Vec<Colour>> {
    let colours = text
        .split(',')
        .map(|part| Colour::parse_hex(part.trim()))
        .collect::<Result<Vec<_>>>()?;

    if colours.len() != PALETTE_SIZE {
        return Err(SwatchError::Parse {
            message: format!("Expected {} colours, got {}", PALETTE_SIZE, colours.len()),
            help: Some("Pass five hex colours, e.g. #1E3A8A,#3B82F6,#60A5FA,#93C5FD,#DBEAFE".to_string()),
        });
    }

    Ok(colours)
}

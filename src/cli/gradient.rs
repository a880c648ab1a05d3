//! Gradient command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::{categories, ALL_CATEGORIES};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::render::{export_gradient_png, export_gradient_svg};
use crate::tokens::gradient_declaration;

use super::Context;

/// Browse and export background gradients
#[derive(Args, Debug)]
pub struct GradientArgs {
    #[command(subcommand)]
    pub command: GradientCommand,
}

#[derive(Subcommand, Debug)]
pub enum GradientCommand {
    /// List gradients, optionally in one category
    List {
        /// Category to show ("all" for every gradient)
        #[arg(long, short, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Print the gradient as a `background:` declaration
    Css {
        /// Gradient id
        id: String,
    },

    /// Rasterize the gradient to a 400x200 PNG
    Png {
        /// Gradient id
        id: String,

        /// Output directory (default: manifest output)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write the gradient as an SVG document
    Svg {
        /// Gradient id
        id: String,

        /// Output directory (default: manifest output)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn run(args: GradientArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    match args.command {
        GradientCommand::List { category } => {
            let gradients = ctx.catalog.gradients_in(&category);
            if gradients.is_empty() {
                let known = categories(&ctx.catalog.gradients).join(", ");
                printer.warning("Empty", &format!("no gradients in '{}' (categories: {})", category, known));
                return Ok(());
            }

            printer.info("Gradients", &plural(gradients.len(), "gradient", "gradients"));
            for gradient in gradients {
                println!("{:<20} {:<8} {}", gradient.id, gradient.category, printer.dim(&gradient.description));
            }
        }
        GradientCommand::Css { id } => {
            println!("{}", gradient_declaration(ctx.catalog.gradient(&id)?));
        }
        GradientCommand::Png { id, output } => {
            let gradient = ctx.catalog.gradient(&id)?;
            let dir = output_dir(output.as_deref(), ctx)?;
            let path = export_gradient_png(gradient, &dir)?;
            printer.status("Exported", &display_path(&path));
        }
        GradientCommand::Svg { id, output } => {
            let gradient = ctx.catalog.gradient(&id)?;
            let dir = output_dir(output.as_deref(), ctx)?;
            let path = export_gradient_svg(gradient, &dir)?;
            printer.status("Exported", &display_path(&path));
        }
    }

    Ok(())
}

/// The requested directory, or the manifest's, created if missing.
pub(super) fn output_dir(requested: Option<&Path>, ctx: &Context) -> Result<PathBuf> {
    let dir = requested.unwrap_or(&ctx.manifest.output).to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| SwatchError::Io {
            path: dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Manifest;
    use tempfile::tempdir;

    fn ctx(output: &Path) -> Context {
        Context {
            manifest: Manifest {
                output: output.to_path_buf(),
                ..Manifest::default()
            },
            catalog: Catalog::builtin().unwrap(),
        }
    }

    #[test]
    fn test_png_uses_manifest_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        let args = GradientArgs {
            command: GradientCommand::Png {
                id: "ocean-linear".to_string(),
                output: None,
            },
        };

        run(args, &ctx(&out), &Printer::plain()).unwrap();

        let written: Vec<_> = fs::read_dir(&out).unwrap().collect();
        assert_eq!(written.len(), 1);
    }

    #[test]
    fn test_conic_png_is_unsupported() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::builtin().unwrap();
        let conic = catalog
            .gradients
            .iter()
            .find(|g| g.css.starts_with("conic-gradient"))
            .unwrap();
        let args = GradientArgs {
            command: GradientCommand::Png {
                id: conic.id.clone(),
                output: Some(dir.path().to_path_buf()),
            },
        };

        let err = run(args, &ctx(dir.path()), &Printer::plain()).unwrap_err();

        assert!(matches!(err, SwatchError::ExportUnsupported { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_css_unknown_gradient() {
        let dir = tempdir().unwrap();
        let args = GradientArgs {
            command: GradientCommand::Css {
                id: "plaid".to_string(),
            },
        };
        let err = run(args, &ctx(dir.path()), &Printer::plain()).unwrap_err();
        assert!(matches!(err, SwatchError::Catalog { kind: "gradient", .. }));
    }
}

//! Texture command implementation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::{categories, ALL_CATEGORIES};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::export_texture_svg;
use crate::tokens::texture_inline_style;

use super::gradient::output_dir;
use super::Context;

/// Browse and export background textures
#[derive(Args, Debug)]
pub struct TextureArgs {
    #[command(subcommand)]
    pub command: TextureCommand,
}

#[derive(Subcommand, Debug)]
pub enum TextureCommand {
    /// List textures, optionally in one category
    List {
        /// Category to show ("all" for every texture)
        #[arg(long, short, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Print the texture as an inline style
    Css {
        /// Texture id
        id: String,
    },

    /// Write a texture's embedded SVG tile to a file
    Svg {
        /// Texture id
        id: String,

        /// Output directory (default: manifest output)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn run(args: TextureArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    match args.command {
        TextureCommand::List { category } => {
            let textures = ctx.catalog.textures_in(&category);
            if textures.is_empty() {
                let known = categories(&ctx.catalog.textures).join(", ");
                printer.warning("Empty", &format!("no textures in '{}' (categories: {})", category, known));
                return Ok(());
            }

            printer.info("Textures", &plural(textures.len(), "texture", "textures"));
            for texture in textures {
                println!(
                    "{:<16} {:<10} {:<10} {}",
                    texture.id,
                    texture.category,
                    texture.background_size(),
                    printer.dim(&texture.description)
                );
            }
        }
        TextureCommand::Css { id } => {
            println!("{}", texture_inline_style(ctx.catalog.texture(&id)?));
        }
        TextureCommand::Svg { id, output } => {
            let texture = ctx.catalog.texture(&id)?;
            let dir = output_dir(output.as_deref(), ctx)?;
            let path = export_texture_svg(texture, &dir)?;
            printer.status("Exported", &display_path(&path));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Manifest;
    use crate::error::SwatchError;
    use std::fs;
    use tempfile::tempdir;

    fn ctx() -> Context {
        Context {
            manifest: Manifest::default(),
            catalog: Catalog::builtin().unwrap(),
        }
    }

    fn svg(id: &str, output: PathBuf) -> TextureArgs {
        TextureArgs {
            command: TextureCommand::Svg {
                id: id.to_string(),
                output: Some(output),
            },
        }
    }

    #[test]
    fn test_svg_export_writes_markup() {
        let dir = tempdir().unwrap();

        run(svg("waves", dir.path().to_path_buf()), &ctx(), &Printer::plain()).unwrap();

        let markup = fs::read_to_string(dir.path().join("wave-pattern.svg")).unwrap();
        assert!(markup.starts_with("<svg"));
    }

    #[test]
    fn test_svg_export_of_css_texture_is_unsupported() {
        let dir = tempdir().unwrap();

        let err = run(svg("dots", dir.path().to_path_buf()), &ctx(), &Printer::plain()).unwrap_err();

        assert!(matches!(err, SwatchError::ExportUnsupported { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

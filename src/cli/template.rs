//! Template command implementation.

use clap::{Args, Subcommand};

use crate::catalog::{categories, Template, ALL_CATEGORIES};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::PaletteSlot;

use super::Context;

/// Browse palette templates
#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List templates, optionally in one category
    List {
        /// Category to show ("all" for every template)
        #[arg(long, short, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Show a template's colours and recommendations
    Show {
        /// Template id
        id: String,
    },
}

pub fn run(args: TemplateArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    match args.command {
        TemplateCommand::List { category } => list(ctx, &category, printer),
        TemplateCommand::Show { id } => show(ctx.catalog.template(&id)?, printer),
    }
}

fn list(ctx: &Context, category: &str, printer: &Printer) -> Result<()> {
    let templates = ctx.catalog.templates_in(category);

    if templates.is_empty() {
        let known = categories(&ctx.catalog.templates).join(", ");
        printer.warning("Empty", &format!("no templates in '{}' (categories: {})", category, known));
        return Ok(());
    }

    printer.info("Templates", &plural(templates.len(), "template", "templates"));
    for template in templates {
        let swatches: Vec<String> = template
            .colors
            .iter()
            .map(|hex| {
                let slot = PaletteSlot::from_hex(hex);
                format!("{}{}", printer.chip(slot.colour()), slot.hex())
            })
            .collect();
        println!(
            "{:<20} {}  {}",
            template.id,
            swatches.join(" "),
            printer.dim(&template.category)
        );
    }

    Ok(())
}

fn show(template: &Template, printer: &Printer) -> Result<()> {
    printer.info(&template.name, &template.description);

    for (i, hex) in template.colors.iter().enumerate() {
        println!("{}", printer.slot_line(i, &PaletteSlot::from_hex(hex)));
    }

    let recommendations = [
        ("Font scale", &template.recommended_font_scale),
        ("Typography", &template.recommended_typography),
        ("Gradient", &template.recommended_gradient),
        ("Texture", &template.recommended_texture),
    ];
    for (label, id) in recommendations {
        if let Some(id) = id {
            printer.info(label, id);
        }
    }

    Ok(())
}

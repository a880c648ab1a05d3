//! List command implementation.
//!
//! Prints the catalog inventory, one line per record kind.

use clap::Args;

use crate::catalog::{Catalog, Record};
use crate::error::Result;
use crate::output::Printer;
use crate::types::ColorModel;

use super::Context;

/// List the catalog inventory
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show categories instead of ids
    #[arg(long)]
    pub categories: bool,
}

pub fn run(args: ListArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    let models: Vec<&str> = ColorModel::ALL.iter().map(|m| m.name()).collect();
    printer.info("Models", &models.join(", "));

    for (label, names) in inventory(&ctx.catalog, args.categories) {
        if names.is_empty() {
            continue;
        }
        printer.info(label, &names.join(", "));
    }

    Ok(())
}

fn inventory(catalog: &Catalog, by_category: bool) -> Vec<(&'static str, Vec<&str>)> {
    vec![
        ("Font scales", names(&catalog.font_scales, by_category)),
        ("Typography", names(&catalog.typography, by_category)),
        ("Gradients", names(&catalog.gradients, by_category)),
        ("Textures", names(&catalog.textures, by_category)),
        ("Templates", names(&catalog.templates, by_category)),
    ]
}

fn names<T: Record>(records: &[T], by_category: bool) -> Vec<&str> {
    if by_category {
        crate::catalog::categories(records)
    } else {
        records.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_ids_in_declared_order() {
        let catalog = Catalog::builtin().unwrap();
        let groups = inventory(&catalog, false);

        assert_eq!(groups[0].0, "Font scales");
        assert_eq!(groups[0].1.len(), 6);
        assert_eq!(groups[2].1[0], "sunset-linear");
        assert_eq!(groups[4].1.len(), 22);
    }

    #[test]
    fn test_inventory_categories() {
        let catalog = Catalog::builtin().unwrap();
        let groups = inventory(&catalog, true);

        assert_eq!(groups[2].1, vec!["linear", "radial", "conic", "multi"]);
        assert_eq!(groups[3].1, vec!["geometric", "organic", "artistic"]);
    }
}

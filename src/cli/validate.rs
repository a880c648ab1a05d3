//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::Catalog;
use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_catalog};

use super::Context;

/// Check a catalog for problems
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file to check on its own (default: the merged project catalog)
    #[arg(value_name = "CATALOG")]
    pub file: Option<PathBuf>,

    /// Exit with an error when there are warnings
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    let loaded;
    let catalog = match &args.file {
        Some(path) => {
            printer.status("Checking", &display_path(path));
            loaded = Catalog::load(path)?;
            &loaded
        }
        None => {
            printer.status("Checking", "project catalog");
            &ctx.catalog
        }
    };

    let result = validate_catalog(catalog);
    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && result.warning_count() > 0) {
        return Err(SwatchError::Parse {
            message: "Catalog validation failed".to_string(),
            help: Some("Fix the problems listed above".to_string()),
        });
    }

    Ok(())
}

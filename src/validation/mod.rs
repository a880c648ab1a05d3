//! Catalog validation.
//!
//! Runs a suite of checks against a catalog and reports errors and
//! warnings. Used by `swatch validate`.

mod checks;
mod diagnostic;

pub use checks::{DUPLICATE_ID, MALFORMED_HEX, SCALE_KEYS, TEMPLATE_SIZE, UNKNOWN_RECOMMENDATION};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::catalog::Catalog;
use crate::output::{plural, Printer};

/// Run all checks against the catalog.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_ids(catalog));
    result.merge(checks::check_template_sizes(catalog));
    result.merge(checks::check_hex_values(catalog));
    result.merge(checks::check_recommendations(catalog));
    result.merge(checks::check_font_scales(catalog));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, printer.dim(&d.code), d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.warning_count() > 0 {
        printer.warning("Passed", &format!("with {}", warnings));
    } else {
        printer.status("Passed", "no problems found");
    }
}

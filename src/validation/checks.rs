//! Catalog checks.
//!
//! Each check takes a `&Catalog` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::catalog::{Catalog, Record};
use crate::types::{Colour, PALETTE_SIZE};

use super::diagnostic::{Diagnostic, ValidationResult};

pub const TEMPLATE_SIZE: &str = "swatch::validate::template-size";
pub const MALFORMED_HEX: &str = "swatch::validate::malformed-hex";
pub const DUPLICATE_ID: &str = "swatch::validate::duplicate-id";
pub const UNKNOWN_RECOMMENDATION: &str = "swatch::validate::unknown-recommendation";
pub const SCALE_KEYS: &str = "swatch::validate::scale-keys";

/// Templates must carry exactly one colour per palette slot.
pub fn check_template_sizes(catalog: &Catalog) -> ValidationResult {
    catalog
        .templates
        .iter()
        .filter(|t| t.colors.len() != PALETTE_SIZE)
        .map(|t| {
            Diagnostic::error(
                TEMPLATE_SIZE,
                format!("Template '{}' has {} colours", t.id, t.colors.len()),
            )
            .with_help(format!("Templates need exactly {} colours", PALETTE_SIZE))
        })
        .collect()
}

/// Colour text that would silently become black when applied.
pub fn check_hex_values(catalog: &Catalog) -> ValidationResult {
    let lists = catalog
        .templates
        .iter()
        .map(|t| ("Template", t.id.as_str(), &t.colors))
        .chain(catalog.gradients.iter().map(|g| ("Gradient", g.id.as_str(), &g.colors)));

    let mut result = ValidationResult::new();
    for (kind, id, colours) in lists {
        for (i, text) in colours.iter().enumerate() {
            if Colour::parse_hex(text).is_err() {
                result.push(
                    Diagnostic::warning(
                        MALFORMED_HEX,
                        format!("{} '{}' colour {} is '{}'", kind, id, i + 1, text),
                    )
                    .with_help("Malformed colours are treated as black; use #RRGGBB"),
                );
            }
        }
    }
    result
}

/// Ids must be unique within each record kind.
pub fn check_duplicate_ids(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(duplicates(&catalog.font_scales));
    result.merge(duplicates(&catalog.typography));
    result.merge(duplicates(&catalog.gradients));
    result.merge(duplicates(&catalog.textures));
    result.merge(duplicates(&catalog.templates));
    result
}

fn duplicates<T: Record>(records: &[T]) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut result = ValidationResult::new();

    for record in records {
        if !seen.insert(record.id()) && reported.insert(record.id()) {
            result.push(
                Diagnostic::error(DUPLICATE_ID, format!("Duplicate {} id '{}'", T::KIND, record.id()))
                    .with_help("Only the first record with this id can be selected"),
            );
        }
    }
    result
}

/// Template recommendations that do not resolve are skipped when the
/// template is applied.
pub fn check_recommendations(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for template in &catalog.templates {
        let refs = [
            ("font scale", &template.recommended_font_scale, catalog.font_scale_ids()),
            ("typography pairing", &template.recommended_typography, catalog.typography_ids()),
            ("gradient", &template.recommended_gradient, catalog.gradient_ids()),
            ("texture", &template.recommended_texture, catalog.texture_ids()),
        ];

        for (kind, reference, known) in refs {
            let Some(id) = reference else { continue };
            if !known.contains(&id.as_str()) {
                result.push(
                    Diagnostic::warning(
                        UNKNOWN_RECOMMENDATION,
                        format!("Template '{}' recommends unknown {} '{}'", template.id, kind, id),
                    )
                    .with_help(format!("Available: {}", known.join(", "))),
                );
            }
        }
    }

    result
}

/// Every size step needs a line height and vice versa.
pub fn check_font_scales(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for scale in &catalog.font_scales {
        let sizes: HashSet<&String> = scale.sizes.keys().collect();
        let heights: HashSet<&String> = scale.line_heights.keys().collect();
        if sizes != heights {
            let mut missing: Vec<&str> = sizes
                .symmetric_difference(&heights)
                .map(|k| k.as_str())
                .collect();
            missing.sort_unstable();
            result.push(
                Diagnostic::warning(
                    SCALE_KEYS,
                    format!(
                        "Font scale '{}' has mismatched steps: {}",
                        scale.id,
                        missing.join(", ")
                    ),
                )
                .with_help("Give each step both a size and a line height"),
            );
        }
    }

    result
}

impl Catalog {
    fn font_scale_ids(&self) -> Vec<&str> {
        self.font_scales.iter().map(|r| r.id()).collect()
    }

    fn typography_ids(&self) -> Vec<&str> {
        self.typography.iter().map(|r| r.id()).collect()
    }

    fn gradient_ids(&self) -> Vec<&str> {
        self.gradients.iter().map(|r| r.id()).collect()
    }

    fn texture_ids(&self) -> Vec<&str> {
        self.textures.iter().map(|r| r.id()).collect()
    }
}

//! Read-only catalogs of font scales, typography pairings, gradients,
//! textures and palette templates.
//!
//! The builtin catalog is embedded YAML. A project can layer its own
//! catalog file on top: records with a known id replace the builtin one,
//! new ids are appended.
//!
//! # Example
//!
//! ```ignore
//! use swatch::catalog::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! let scale = catalog.font_scale("golden-ratio")?;
//! let warm = catalog.gradients_in("radial");
//! ```

mod types;

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SwatchError};

pub use types::{
    file_stem, serialize_sizes, FontFallbacks, FontScale, FontWeights, Gradient, Record, Template, Texture,
    TypographyPairing, LARGE_TILE_PATTERNS,
};

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// The full set of catalog records, in declared order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub font_scales: Vec<FontScale>,
    pub typography: Vec<TypographyPairing>,
    pub gradients: Vec<Gradient>,
    pub textures: Vec<Texture>,
    pub templates: Vec<Template>,
}

impl Catalog {
    /// The catalog shipped with swatch.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Parse a catalog from YAML. Every section is optional.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid catalog: {}", e),
            help: Some("Check the catalog YAML syntax".to_string()),
        })
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read catalog: {}", e),
        })?;

        Self::parse(&content)
    }

    /// The builtin catalog with an optional overlay file merged on top.
    pub fn with_overlay(overlay: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        if let Some(path) = overlay {
            catalog.merge(Self::load(path)?);
        }
        Ok(catalog)
    }

    /// Merge another catalog into this one.
    pub fn merge(&mut self, other: Catalog) {
        merge_records(&mut self.font_scales, other.font_scales);
        merge_records(&mut self.typography, other.typography);
        merge_records(&mut self.gradients, other.gradients);
        merge_records(&mut self.textures, other.textures);
        merge_records(&mut self.templates, other.templates);
    }

    pub fn font_scale(&self, id: &str) -> Result<&FontScale> {
        find(&self.font_scales, id)
    }

    pub fn typography_pairing(&self, id: &str) -> Result<&TypographyPairing> {
        find(&self.typography, id)
    }

    pub fn gradient(&self, id: &str) -> Result<&Gradient> {
        find(&self.gradients, id)
    }

    pub fn texture(&self, id: &str) -> Result<&Texture> {
        find(&self.textures, id)
    }

    pub fn template(&self, id: &str) -> Result<&Template> {
        find(&self.templates, id)
    }

    pub fn templates_in(&self, category: &str) -> Vec<&Template> {
        filter_by_category(&self.templates, category)
    }

    pub fn gradients_in(&self, category: &str) -> Vec<&Gradient> {
        filter_by_category(&self.gradients, category)
    }

    pub fn textures_in(&self, category: &str) -> Vec<&Texture> {
        filter_by_category(&self.textures, category)
    }

    /// Total number of records across all kinds.
    pub fn len(&self) -> usize {
        self.font_scales.len()
            + self.typography.len()
            + self.gradients.len()
            + self.textures.len()
            + self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Look up a record by id.
pub fn find<'a, T: Record>(records: &'a [T], id: &str) -> Result<&'a T> {
    records.iter().find(|r| r.id() == id).ok_or_else(|| {
        let available: Vec<&str> = records.iter().map(|r| r.id()).collect();
        SwatchError::Catalog {
            kind: T::KIND,
            id: id.to_string(),
            help: Some(format!("Available: {}", available.join(", "))),
        }
    })
}

/// Records in `category`, or all of them for [`ALL_CATEGORIES`].
pub fn filter_by_category<'a, T: Record>(records: &'a [T], category: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| category == ALL_CATEGORIES || r.category() == category)
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories<T: Record>(records: &[T]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.contains(&record.category()) {
            seen.push(record.category());
        }
    }
    seen
}

fn merge_records<T: Record>(base: &mut Vec<T>, overlay: Vec<T>) {
    for record in overlay {
        match base.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => {
                debug!(kind = T::KIND, id = record.id(), "overriding builtin record");
                *existing = record;
            }
            None => base.push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.font_scales.len(), 6);
        assert_eq!(catalog.typography.len(), 6);
        assert_eq!(catalog.gradients.len(), 12);
        assert_eq!(catalog.textures.len(), 11);
        assert_eq!(catalog.templates.len(), 22);
    }

    #[test]
    fn test_builtin_templates_have_five_colours() {
        let catalog = Catalog::builtin().unwrap();
        for template in &catalog.templates {
            assert_eq!(template.colors.len(), 5, "{}", template.id);
        }
    }

    #[test]
    fn test_font_scale_keeps_declared_order() {
        let catalog = Catalog::builtin().unwrap();
        let scale = catalog.font_scale("major-second").unwrap();
        let keys: Vec<&str> = scale.sizes.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"]
        );
        assert_eq!(scale.sizes["2xl"], 23.0);
        assert_eq!(scale.line_heights["6xl"], 1.1);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.gradient("plaid").unwrap_err();
        match err {
            SwatchError::Catalog { kind, id, help } => {
                assert_eq!(kind, "gradient");
                assert_eq!(id, "plaid");
                assert!(help.unwrap().contains("sunset-linear"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.gradients_in("conic").len(), 2);
        assert_eq!(catalog.gradients_in(ALL_CATEGORIES).len(), 12);
        assert!(catalog.textures_in("nonexistent").is_empty());
        let business: Vec<&str> = catalog.templates_in("business").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(business, vec!["corporate-blue", "executive-gray", "startup-energy"]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(categories(&catalog.gradients), vec!["linear", "radial", "conic", "multi"]);
        assert_eq!(categories(&catalog.textures), vec!["geometric", "organic", "artistic"]);
    }

    #[test]
    fn test_merge_overlay() {
        let mut catalog = Catalog::builtin().unwrap();
        let overlay = Catalog::parse(
            r##"
gradients:
  - id: sunset-linear
    name: Sunset Override
    css: "linear-gradient(90deg, #000000 0%, #ffffff 100%)"
  - id: mint
    name: Mint
    css: "linear-gradient(180deg, #aaffcc, #66ddaa)"
"##,
        )
        .unwrap();

        catalog.merge(overlay);

        assert_eq!(catalog.gradients.len(), 13);
        assert_eq!(catalog.gradients[0].name, "Sunset Override");
        assert_eq!(catalog.gradients[12].id, "mint");
        // Other kinds untouched
        assert_eq!(catalog.textures.len(), 11);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(Catalog::parse("gradients: [ {id: 1").is_err());
    }
}

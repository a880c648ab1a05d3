//! JSON design-system bundle.
//!
//! The bundle packages the palette, the chosen typography and font scale,
//! the full gradient and texture records, and the generated CSS.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{serialize_sizes, FontScale, Gradient, Texture, TypographyPairing};
use crate::error::{Result, SwatchError};
use crate::types::Palette;

use super::css::serialize;

/// Default file name for a written bundle.
pub const BUNDLE_FILE_NAME: &str = "design-system.json";

/// One font role (heading or body) in the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRole {
    pub font_family: String,
    pub fallback: String,
    pub weights: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyEntry {
    pub heading: FontRole,
    pub body: FontRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontScaleEntry {
    pub name: String,
    pub ratio: f64,
    #[serde(serialize_with = "serialize_sizes")]
    pub sizes: IndexMap<String, f64>,
    pub line_heights: IndexMap<String, f64>,
}

/// The exported design system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignBundle {
    pub colors: Vec<String>,
    pub typography: TypographyEntry,
    pub font_scale: FontScaleEntry,
    pub gradient: Gradient,
    pub texture: Texture,
    pub css: String,
}

impl DesignBundle {
    pub fn new(
        palette: &Palette,
        font_scale: &FontScale,
        typography: &TypographyPairing,
        gradient: &Gradient,
        texture: &Texture,
    ) -> Self {
        Self {
            colors: palette.hexes(),
            typography: TypographyEntry {
                heading: FontRole {
                    font_family: typography.heading_font.clone(),
                    fallback: typography.fallbacks.heading.clone(),
                    weights: typography.weights.heading.clone(),
                },
                body: FontRole {
                    font_family: typography.body_font.clone(),
                    fallback: typography.fallbacks.body.clone(),
                    weights: typography.weights.body.clone(),
                },
            },
            font_scale: FontScaleEntry {
                name: font_scale.name.clone(),
                ratio: font_scale.ratio,
                sizes: font_scale.sizes.clone(),
                line_heights: font_scale.line_heights.clone(),
            },
            gradient: gradient.clone(),
            texture: texture.clone(),
            css: serialize(palette, font_scale, typography, gradient, texture),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SwatchError::Export {
            message: format!("Failed to serialize design bundle: {}", e),
        })
    }

    /// Write the bundle as JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write design bundle: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use tempfile::tempdir;

    fn bundle() -> DesignBundle {
        let catalog = Catalog::builtin().unwrap();
        let palette = Palette::from_hex_list(&["#1e3a8a", "#3b82f6", "#60a5fa", "#93c5fd", "#dbeafe"]);
        DesignBundle::new(
            &palette,
            catalog.font_scale("major-second").unwrap(),
            catalog.typography_pairing("playfair-source").unwrap(),
            catalog.gradient("sunset-linear").unwrap(),
            catalog.texture("dots").unwrap(),
        )
    }

    #[test]
    fn test_bundle_shape() {
        let json = bundle().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["colors"][0], "#1E3A8A");
        assert_eq!(parsed["colors"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["typography"]["heading"]["fontFamily"], "Playfair Display");
        assert_eq!(parsed["typography"]["heading"]["fallback"], "serif");
        assert_eq!(parsed["typography"]["body"]["weights"][1], 400);
        assert_eq!(parsed["fontScale"]["name"], "Major Second");
        assert_eq!(parsed["fontScale"]["ratio"], 1.125);
        assert_eq!(parsed["fontScale"]["sizes"]["2xl"], 23);
        assert_eq!(parsed["fontScale"]["lineHeights"]["base"], 1.5);
        assert_eq!(parsed["gradient"]["id"], "sunset-linear");
        assert_eq!(parsed["texture"]["opacity"], 0.1);
        assert!(parsed["css"].as_str().unwrap().starts_with(":root {\n  --color-1: #1E3A8A;"));
    }

    #[test]
    fn test_bundle_keeps_scale_order() {
        let json = bundle().to_json().unwrap();
        let xs = json.find("\"xs\"").unwrap();
        let six = json.find("\"6xl\"").unwrap();
        assert!(xs < six);
    }

    #[test]
    fn test_write_bundle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(BUNDLE_FILE_NAME);
        let original = bundle();

        original.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let read_back: DesignBundle = serde_json::from_str(&content).unwrap();
        assert_eq!(read_back, original);
    }
}

//! Catalog record types.
//!
//! Records are immutable configuration: the core reads named fields but never
//! validates or rewrites them. Field names are camelCase on the wire so the
//! YAML catalog and the exported JSON bundle share one shape.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Common surface for catalog records, used for lookup and filtering.
pub trait Record {
    /// Human-readable kind, used in error messages ("font scale").
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
}

/// A modular type scale: one font size and line height per named step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontScale {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_size: u32,
    pub ratio: f64,
    /// Step name to size in pixels, in declared order.
    #[serde(serialize_with = "serialize_sizes")]
    pub sizes: IndexMap<String, f64>,
    /// Step name to unitless line height, in declared order.
    pub line_heights: IndexMap<String, f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub use_case: Vec<String>,
}

/// Writes whole pixel sizes as integers (`16`, not `16.0`).
pub fn serialize_sizes<S: Serializer>(sizes: &IndexMap<String, f64>, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(sizes.len()))?;
    for (step, size) in sizes {
        if size.fract() == 0.0 && size.abs() < i64::MAX as f64 {
            map.serialize_entry(step, &(*size as i64))?;
        } else {
            map.serialize_entry(step, size)?;
        }
    }
    map.end()
}

/// Heading/body fallback families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFallbacks {
    pub heading: String,
    pub body: String,
}

/// Available weights for heading and body families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub heading: Vec<u16>,
    pub body: Vec<u16>,
}

/// A heading + body font pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPairing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub heading_font: String,
    pub body_font: String,
    #[serde(default)]
    pub category: String,
    pub fallbacks: FontFallbacks,
    pub weights: FontWeights,
}

/// A background gradient, carried as a CSS fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub direction: String,
    pub css: String,
    /// Presentation-only icon identifier.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A background texture: a CSS image fragment plus display opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub pattern: String,
    pub css: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Pattern identifiers whose tiles are drawn at 60px rather than 20px.
pub const LARGE_TILE_PATTERNS: [&str; 4] = ["noise", "paper", "waves", "brush"];

impl Texture {
    /// CSS `background-size` value for this texture's tile.
    pub fn background_size(&self) -> &'static str {
        if LARGE_TILE_PATTERNS.contains(&self.pattern.as_str()) {
            "60px 60px"
        } else {
            "20px 20px"
        }
    }

    /// Opacity to apply, defaulting to fully opaque. A declared `0` is kept.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }
}

/// A complete starter design: five colours plus recommended companions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub colors: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_font_scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_typography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_texture: Option<String>,
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn category(&self) -> &str {
                &self.category
            }
        }
    };
}

impl_record!(FontScale, "font scale");
impl_record!(TypographyPairing, "typography pairing");
impl_record!(Gradient, "gradient");
impl_record!(Texture, "texture");
impl_record!(Template, "template");

/// File-name stem for a record: lowercase name, whitespace as `-`.
pub fn file_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

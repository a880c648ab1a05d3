//! swatch - Colour palette and design token generator
//!
//! A library for generating harmonious five-colour palettes, pulling
//! palettes out of images, and turning a palette plus typography and
//! background choices into CSS design tokens.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod render;
pub mod session;
pub mod tokens;
pub mod types;
pub mod validation;

pub use catalog::{Catalog, FontScale, Gradient, Record, Template, Texture, TypographyPairing};
pub use config::{Manifest, MANIFEST_FILE};
pub use error::{Result, SwatchError};
pub use extract::{extract_palette, ExtractOptions, ImageCrateDecoder, ImageDecoder, PixelBuffer};
pub use render::{export_gradient_png, export_gradient_svg, export_texture_svg, GradientSpec};
pub use session::{AnalysisGate, DesignState};
pub use tokens::{serialize, DesignBundle};
pub use types::{derive_colour, ColorModel, Colour, Hsl, Palette, PaletteSlot, PALETTE_SIZE};
pub use validation::{validate_catalog, Diagnostic, Severity, ValidationResult};

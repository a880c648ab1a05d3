//! Rendering module for swatch.
//!
//! Turns gradient CSS into a vector description and a fixed-size raster,
//! and pulls embedded SVG markup out of texture data URLs.

mod gradient;
mod png;
mod svg;

pub use gradient::{ColourStop, GradientSpec};
pub use png::{export_gradient_png, rasterize_svg, write_png};
pub use svg::{embedded_svg, export_gradient_svg, export_texture_svg};

/// Width of exported gradient images.
pub const RASTER_WIDTH: u32 = 400;

/// Height of exported gradient images.
pub const RASTER_HEIGHT: u32 = 200;

//! PNG output for rasterized backgrounds.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use tracing::debug;

use crate::catalog::{file_stem, Gradient};
use crate::error::{Result, SwatchError};

use super::gradient::GradientSpec;
use super::{RASTER_HEIGHT, RASTER_WIDTH};

/// Write an image to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SwatchError::Export {
            message: format!("Failed to write {}: {}", path.display(), e),
        })
}

/// Render an SVG document into a `width` x `height` image.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).map_err(|e| SwatchError::Export {
        message: format!("Failed to parse SVG: {}", e),
    })?;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| SwatchError::Export {
        message: format!("Cannot allocate a {}x{} canvas", width, height),
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut img = RgbaImage::new(width, height);
    for (pixel, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let c = pixel.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(img)
}

/// Rasterize a catalog gradient at the fixed export size and write it to
/// `dir/<name>.png`. Returns the written path.
///
/// Unsupported gradients fail before anything is drawn or written.
pub fn export_gradient_png(gradient: &Gradient, dir: &Path) -> Result<PathBuf> {
    let spec = GradientSpec::from_gradient(gradient)?;
    let img = spec.rasterize(RASTER_WIDTH, RASTER_HEIGHT)?;

    let path = dir.join(format!("{}.png", file_stem(&gradient.name)));
    write_png(&img, &path)?;
    debug!(gradient = %gradient.id, path = %path.display(), "exported gradient");

    Ok(path)
}

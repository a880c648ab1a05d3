//! Turning image files into pixel buffers.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::trace;

use crate::error::{Result, SwatchError};

use super::PixelBuffer;

/// Longest side, in pixels, an image is reduced to before sampling.
pub const MAX_DIMENSION: u32 = 200;

/// Something that can load an image file as RGBA pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;
}

/// Decoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCrateDecoder {
    pub max_dimension: u32,
}

impl Default for ImageCrateDecoder {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
        }
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        if !is_supported_image(path) {
            return Err(SwatchError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }

        let img = image::open(path).map_err(|e| SwatchError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let img = downscale(img, self.max_dimension);
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        trace!(path = %path.display(), width, height, "decoded image");

        PixelBuffer::from_raw(width, height, rgba.into_raw()).ok_or_else(|| SwatchError::Decode {
            path: path.to_path_buf(),
            message: "decoded buffer has an unexpected size".to_string(),
        })
    }
}

/// Whether `path` names a raster format the decoder can read.
pub fn is_supported_image(path: &Path) -> bool {
    ImageFormat::from_path(path)
        .map(|format| format.reading_enabled())
        .unwrap_or(false)
}

/// Shrink `img` so its longer side is at most `max_dimension`, keeping the
/// aspect ratio. Smaller images are left alone.
fn downscale(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if max_dimension == 0 || (width <= max_dimension && height <= max_dimension) {
        return img;
    }

    let scale = f64::min(
        max_dimension as f64 / width as f64,
        max_dimension as f64 / height as f64,
    );
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    img.resize_exact(new_width, new_height, FilterType::Triangle)
}

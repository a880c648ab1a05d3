//! Image colour extraction.
//!
//! Reduces a decoded RGBA buffer to a handful of representative colours:
//!
//! 1. sample every 10th pixel, skipping ones with alpha below 128
//! 2. quantize each channel down to a multiple of 32 and count buckets
//! 3. keep the 20 most frequent buckets (ties keep first-seen order)
//! 4. cluster those candidates with k-means (k = 5, 10 iterations)
//!
//! Everything after decoding is a pure function of the buffer contents.

mod decode;
mod kmeans;

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::types::Colour;

pub use decode::{is_supported_image, ImageCrateDecoder, ImageDecoder, MAX_DIMENSION};
pub use kmeans::kmeans;

/// A decoded image as tightly packed RGBA bytes, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes. Returns `None` if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if data.len() != expected {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Build a buffer from per-pixel RGBA values.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Option<Self> {
        Self::from_raw(width, height, pixels.iter().flatten().copied().collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate pixels as `[r, g, b, a]`.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Tuning knobs for [`extract_palette`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Sample one pixel in every `pixel_step`.
    pub pixel_step: usize,
    /// Pixels with alpha below this are ignored.
    pub alpha_threshold: u8,
    /// Channel quantization step.
    pub quant_step: u8,
    /// How many frequent buckets go into clustering.
    pub candidates: usize,
    /// Number of clusters, and so the maximum number of output colours.
    pub clusters: usize,
    pub iterations: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            pixel_step: 10,
            alpha_threshold: 128,
            quant_step: 32,
            candidates: 20,
            clusters: 5,
            iterations: 10,
        }
    }
}

/// Sample opaque pixels and count quantized buckets in first-seen order.
pub fn histogram(buffer: &PixelBuffer, options: &ExtractOptions) -> IndexMap<Colour, usize> {
    let step = options.quant_step.max(1);
    let quantize = |c: u8| (c / step) * step;

    let mut counts: IndexMap<Colour, usize> = IndexMap::new();
    for [r, g, b, a] in buffer.pixels().step_by(options.pixel_step.max(1)) {
        if a < options.alpha_threshold {
            continue;
        }
        let key = Colour::new(quantize(r), quantize(g), quantize(b));
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// The `limit` most frequent buckets, most frequent first.
///
/// The sort is stable, so equal counts keep first-seen order.
pub fn top_candidates(counts: &IndexMap<Colour, usize>, limit: usize) -> Vec<Colour> {
    let mut ranked: Vec<(Colour, usize)> = counts.iter().map(|(c, n)| (*c, *n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(limit).map(|(c, _)| c).collect()
}

/// Run the full sampling, quantization and clustering pipeline.
///
/// Returns at most `options.clusters` colours. A buffer with no opaque
/// sampled pixels yields an empty list.
pub fn extract_palette(buffer: &PixelBuffer, options: &ExtractOptions) -> Vec<Colour> {
    let counts = histogram(buffer, options);
    let candidates = top_candidates(&counts, options.candidates);
    let colours = kmeans(&candidates, options.clusters, options.iterations);

    debug!(
        width = buffer.width(),
        height = buffer.height(),
        buckets = counts.len(),
        candidates = candidates.len(),
        colours = colours.len(),
        "extracted palette"
    );

    colours
}

/// Decode `path` with `decoder` and extract its palette.
pub fn extract_from_path<D: ImageDecoder + ?Sized>(
    path: &Path,
    decoder: &D,
    options: &ExtractOptions,
) -> Result<Vec<Colour>> {
    let buffer = decoder.decode(path)?;
    Ok(extract_palette(&buffer, options))
}

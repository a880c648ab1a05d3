//! The working design: palette, colour model and catalog selections.
//!
//! A [`DesignState`] owns clones of the records it has selected, so it can
//! be serialized without holding on to the catalog.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use tracing::{debug, info};

use crate::catalog::{Catalog, FontScale, Gradient, Template, Texture, TypographyPairing};
use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::extract::{extract_palette, ExtractOptions, ImageDecoder};
use crate::tokens::{serialize, DesignBundle};
use crate::types::{ColorModel, Colour, Palette, PALETTE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignState {
    pub palette: Palette,
    pub model: ColorModel,
    pub font_scale: FontScale,
    pub typography: TypographyPairing,
    pub gradient: Gradient,
    pub texture: Texture,
}

impl DesignState {
    /// A fresh design with a generated palette and the manifest's selections.
    pub fn new<R: Rng + ?Sized>(catalog: &Catalog, manifest: &Manifest, rng: &mut R) -> Result<Self> {
        Ok(Self {
            palette: Palette::generate(manifest.model, rng),
            model: manifest.model,
            font_scale: catalog.font_scale(&manifest.font_scale)?.clone(),
            typography: catalog.typography_pairing(&manifest.typography)?.clone(),
            gradient: catalog.gradient(&manifest.gradient)?.clone(),
            texture: catalog.texture(&manifest.texture)?.clone(),
        })
    }

    pub fn select_font_scale(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        self.font_scale = catalog.font_scale(id)?.clone();
        Ok(())
    }

    pub fn select_typography(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        self.typography = catalog.typography_pairing(id)?.clone();
        Ok(())
    }

    pub fn select_gradient(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        self.gradient = catalog.gradient(id)?.clone();
        Ok(())
    }

    pub fn select_texture(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        self.texture = catalog.texture(id)?.clone();
        Ok(())
    }

    /// Regenerate unlocked slots under the current model.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.palette = self.palette.regenerate(self.model, rng);
    }

    pub fn toggle_lock(&mut self, index: usize) {
        self.palette.toggle_lock(index);
    }

    /// Replace the palette with unlocked slots from hex text.
    pub fn apply_palette<S: AsRef<str>>(&mut self, colours: &[S]) {
        self.palette = Palette::from_hex_list(colours);
    }

    /// Apply a template's colours and adopt whichever of its recommended
    /// records exist in `catalog`.
    pub fn apply_template(&mut self, template: &Template, catalog: &Catalog) {
        self.apply_palette(template.colors.as_slice());

        if let Some(scale) = template.recommended_font_scale.as_deref().and_then(|id| catalog.font_scale(id).ok()) {
            self.font_scale = scale.clone();
        }
        if let Some(pairing) = template
            .recommended_typography
            .as_deref()
            .and_then(|id| catalog.typography_pairing(id).ok())
        {
            self.typography = pairing.clone();
        }
        if let Some(gradient) = template.recommended_gradient.as_deref().and_then(|id| catalog.gradient(id).ok()) {
            self.gradient = gradient.clone();
        }
        if let Some(texture) = template.recommended_texture.as_deref().and_then(|id| catalog.texture(id).ok()) {
            self.texture = texture.clone();
        }

        debug!(template = %template.id, "applied template");
    }

    /// Replace the palette with extracted colours. Missing slots are black,
    /// extra colours are ignored.
    pub fn apply_extracted(&mut self, colours: &[Colour]) {
        let slots: [Colour; PALETTE_SIZE] =
            std::array::from_fn(|i| colours.get(i).copied().unwrap_or(Colour::BLACK));
        self.palette = Palette::from_colours(slots);
    }

    /// Decode and analyze an image, then apply its colours.
    ///
    /// Fails with [`SwatchError::Busy`] while another analysis holds `gate`.
    /// The palette is only touched once decoding has succeeded.
    pub fn apply_image<D: ImageDecoder + ?Sized>(
        &mut self,
        path: &Path,
        decoder: &D,
        options: &ExtractOptions,
        gate: &AnalysisGate,
    ) -> Result<Vec<Colour>> {
        let _guard = gate.try_begin()?;
        let buffer = decoder.decode(path)?;
        let colours = extract_palette(&buffer, options);
        info!(path = %path.display(), count = colours.len(), "analyzed image");
        self.apply_extracted(&colours);
        Ok(colours)
    }

    pub fn css(&self) -> String {
        serialize(&self.palette, &self.font_scale, &self.typography, &self.gradient, &self.texture)
    }

    pub fn bundle(&self) -> DesignBundle {
        DesignBundle::new(&self.palette, &self.font_scale, &self.typography, &self.gradient, &self.texture)
    }
}

/// Guards against starting an image analysis while one is in flight.
#[derive(Debug, Default)]
pub struct AnalysisGate {
    analyzing: AtomicBool,
}

impl AnalysisGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an analysis as started. The returned guard clears the flag when
    /// dropped.
    pub fn try_begin(&self) -> Result<AnalysisGuard<'_>> {
        self.analyzing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SwatchError::Busy)?;
        Ok(AnalysisGuard { gate: self })
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.load(Ordering::Acquire)
    }
}

/// Held for the duration of one analysis.
#[derive(Debug)]
pub struct AnalysisGuard<'a> {
    gate: &'a AnalysisGate,
}

impl Drop for AnalysisGuard<'_> {
    fn drop(&mut self) {
        self.gate.analyzing.store(false, Ordering::Release);
    }
}

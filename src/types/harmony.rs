//! Colour harmony rules.
//!
//! Each [`ColorModel`] derives the colour for a palette slot from a base
//! colour by rotating its hue or shifting its lightness:
//! - `complementary` - slot 1 is the opposite hue
//! - `triadic` - slots 1 and 2 are +120 and +240 degrees
//! - `analogous` - every slot steps 30 degrees further round the wheel
//! - `monochromatic` - same hue, lightness stepped by 20 around slot 2
//! - `tetradic` - slots 1-3 are +90, +180 and +270 degrees
//! - `default` - a random nudge of hue, saturation and lightness
//!
//! Slots a model does not define fall back to the base colour.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

use super::colour::{Colour, Hsl};

/// Named harmony rule used to derive non-base slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// Random variation around the base colour
    #[default]
    Default,
    /// Colours opposite on the colour wheel
    Complementary,
    /// Three evenly spaced colours
    Triadic,
    /// Adjacent colours on the wheel
    Analogous,
    /// Variations of a single hue
    Monochromatic,
    /// Four colours forming a rectangle
    Tetradic,
}

impl ColorModel {
    pub const ALL: [ColorModel; 6] = [
        ColorModel::Default,
        ColorModel::Complementary,
        ColorModel::Triadic,
        ColorModel::Analogous,
        ColorModel::Monochromatic,
        ColorModel::Tetradic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Default => "default",
            ColorModel::Complementary => "complementary",
            ColorModel::Triadic => "triadic",
            ColorModel::Analogous => "analogous",
            ColorModel::Monochromatic => "monochromatic",
            ColorModel::Tetradic => "tetradic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ColorModel::Default => "AI-inspired balanced palettes",
            ColorModel::Complementary => "Colors opposite on the color wheel",
            ColorModel::Triadic => "Three evenly spaced colors",
            ColorModel::Analogous => "Adjacent colors on the wheel",
            ColorModel::Monochromatic => "Variations of a single hue",
            ColorModel::Tetradic => "Four colors forming a rectangle",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        ColorModel::ALL
            .into_iter()
            .find(|m| m.name() == s.trim().to_lowercase())
            .ok_or_else(|| SwatchError::Parse {
                message: format!("Unknown colour model: {}", s),
                help: Some(
                    "Available models: default, complementary, triadic, analogous, monochromatic, tetradic"
                        .to_string(),
                ),
            })
    }
}

/// Derive the colour for `slot` from `base` under `model`.
///
/// Slot 0 is the base by the caller's convention; this function applies the
/// rule for whatever index it is given. Only [`ColorModel::Default`] reads
/// from `rng`.
pub fn derive_colour<R: Rng + ?Sized>(base: Colour, model: ColorModel, slot: usize, rng: &mut R) -> Colour {
    let Hsl { h, s, l } = base.to_hsl();
    let rotate = |degrees: f32| Colour::from_hsl(Hsl::new(wrap_hue(h + degrees), s, l));

    match (model, slot) {
        (ColorModel::Complementary, 1) => rotate(180.0),
        (ColorModel::Triadic, 1) => rotate(120.0),
        (ColorModel::Triadic, 2) => rotate(240.0),
        (ColorModel::Analogous, i) => rotate(i as f32 * 30.0),
        (ColorModel::Monochromatic, i) => {
            let offset = (i as f32 - 2.0) * 20.0;
            Colour::from_hsl(Hsl::new(h, s, (l + offset).clamp(10.0, 90.0)))
        }
        (ColorModel::Tetradic, 1) => rotate(90.0),
        (ColorModel::Tetradic, 2) => rotate(180.0),
        (ColorModel::Tetradic, 3) => rotate(270.0),
        (ColorModel::Default, _) => {
            let hue_shift = rng.random_range(-30.0..=30.0_f32);
            let sat_shift = rng.random_range(-20.0..=20.0_f32);
            let light_shift = rng.random_range(-20.0..=20.0_f32);
            Colour::from_hsl(Hsl::new(
                wrap_hue(h + hue_shift),
                (s + sat_shift).clamp(10.0, 90.0),
                (l + light_shift).clamp(15.0, 85.0),
            ))
        }
        _ => base,
    }
}

/// Wrap a hue into `[0, 360)`.
fn wrap_hue(h: f32) -> f32 {
    let wrapped = (h + 360.0).rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

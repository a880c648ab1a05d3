//! Core domain types for swatch.
//!
//! This module contains the colour machinery the rest of the tool builds on:
//! - `Colour` - RGB values with hex and HSL conversions
//! - `ColorModel` - harmony rules for deriving related colours
//! - `Palette` - the five-slot working palette with locks

mod colour;
mod harmony;
mod palette;

pub use colour::{Colour, Hsl};
pub use harmony::{derive_colour, ColorModel};
pub use palette::{random_colour, Palette, PaletteSlot, PALETTE_SIZE};

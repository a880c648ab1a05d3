//! Five-slot working palette with per-slot locks.

use std::fmt;

use rand::Rng;
use tracing::debug;

use super::colour::Colour;
use super::harmony::{derive_colour, ColorModel};

/// Number of slots in a palette.
pub const PALETTE_SIZE: usize = 5;

/// A single palette slot.
///
/// The hex text is cached alongside the colour and only ever set together
/// with it, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSlot {
    colour: Colour,
    hex: String,
    pub locked: bool,
}

impl PaletteSlot {
    /// Create an unlocked slot. The cached hex is the uppercase `#RRGGBB` form.
    pub fn new(colour: Colour) -> Self {
        Self {
            colour,
            hex: colour.to_string(),
            locked: false,
        }
    }

    /// Create an unlocked slot from hex text.
    ///
    /// Malformed text yields a black slot.
    pub fn from_hex(text: &str) -> Self {
        Self::new(Colour::from_hex(text))
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Uppercase `#RRGGBB` text for display and export.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Replace the colour, refreshing the cached hex.
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
        self.hex = colour.to_string();
    }
}

/// An ordered set of exactly five palette slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: [PaletteSlot; PALETTE_SIZE],
}

impl Palette {
    /// Build an unlocked palette from five colours.
    pub fn from_colours(colours: [Colour; PALETTE_SIZE]) -> Self {
        Self {
            slots: colours.map(PaletteSlot::new),
        }
    }

    /// Generate a first palette with no locks to honour.
    pub fn generate<R: Rng + ?Sized>(model: ColorModel, rng: &mut R) -> Self {
        Self::regenerate_from(None, model, rng)
    }

    /// Replace every slot with unlocked slots built from hex text.
    ///
    /// Missing entries become black, extra entries are ignored. Any existing
    /// locks are discarded.
    pub fn from_hex_list<S: AsRef<str>>(colours: &[S]) -> Self {
        let slots = std::array::from_fn(|i| {
            colours
                .get(i)
                .map_or_else(|| PaletteSlot::new(Colour::BLACK), |c| PaletteSlot::from_hex(c.as_ref()))
        });
        Self { slots }
    }

    /// Regenerate unlocked slots under `model`, keeping locked ones.
    pub fn regenerate<R: Rng + ?Sized>(&self, model: ColorModel, rng: &mut R) -> Self {
        Self::regenerate_from(Some(self), model, rng)
    }

    fn regenerate_from<R: Rng + ?Sized>(current: Option<&Palette>, model: ColorModel, rng: &mut R) -> Self {
        let locked_base = current.and_then(|p| p.slots.iter().find(|s| s.locked)).map(|s| s.colour);
        let base = locked_base.unwrap_or_else(|| random_colour(rng));

        debug!(%model, base = %base, from_lock = locked_base.is_some(), "regenerating palette");

        let slots = std::array::from_fn(|i| match current.map(|p| &p.slots[i]) {
            Some(slot) if slot.locked => slot.clone(),
            _ if i == 0 => PaletteSlot::new(base),
            _ => PaletteSlot::new(derive_colour(base, model, i, rng)),
        });

        Self { slots }
    }

    /// Flip the lock on one slot. Out-of-range indices are ignored.
    pub fn toggle_lock(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.locked = !slot.locked;
        }
    }

    /// Get a slot by index.
    pub fn get(&self, index: usize) -> Option<&PaletteSlot> {
        self.slots.get(index)
    }

    /// Get a mutable slot by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PaletteSlot> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[PaletteSlot; PALETTE_SIZE] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteSlot> {
        self.slots.iter()
    }

    pub fn colours(&self) -> [Colour; PALETTE_SIZE] {
        std::array::from_fn(|i| self.slots[i].colour)
    }

    /// Uppercase hex text of every slot, in order.
    pub fn hexes(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.hex.clone()).collect()
    }

    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hexes = self.hexes();
        f.write_str(&hexes.join(" "))
    }
}

/// A colour with each channel uniform in `[0, 255]`.
pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    Colour::new(rng.random(), rng.random(), rng.random())
}

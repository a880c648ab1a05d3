//! Colour type, hex text forms and HSL conversion.

use std::fmt;
use std::str::FromStr;

use palette::{IntoColor, Srgb};

use crate::error::{Result, SwatchError};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/lightness decomposition of a colour.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black. Also the result of parsing malformed hex text.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a `#RRGGBB` string leniently.
    ///
    /// The leading `#` is optional and digits are case-insensitive. Anything
    /// that is not exactly six hex digits becomes [`Colour::BLACK`]; use
    /// [`Colour::parse_hex`] when the caller needs to know about bad input.
    pub fn from_hex(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or(Self::BLACK)
    }

    /// Parse a `#RRGGBB` string, reporting malformed input.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SwatchError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format, e.g. #1E3A8A".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Decompose into hue, saturation and lightness.
    pub fn to_hsl(self) -> Hsl {
        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: palette::Hsl = rgb.into_color();
        let l = hsl.lightness * 100.0;

        if self.r == self.g && self.g == self.b {
            return Hsl::new(0.0, 0.0, l);
        }

        let mut h = hsl.hue.into_positive_degrees();
        if h >= 360.0 {
            h -= 360.0;
        }

        Hsl::new(h, hsl.saturation * 100.0, l)
    }

    /// Build a colour from hue (degrees), saturation and lightness (percent).
    ///
    /// Channels are rounded to the nearest integer.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        let hsl: palette::Hsl = palette::Hsl::new(h, s, l);
        let rgb: Srgb<f32> = hsl.into_color();
        Self::new(
            unit_to_channel(rgb.red),
            unit_to_channel(rgb.green),
            unit_to_channel(rgb.blue),
        )
    }

    /// Plain Euclidean distance in RGB space.
    pub fn distance(self, other: Colour) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn unit_to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#FF0000"), Colour::new(255, 0, 0));
        assert_eq!(Colour::from_hex("#1a1a2e"), Colour::new(0x1a, 0x1a, 0x2e));
        assert_eq!(Colour::from_hex("1E3A8A"), Colour::new(0x1e, 0x3a, 0x8a));
    }

    #[test]
    fn test_from_hex_malformed_is_black() {
        // Lenient parsing: bad input is normalised to black, not reported.
        assert_eq!(Colour::from_hex("#F00"), Colour::BLACK);
        assert_eq!(Colour::from_hex("#GGGGGG"), Colour::BLACK);
        assert_eq!(Colour::from_hex("#1234567"), Colour::BLACK);
        assert_eq!(Colour::from_hex(" #FF0000"), Colour::BLACK);
        assert_eq!(Colour::from_hex(""), Colour::BLACK);
    }

    #[test]
    fn test_parse_hex_strict() {
        assert!(Colour::parse_hex("#F00").is_err());
        assert!(Colour::parse_hex("#+1+2+3").is_err());
        assert!("zz0000".parse::<Colour>().is_err());
        assert_eq!("#00ff00".parse::<Colour>().unwrap(), Colour::new(0, 255, 0));
    }

    #[test]
    fn test_to_hex_lowercase_padded() {
        assert_eq!(Colour::new(1, 10, 255).to_hex(), "#010aff");
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(format!("{}", Colour::new(0x1e, 0x3a, 0x8a)), "#1E3A8A");
    }

    #[test]
    fn test_to_hsl_primaries() {
        let red = Colour::new(255, 0, 0).to_hsl();
        assert!(red.h.abs() < 0.01);
        assert!((red.s - 100.0).abs() < 0.01);
        assert!((red.l - 50.0).abs() < 0.01);

        let blue = Colour::new(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_to_hsl_grey_has_no_hue() {
        let grey = Colour::new(128, 128, 128).to_hsl();
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!((grey.l - 50.2).abs() < 0.1);
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Colour::from_hsl(Hsl::new(120.0, 100.0, 50.0)), Colour::new(0, 255, 0));
        assert_eq!(Colour::from_hsl(Hsl::new(240.0, 100.0, 50.0)), Colour::new(0, 0, 255));
        assert_eq!(Colour::from_hsl(Hsl::new(0.0, 0.0, 100.0)), Colour::WHITE);
        // Hue wraps
        assert_eq!(Colour::from_hsl(Hsl::new(480.0, 100.0, 50.0)), Colour::new(0, 255, 0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Colour::BLACK.distance(Colour::BLACK), 0.0);
        assert_eq!(Colour::new(3, 4, 0).distance(Colour::BLACK), 5.0);
    }

    proptest! {
        #[test]
        fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Colour::new(r, g, b);
            prop_assert_eq!(Colour::from_hex(&c.to_hex()), c);
        }

        #[test]
        fn hex_text_normalises_to_lowercase(s in "#[0-9a-fA-F]{6}") {
            prop_assert_eq!(Colour::from_hex(&s).to_hex(), s.to_lowercase());
        }

        #[test]
        fn hsl_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Colour::new(r, g, b);
            let back = Colour::from_hsl(c.to_hsl());
            prop_assert!((back.r as i16 - r as i16).abs() <= 1);
            prop_assert!((back.g as i16 - g as i16).abs() <= 1);
            prop_assert!((back.b as i16 - b as i16).abs() <= 1);
        }

        #[test]
        fn hsl_ranges(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = Colour::new(r, g, b).to_hsl();
            prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0);
            prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.01);
            prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.01);
        }
    }
}

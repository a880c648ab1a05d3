//! CSS custom properties and utility classes for a design.

use std::fmt;

use crate::catalog::{FontScale, Gradient, Texture, TypographyPairing};
use crate::types::Palette;

/// Everything the stylesheet is generated from.
///
/// Formatting is deterministic: the same inputs always produce the same
/// bytes. Scale steps appear in the font scale's declared order and
/// palette slots are numbered from 1.
#[derive(Debug, Clone, Copy)]
pub struct TokenSheet<'a> {
    pub palette: &'a Palette,
    pub font_scale: &'a FontScale,
    pub typography: &'a TypographyPairing,
    pub gradient: &'a Gradient,
    pub texture: &'a Texture,
}

/// Render the design as a CSS stylesheet.
pub fn serialize(
    palette: &Palette,
    font_scale: &FontScale,
    typography: &TypographyPairing,
    gradient: &Gradient,
    texture: &Texture,
) -> String {
    TokenSheet {
        palette,
        font_scale,
        typography,
        gradient,
        texture,
    }
    .to_string()
}

impl TokenSheet<'_> {
    fn write_root(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for (i, slot) in self.palette.iter().enumerate() {
            writeln!(f, "  --color-{}: {};", i + 1, slot.hex())?;
        }
        for (step, size) in &self.font_scale.sizes {
            writeln!(f, "  --font-size-{}: {}px;", step, size)?;
        }
        for (step, line_height) in &self.font_scale.line_heights {
            writeln!(f, "  --line-height-{}: {};", step, line_height)?;
        }

        let t = self.typography;
        writeln!(f, "  --font-heading: {}, {};", t.heading_font, t.fallbacks.heading)?;
        writeln!(f, "  --font-body: {}, {};", t.body_font, t.fallbacks.body)?;
        writeln!(f, "  --gradient-background: {};", self.gradient.css)?;
        writeln!(f, "  --texture-background-image: {};", self.texture.css)?;
        writeln!(f, "  --texture-background-size: {};", self.texture.background_size())?;
        writeln!(f, "}}")
    }

    fn write_typography(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Typography Classes */")?;
        rule(f, ".heading", &["font-family: var(--font-heading)", "font-weight: 600"])?;
        writeln!(f)?;
        rule(f, ".body", &["font-family: var(--font-body)", "font-weight: 400"])
    }

    fn write_font_sizes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Font Size Classes */")?;
        for (i, step) in self.font_scale.sizes.keys().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            rule(
                f,
                &format!(".text-{}", step),
                &[
                    format!("font-size: var(--font-size-{})", step).as_str(),
                    format!("line-height: var(--line-height-{})", step).as_str(),
                ],
            )?;
        }
        Ok(())
    }

    fn write_colours(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Color Classes */")?;
        for n in 1..=self.palette.len() {
            if n > 1 {
                writeln!(f)?;
            }
            rule(f, &format!(".text-color-{}", n), &[format!("color: var(--color-{})", n).as_str()])?;
            writeln!(f)?;
            rule(
                f,
                &format!(".bg-color-{}", n),
                &[format!("background-color: var(--color-{})", n).as_str()],
            )?;
        }
        Ok(())
    }

    fn write_backgrounds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Gradient and Texture Classes */")?;
        rule(f, ".bg-gradient", &["background: var(--gradient-background)"])?;
        writeln!(f)?;
        rule(
            f,
            ".bg-texture",
            &[
                "background-image: var(--texture-background-image)",
                "background-size: var(--texture-background-size)",
                format!("opacity: {}", self.texture.effective_opacity()).as_str(),
            ],
        )
    }
}

impl fmt::Display for TokenSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_root(f)?;
        writeln!(f)?;
        self.write_typography(f)?;
        writeln!(f)?;
        self.write_font_sizes(f)?;
        writeln!(f)?;
        self.write_colours(f)?;
        writeln!(f)?;
        self.write_backgrounds(f)
    }
}

fn rule(f: &mut fmt::Formatter<'_>, selector: &str, declarations: &[&str]) -> fmt::Result {
    writeln!(f, "{} {{", selector)?;
    for declaration in declarations {
        writeln!(f, "  {};", declaration)?;
    }
    writeln!(f, "}}")
}

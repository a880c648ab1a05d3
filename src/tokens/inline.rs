//! Single-line forms for pasting into a stylesheet or `style` attribute.

use crate::catalog::{Gradient, Texture};
use crate::types::Colour;

/// Uppercase `#RRGGBB`.
pub fn colour_text(colour: Colour) -> String {
    colour.to_string()
}

/// `background: <css>;`
pub fn gradient_declaration(gradient: &Gradient) -> String {
    format!("background: {};", gradient.css)
}

/// Inline style for a texture tile. Opacity is only included when the
/// texture declares one.
pub fn texture_inline_style(texture: &Texture) -> String {
    let mut style = format!(
        "background-image:{};background-size:{};",
        texture.css,
        texture.background_size()
    );
    if let Some(opacity) = texture.opacity {
        style.push_str(&format!("opacity:{};", opacity));
    }
    style
}

//! Design token output: the CSS stylesheet, one-line clipboard forms and
//! the JSON bundle.

mod bundle;
mod css;
mod inline;

pub use bundle::{DesignBundle, FontRole, FontScaleEntry, TypographyEntry, BUNDLE_FILE_NAME};
pub use css::{serialize, TokenSheet};
pub use inline::{colour_text, gradient_declaration, texture_inline_style};

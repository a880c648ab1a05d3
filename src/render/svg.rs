//! Vector exports: embedded-SVG textures and gradient SVG documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{file_stem, Gradient, Texture};
use crate::error::{Result, SwatchError};

use super::gradient::GradientSpec;
use super::{RASTER_HEIGHT, RASTER_WIDTH};

const SVG_DATA_PREFIX: &str = "data:image/svg+xml";

/// The SVG markup embedded in a `url("data:image/svg+xml,...")` fragment.
///
/// Returns `None` for anything that is not a percent-encoded SVG data URL.
pub fn embedded_svg(css: &str) -> Option<String> {
    let inner = css.trim().strip_prefix("url(")?.strip_suffix(')')?.trim();
    let inner = strip_quotes(inner);
    let rest = inner.strip_prefix(SVG_DATA_PREFIX)?;
    let (params, payload) = rest.split_once(',')?;
    if params.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
        return None;
    }
    String::from_utf8(percent_decode(payload)).ok()
}

/// Write the texture's embedded SVG to `dir/<name>.svg`.
pub fn export_texture_svg(texture: &Texture, dir: &Path) -> Result<PathBuf> {
    let svg = embedded_svg(&texture.css).ok_or_else(|| SwatchError::ExportUnsupported {
        what: format!("texture '{}'", texture.name),
    })?;

    let path = dir.join(format!("{}.svg", file_stem(&texture.name)));
    write_svg(&svg, &path)?;
    debug!(texture = %texture.id, path = %path.display(), "exported texture");
    Ok(path)
}

/// Write the gradient's vector description to `dir/<name>.svg`.
pub fn export_gradient_svg(gradient: &Gradient, dir: &Path) -> Result<PathBuf> {
    let spec = GradientSpec::from_gradient(gradient)?;
    let path = dir.join(format!("{}.svg", file_stem(&gradient.name)));
    write_svg(&spec.to_svg(RASTER_WIDTH, RASTER_HEIGHT, 1.0), &path)?;
    Ok(path)
}

fn write_svg(svg: &str, path: &Path) -> Result<()> {
    fs::write(path, svg).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(unquoted) = s.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return unquoted;
        }
    }
    s
}

/// Decode `%XX` escapes. Malformed escapes are kept as literal text.
fn percent_decode(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

//! Gradient CSS to vector description and raster.
//!
//! The raster is always drawn from the SVG document, so a PNG export and
//! an SVG export of the same gradient agree.
//!
//! Only `linear-gradient(...)` and `radial-gradient(...)` with hex colour
//! stops are understood. Everything else (conic gradients, layered
//! backgrounds, `rgba()` stops) is reported as unsupported before any pixel
//! work happens.

use std::fmt::Write as _;

use image::RgbaImage;

use crate::catalog::Gradient;
use crate::error::{Result, SwatchError};
use crate::types::Colour;

use super::png::rasterize_svg;

/// A colour stop. `offset` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourStop {
    pub colour: Colour,
    pub offset: f64,
}

/// A gradient in a form that can be drawn without a CSS engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientSpec {
    /// `angle` in CSS degrees: 0 points up, 90 points right.
    Linear { angle: f64, stops: Vec<ColourStop> },
    /// Centred circle reaching the edge midpoints.
    Radial { stops: Vec<ColourStop> },
}

impl GradientSpec {
    /// Parse a CSS gradient fragment.
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();

        if let Some(args) = function_args(css, "linear-gradient") {
            let parts = split_top_level(args);
            let (angle, stop_parts) = match parts.first() {
                Some(first) if first.ends_with("deg") => {
                    let angle = first.trim_end_matches("deg").trim().parse::<f64>().ok()?;
                    (angle, &parts[1..])
                }
                Some(first) if first.starts_with("to ") => (keyword_angle(&first[3..]), &parts[1..]),
                _ => (180.0, &parts[..]),
            };
            return Some(GradientSpec::Linear {
                angle,
                stops: parse_stops(stop_parts)?,
            });
        }

        if let Some(args) = function_args(css, "radial-gradient") {
            let parts = split_top_level(args);
            let stop_parts = match parts.first() {
                Some(first) if first.starts_with("circle") || first.starts_with("ellipse") => &parts[1..],
                _ => &parts[..],
            };
            return Some(GradientSpec::Radial {
                stops: parse_stops(stop_parts)?,
            });
        }

        None
    }

    /// Parse a catalog gradient, reporting unsupported fragments.
    pub fn from_gradient(gradient: &Gradient) -> Result<Self> {
        Self::parse(&gradient.css).ok_or_else(|| SwatchError::ExportUnsupported {
            what: format!("gradient '{}'", gradient.name),
        })
    }

    pub fn stops(&self) -> &[ColourStop] {
        match self {
            GradientSpec::Linear { stops, .. } | GradientSpec::Radial { stops } => stops,
        }
    }

    /// The SVG document describing this gradient over a `width` x `height`
    /// rectangle.
    pub fn to_svg(&self, width: u32, height: u32, opacity: f64) -> String {
        let mut stops = String::new();
        for stop in self.stops() {
            let _ = writeln!(
                stops,
                "      <stop offset=\"{}%\" stop-color=\"{}\"/>",
                number(stop.offset * 100.0),
                stop.colour.to_hex()
            );
        }

        let open = match self {
            GradientSpec::Linear { angle, .. } => {
                let [x1, y1, x2, y2] = linear_vector(*angle);
                format!(
                    "<linearGradient id=\"grad\" x1=\"{}%\" y1=\"{}%\" x2=\"{}%\" y2=\"{}%\">",
                    number(x1 * 100.0),
                    number(y1 * 100.0),
                    number(x2 * 100.0),
                    number(y2 * 100.0)
                )
            }
            GradientSpec::Radial { .. } => {
                "<radialGradient id=\"grad\" cx=\"50%\" cy=\"50%\" r=\"50%\" fx=\"50%\" fy=\"50%\">".to_string()
            }
        };
        let close = match self {
            GradientSpec::Linear { .. } => "</linearGradient>",
            GradientSpec::Radial { .. } => "</radialGradient>",
        };

        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\n  <defs>\n    {open}\n{stops}    {close}\n  </defs>\n  <rect width=\"100%\" height=\"100%\" fill=\"url(#grad)\" opacity=\"{}\"/>\n</svg>\n",
            number(opacity)
        )
    }

    /// Draw the gradient into a new image by rendering its SVG document.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<RgbaImage> {
        rasterize_svg(&self.to_svg(width, height, 1.0), width, height)
    }
}

/// Gradient vector endpoints in bounding-box fractions for a CSS angle.
fn linear_vector(angle: f64) -> [f64; 4] {
    let rad = angle.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());
    [
        0.5 - 0.5 * sin,
        0.5 + 0.5 * cos,
        0.5 + 0.5 * sin,
        0.5 - 0.5 * cos,
    ]
}

fn keyword_angle(direction: &str) -> f64 {
    match direction.trim() {
        "top" => 0.0,
        "right" => 90.0,
        "bottom" => 180.0,
        "left" => 270.0,
        "top right" | "right top" => 45.0,
        "bottom right" | "right bottom" => 135.0,
        "bottom left" | "left bottom" => 225.0,
        "top left" | "left top" => 315.0,
        _ => 180.0,
    }
}

/// Arguments of `name(...)` when it spans the whole of `css`.
fn function_args<'a>(css: &'a str, name: &str) -> Option<&'a str> {
    let rest = css.strip_prefix(name)?.strip_prefix('(')?;
    let mut depth = 1usize;
    for (i, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (i == rest.len() - 1).then(|| &rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas outside parentheses, trimming each part.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());
    parts
}

/// Parse `#rrggbb [pos%]` stops. Missing positions are spread evenly
/// between their neighbours, with the ends defaulting to 0% and 100%.
fn parse_stops(parts: &[&str]) -> Option<Vec<ColourStop>> {
    if parts.is_empty() {
        return None;
    }

    let mut colours = Vec::with_capacity(parts.len());
    let mut positions: Vec<Option<f64>> = Vec::with_capacity(parts.len());
    for part in parts {
        let mut tokens = part.split_whitespace();
        let colour = Colour::parse_hex(tokens.next()?).ok()?;
        let position = match tokens.next() {
            Some(p) => Some(p.strip_suffix('%')?.parse::<f64>().ok()? / 100.0),
            None => None,
        };
        if tokens.next().is_some() {
            return None;
        }
        colours.push(colour);
        positions.push(position);
    }

    let last = positions.len() - 1;
    if positions[0].is_none() {
        positions[0] = Some(0.0);
    }
    if positions[last].is_none() {
        positions[last] = Some(if last == 0 { 0.0 } else { 1.0 });
    }

    let mut offsets = vec![0.0; positions.len()];
    let mut i = 0;
    while i < positions.len() {
        match positions[i] {
            Some(p) => {
                offsets[i] = p;
                i += 1;
            }
            None => {
                let before = offsets[i - 1];
                let end = (i..positions.len()).find(|&j| positions[j].is_some()).unwrap_or(last);
                let after = positions[end].unwrap_or(1.0);
                let gaps = (end - i + 1) as f64;
                for (k, j) in (i..end).enumerate() {
                    offsets[j] = before + (after - before) * (k + 1) as f64 / gaps;
                }
                i = end;
            }
        }
    }

    // Offsets never run backwards
    for j in 1..offsets.len() {
        if offsets[j] < offsets[j - 1] {
            offsets[j] = offsets[j - 1];
        }
    }

    Some(
        colours
            .into_iter()
            .zip(offsets)
            .map(|(colour, offset)| ColourStop { colour, offset })
            .collect(),
    )
}

/// Format a number with at most three decimals and no trailing zeros.
fn number(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const BLACK_TO_WHITE: &str = "linear-gradient(90deg, #000000 0%, #ffffff 100%)";

    fn offsets(spec: &GradientSpec) -> Vec<f64> {
        spec.stops().iter().map(|s| s.offset).collect()
    }

    #[test]
    fn test_parse_linear_angle() {
        let spec = GradientSpec::parse(BLACK_TO_WHITE).unwrap();
        match &spec {
            GradientSpec::Linear { angle, stops } => {
                assert_eq!(*angle, 90.0);
                assert_eq!(stops[0].colour, Colour::BLACK);
                assert_eq!(stops[1].colour, Colour::WHITE);
            }
            other => panic!("expected linear, got {other:?}"),
        }
        assert_eq!(offsets(&spec), vec![0.0, 1.0]);
    }

    #[test]
    fn test_parse_keywords_and_default() {
        let angle = |css: &str| match GradientSpec::parse(css) {
            Some(GradientSpec::Linear { angle, .. }) => angle,
            other => panic!("expected linear, got {other:?}"),
        };
        assert_eq!(angle("linear-gradient(to right, #000000, #ffffff)"), 90.0);
        assert_eq!(angle("linear-gradient(to top left, #000000, #ffffff)"), 315.0);
        assert_eq!(angle("linear-gradient(to bottom right, #000000, #ffffff)"), 135.0);
        assert_eq!(angle("linear-gradient(#000000, #ffffff)"), 180.0);
    }

    #[test]
    fn test_missing_positions_spread_evenly() {
        let spec = GradientSpec::parse("linear-gradient(45deg, #000000, #808080, #ffffff)").unwrap();
        assert_eq!(offsets(&spec), vec![0.0, 0.5, 1.0]);

        let spec = GradientSpec::parse("linear-gradient(45deg, #000000 0%, #111111, #222222, #ffffff 60%)").unwrap();
        let o = offsets(&spec);
        assert!((o[1] - 0.2).abs() < 1e-9);
        assert!((o[2] - 0.4).abs() < 1e-9);
        assert!((o[3] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_parse_radial() {
        let spec = GradientSpec::parse("radial-gradient(circle, #ff9a9e 0%, #fecfef 50%, #fecfef 100%)").unwrap();
        assert!(matches!(spec, GradientSpec::Radial { .. }));
        assert_eq!(offsets(&spec), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_unsupported_fragments() {
        assert!(GradientSpec::parse("conic-gradient(from 0deg, #ff0000, #0000ff)").is_none());
        assert!(GradientSpec::parse("repeating-linear-gradient(45deg, #000000, #ffffff)").is_none());
        assert!(GradientSpec::parse("linear-gradient(rgba(0,0,0,0.1) 1px, transparent 1px)").is_none());
        assert!(GradientSpec::parse(
            "linear-gradient(#000000, #ffffff), linear-gradient(90deg, #000000, #ffffff)"
        )
        .is_none());
        assert!(GradientSpec::parse("linear-gradient()").is_none());
    }

    #[test]
    fn test_builtin_gradients() {
        let catalog = Catalog::builtin().unwrap();
        for gradient in &catalog.gradients {
            let result = GradientSpec::from_gradient(gradient);
            if gradient.category == "conic" {
                assert!(matches!(result, Err(SwatchError::ExportUnsupported { .. })), "{}", gradient.id);
            } else {
                assert!(result.is_ok(), "{}", gradient.id);
            }
        }
    }

    #[test]
    fn test_svg_linear() {
        let svg = GradientSpec::parse(BLACK_TO_WHITE).unwrap().to_svg(400, 200, 1.0);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"200\">"));
        assert!(svg.contains("<linearGradient id=\"grad\" x1=\"0%\" y1=\"50%\" x2=\"100%\" y2=\"50%\">"));
        assert!(svg.contains("<stop offset=\"0%\" stop-color=\"#000000\"/>"));
        assert!(svg.contains("<stop offset=\"100%\" stop-color=\"#ffffff\"/>"));
        assert!(svg.contains("opacity=\"1\""));
    }

    #[test]
    fn test_svg_vertical_default() {
        let svg = GradientSpec::parse("linear-gradient(#000000, #ffffff)").unwrap().to_svg(10, 10, 0.5);
        assert!(svg.contains("x1=\"50%\" y1=\"0%\" x2=\"50%\" y2=\"100%\""));
        assert!(svg.contains("opacity=\"0.5\""));
    }

    #[test]
    fn test_svg_radial() {
        let svg = GradientSpec::parse("radial-gradient(circle, #667eea 0%, #764ba2 100%)").unwrap().to_svg(400, 200, 1.0);
        assert!(svg.contains("<radialGradient id=\"grad\" cx=\"50%\" cy=\"50%\" r=\"50%\" fx=\"50%\" fy=\"50%\">"));
        assert!(svg.contains("</radialGradient>"));
    }

    /// Channel distance within `tolerance`.
    fn near(actual: [u8; 4], expected: [u8; 4], tolerance: i16) -> bool {
        actual.iter().zip(expected).all(|(a, e)| (*a as i16 - e as i16).abs() <= tolerance)
    }

    #[test]
    fn test_rasterize_linear_horizontal() {
        let img = GradientSpec::parse(BLACK_TO_WHITE).unwrap().rasterize(400, 200).unwrap();
        assert_eq!(img.dimensions(), (400, 200));
        assert!(near(img.get_pixel(0, 0).0, [0, 0, 0, 255], 2), "{:?}", img.get_pixel(0, 0));
        assert!(near(img.get_pixel(399, 199).0, [255, 255, 255, 255], 2), "{:?}", img.get_pixel(399, 199));
        let mid = img.get_pixel(200, 100).0;
        assert!(near(mid, [128, 128, 128, 255], 2), "mid {:?}", mid);
        // Columns are uniform
        assert_eq!(img.get_pixel(123, 0), img.get_pixel(123, 199));
    }

    #[test]
    fn test_rasterize_radial() {
        let spec = GradientSpec::parse("radial-gradient(circle, #ffffff 0%, #000000 100%)").unwrap();
        let img = spec.rasterize(400, 200).unwrap();
        assert!(near(img.get_pixel(0, 0).0, [0, 0, 0, 255], 2), "{:?}", img.get_pixel(0, 0));
        let centre = img.get_pixel(200, 100).0;
        assert!(centre[0] > 250, "centre {:?}", centre);
    }

    #[test]
    fn test_rasterize_matches_svg_stops() {
        let spec = GradientSpec::parse("linear-gradient(90deg, #ff0000 0%, #0000ff 50%, #0000ff 100%)").unwrap();
        let img = spec.rasterize(400, 200).unwrap();
        assert!(near(img.get_pixel(300, 50).0, [0, 0, 255, 255], 1), "{:?}", img.get_pixel(300, 50));
        assert!(near(img.get_pixel(399, 0).0, [0, 0, 255, 255], 1), "{:?}", img.get_pixel(399, 0));
        let quarter = img.get_pixel(100, 50).0;
        assert!(near(quarter, [128, 0, 128, 255], 3), "quarter {:?}", quarter);
    }

    #[test]
    fn test_number_format() {
        assert_eq!(number(50.0), "50");
        assert_eq!(number(14.644660940672622), "14.645");
        assert_eq!(number(-0.0000001), "0");
    }
}

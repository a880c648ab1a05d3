use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown {kind}: {id}")]
    #[diagnostic(code(swatch::catalog))]
    Catalog {
        kind: &'static str,
        id: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported file type: {path}")]
    #[diagnostic(
        code(swatch::unsupported_file),
        help("Upload a raster image (png, jpeg, gif, webp, bmp, tiff)")
    )]
    UnsupportedFile { path: std::path::PathBuf },

    #[error("Could not analyze {path}: {message}")]
    #[diagnostic(code(swatch::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Cannot export {what} as an image")]
    #[diagnostic(
        code(swatch::export_unsupported),
        help("This background type cannot be rasterized; copy the CSS instead")
    )]
    ExportUnsupported { what: String },

    #[error("Export failed: {message}")]
    #[diagnostic(code(swatch::export), help("Try copying the CSS instead"))]
    Export { message: String },

    #[error("An image analysis is already in progress")]
    #[diagnostic(code(swatch::busy))]
    Busy,
}

pub type Result<T> = std::result::Result<T, SwatchError>;

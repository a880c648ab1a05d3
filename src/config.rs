//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest holds the default colour model and catalog selections for
//! a project, where exports are written, and an optional seed that makes
//! the random colour model reproducible.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::ColorModel;

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILE: &str = "swatch.yaml";

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Harmony model used when regenerating.
    pub model: ColorModel,

    /// Selected font scale id.
    pub font_scale: String,

    /// Selected typography pairing id.
    pub typography: String,

    /// Selected gradient id.
    pub gradient: String,

    /// Selected texture id.
    pub texture: String,

    /// Output directory for exported files.
    pub output: PathBuf,

    /// Seed for reproducible palettes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Extra catalog merged over the builtin one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            model: ColorModel::Default,
            font_scale: "major-second".to_string(),
            typography: "inter-system".to_string(),
            gradient: "sunset-linear".to_string(),
            texture: "dots".to_string(),
            output: PathBuf::from("dist"),
            seed: None,
            catalog: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = Self::parse(&content)?;

        // Catalog paths are relative to the manifest
        if let (Some(catalog), Some(dir)) = (&manifest.catalog, path.parent()) {
            if catalog.is_relative() {
                manifest.catalog = Some(dir.join(catalog));
            }
        }

        Ok(manifest)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Load `explicit` if given, else `swatch.yaml` from the working
    /// directory if present, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(MANIFEST_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SwatchError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Random source for palette generation, seeded when a seed is set.
    pub fn rng(&self, seed_override: Option<u64>) -> StdRng {
        match seed_override.or(self.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

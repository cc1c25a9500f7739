use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;

/// A saved sweep configuration.
///
/// Every field has a default so presets can be partial: a file containing
/// only `{"separation": 1.2}` inherits the demo values for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPreset {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Lattice samples per complex-plane unit; extents are
    /// `width / samples_per_unit` × `height / samples_per_unit`.
    #[serde(default = "default_samples_per_unit")]
    pub samples_per_unit: f64,
    /// Iteration budget ("level of detail" in the demo, slider range 2–20).
    #[serde(default = "default_detail")]
    pub detail: u32,
    #[serde(default = "default_separation")]
    pub separation: f64,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_width() -> u32 {
    960
}
fn default_height() -> u32 {
    640
}
fn default_samples_per_unit() -> f64 {
    400.0
}
fn default_detail() -> u32 {
    10
}
fn default_separation() -> f64 {
    0.7885
}
fn default_frames() -> u32 {
    100
}

impl Default for SweepPreset {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            samples_per_unit: default_samples_per_unit(),
            detail: default_detail(),
            separation: default_separation(),
            frames: default_frames(),
        }
    }
}

impl SweepPreset {
    /// Load a preset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|source| AppError::PresetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let preset = serde_json::from_str(&json).map_err(|source| AppError::PresetParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded preset from {}", path.display());
        Ok(preset)
    }

    /// Persist the preset as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| AppError::PresetWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved preset to {}", path.display());
        Ok(())
    }
}

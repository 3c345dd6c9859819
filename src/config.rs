use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::RasterSettings;
use crate::math::Vector3;

/// Deeper spheres exceed practical memory (depth 10 is ~4M vertices)
pub const MAX_SUBDIVISION_DEPTH: u32 = 10;

/// Scene and window settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Sphere pole and spin axis; normalized before use
    pub axis: [f64; 3],
    /// Rotation per frame in radians
    pub angle: f64,
    /// Subdivision depth of the discrete sphere
    pub depth: u32,
    pub width: u32,
    pub height: u32,
    pub raster: RasterSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            axis: [0.1, 1.0, 0.0],
            angle: 0.05,
            depth: 6,
            width: 1288,
            height: 720,
            raster: RasterSettings::default(),
        }
    }
}

impl SceneConfig {
    /// Load a JSON scene file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse scene JSON")
    }

    pub fn validate(&self) -> Result<()> {
        let axis = Vector3::from_array(self.axis);
        ensure!(axis.is_finite(), "axis must be finite, got {:?}", self.axis);
        ensure!(axis.length_squared() > 0.0, "axis must be non-zero");
        ensure!(self.angle.is_finite(), "angle must be finite, got {}", self.angle);
        ensure!(
            self.depth <= MAX_SUBDIVISION_DEPTH,
            "depth {} exceeds the maximum of {}",
            self.depth,
            MAX_SUBDIVISION_DEPTH
        );
        ensure!(
            self.raster.epsilon > 0.0,
            "epsilon must be positive, got {}",
            self.raster.epsilon
        );
        ensure!(
            self.raster.half_extent > 0.0,
            "half extent must be positive, got {}",
            self.raster.half_extent
        );
        Ok(())
    }

    /// Configured axis scaled to unit length
    pub fn unit_axis(&self) -> Vector3 {
        Vector3::from_array(self.axis).normalize()
    }
}

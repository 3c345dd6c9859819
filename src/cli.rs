// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::SceneConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "sphere-spin")]
#[command(about = "Spinning discrete sphere, rasterized on the CPU", long_about = None)]
pub struct Cli {
    /// JSON scene file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sphere pole and spin axis (normalized before use)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub axis: Option<Vec<f64>>,

    /// Rotation per frame in radians
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Subdivision depth of the discrete sphere
    #[arg(long)]
    pub depth: Option<u32>,

    /// Half-width of the XY proximity box
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Render without a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to render in headless mode
    #[arg(long, default_value = "120")]
    pub frames: u64,
}

impl Cli {
    /// Resolve the scene: defaults, then the config file, then flags
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::from_file(path)?,
            None => SceneConfig::default(),
        };

        if let Some(axis) = &self.axis {
            config.axis = [axis[0], axis[1], axis[2]];
        }
        if let Some(angle) = self.angle {
            config.angle = angle;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(epsilon) = self.epsilon {
            config.raster.epsilon = epsilon;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

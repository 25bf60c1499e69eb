//! Command-line options of the viewer.

use clap::Parser;

use crate::world::{
    CameraConfig, ConfigError, DEFAULT_FOCAL_LENGTH, DEFAULT_LIGHT_RANGE, DEFAULT_RANGE,
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Walk a rainy grid world")]
pub struct Opts {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 360)]
    pub height: usize,

    /// Rays cast per frame (one per column)
    #[arg(long, default_value_t = 320)]
    pub resolution: usize,

    /// View-plane distance; smaller values widen the field of view
    #[arg(long, default_value_t = DEFAULT_FOCAL_LENGTH)]
    pub focal_length: f32,

    /// Maximum ray length in cells
    #[arg(long, default_value_t = DEFAULT_RANGE)]
    pub range: f32,

    /// Distance over which unlit walls fade to black
    #[arg(long, default_value_t = DEFAULT_LIGHT_RANGE)]
    pub light_range: f32,

    /// Side length of the square map in cells
    #[arg(long, default_value_t = 32)]
    pub map_size: usize,

    /// Seed for map layout, sky and rain; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: usize,
}

impl Opts {
    /// Validated camera for these options.
    pub fn camera(&self) -> Result<CameraConfig, ConfigError> {
        CameraConfig::new(self.width, self.height, self.resolution, self.focal_length)?
            .with_range(self.range)?
            .with_light_range(self.light_range)
    }
}

/// Default view-plane distance; 0.8 gives roughly a 64° horizontal FoV.
pub const DEFAULT_FOCAL_LENGTH: f32 = 0.8;
/// Default maximum ray length in map cells.
pub const DEFAULT_RANGE: f32 = 14.0;
/// Distance (in cells) over which walls fade to black with no ambient light.
pub const DEFAULT_LIGHT_RANGE: f32 = 5.0;

/// Reasons a [`CameraConfig`] can be rejected.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be non-empty, got {0}x{1}")]
    EmptyViewport(usize, usize),

    #[error("column resolution must be at least 1")]
    ZeroResolution,

    #[error("focal length must be positive and finite, got {0}")]
    BadFocalLength(f32),

    /// Ray range or light range that is not a positive, finite distance.
    #[error("range must be positive and finite, got {0}")]
    BadRange(f32),
}

#[inline]
fn check_range(range: f32) -> Result<f32, ConfigError> {
    if range.is_finite() && range > 0.0 {
        Ok(range)
    } else {
        Err(ConfigError::BadRange(range))
    }
}

/// Per-session camera parameters.
///
/// * `spacing` (pixels per column) and `scale` (UI scale) are derived and
///   recomputed whenever the viewport or the resolution changes.
/// * Read-only while a frame is being rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    width: usize,
    height: usize,
    resolution: usize,
    spacing: f32,
    focal_length: f32,
    range: f32,
    light_range: f32,
    scale: f32,
}

impl CameraConfig {
    /// Validate and build a camera for a `width`×`height` viewport casting
    /// `resolution` rays per frame.
    pub fn new(
        width: usize,
        height: usize,
        resolution: usize,
        focal_length: f32,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport(width, height));
        }
        if resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(ConfigError::BadFocalLength(focal_length));
        }

        let mut cfg = Self {
            width,
            height,
            resolution,
            spacing: 0.0,
            focal_length,
            range: DEFAULT_RANGE,
            light_range: DEFAULT_LIGHT_RANGE,
            scale: 0.0,
        };
        cfg.recompute();
        log::debug!(
            "camera {}x{} @ {} columns, spacing {:.3}px, scale {:.3}",
            cfg.width,
            cfg.height,
            cfg.resolution,
            cfg.spacing,
            cfg.scale
        );
        Ok(cfg)
    }

    /// Same as [`CameraConfig::new`] with the default focal length.
    pub fn with_defaults(
        width: usize,
        height: usize,
        resolution: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(width, height, resolution, DEFAULT_FOCAL_LENGTH)
    }

    /// Maximum ray length in cells. An unbounded range would never stop the
    /// caster, so it is rejected.
    pub fn with_range(mut self, range: f32) -> Result<Self, ConfigError> {
        self.range = check_range(range)?;
        Ok(self)
    }

    pub fn with_light_range(mut self, light_range: f32) -> Result<Self, ConfigError> {
        self.light_range = check_range(light_range)?;
        Ok(self)
    }

    /*──────────────────────── mutation ──────────────────────────────*/

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport(width, height));
        }
        self.width = width;
        self.height = height;
        self.recompute();
        Ok(())
    }

    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), ConfigError> {
        if resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        self.resolution = resolution;
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.spacing = self.width as f32 / self.resolution as f32;
        self.scale = (self.width + self.height) as f32 / 1200.0;
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }
    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }
    /// Screen pixels per cast column.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }
    #[inline]
    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }
    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }
    #[inline]
    pub fn light_range(&self) -> f32 {
        self.light_range
    }
    /// UI scale; 1.0 for a 600+600 viewport.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Angle of `column` relative to the view axis.
    ///
    /// ```text
    /// angle = atan2(column / resolution - 0.5, focal)
    /// ```
    #[inline]
    pub fn column_angle(&self, column: usize) -> f32 {
        let x = column as f32 / self.resolution as f32 - 0.5;
        x.atan2(self.focal_length)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

use crate::error::ConfigError;
use crate::models::BackgroundColor;
use artscii_core::{ArtsciiError, Axis, DEFAULT_HEIGHT_FACTOR, DEFAULT_WIDTH_FACTOR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Render configuration, usually loaded from a YAML file.
///
/// Every field is optional; missing fields take the defaults below.
///
/// ```yaml
/// downsize:
///   height: 2
///   width: 1
/// background: "#000000"
/// gamma: 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Box-filter factors applied before luminance extraction
    #[serde(default)]
    pub downsize: DownsizeFactors,

    /// Color transparent pixels are composited onto
    #[serde(default)]
    pub background: BackgroundColor,

    /// Gamma for the `v^(1/gamma)` tone curve; must be > 0
    #[serde(default = "default_gamma")]
    pub gamma: f32,
}

fn default_gamma() -> f32 {
    1.0
}

/// Downsize factors per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownsizeFactors {
    #[serde(default = "default_height_factor")]
    pub height: u8,

    #[serde(default = "default_width_factor")]
    pub width: u8,
}

fn default_height_factor() -> u8 {
    DEFAULT_HEIGHT_FACTOR
}

fn default_width_factor() -> u8 {
    DEFAULT_WIDTH_FACTOR
}

impl DownsizeFactors {
    pub fn new(height: u8, width: u8) -> Self {
        Self { height, width }
    }

    /// `true` when downsizing would leave the image unchanged.
    pub fn is_identity(&self) -> bool {
        self.height == 1 && self.width == 1
    }
}

impl Default for DownsizeFactors {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT_FACTOR, DEFAULT_WIDTH_FACTOR)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            downsize: DownsizeFactors::default(),
            background: BackgroundColor::BLACK,
            gamma: default_gamma(),
        }
    }
}

impl RenderConfig {
    /// Parse configuration from a YAML string. Empty input yields the
    /// defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::trace!(path = %path.display(), "Loading config from filesystem");

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        config.validate()?;

        tracing::info!(
            path = %path.display(),
            height_factor = config.downsize.height,
            width_factor = config.downsize.width,
            background = %config.background,
            gamma = config.gamma,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check the settings the pipeline would reject, without touching any
    /// pixels. Oversized factors depend on the image and are only caught at
    /// render time.
    pub fn validate(&self) -> Result<(), ArtsciiError> {
        if self.downsize.height == 0 {
            return Err(ArtsciiError::ZeroDownsizeFactor { axis: Axis::Height });
        }
        if self.downsize.width == 0 {
            return Err(ArtsciiError::ZeroDownsizeFactor { axis: Axis::Width });
        }
        if self.gamma.is_nan() || self.gamma <= 0.0 {
            return Err(ArtsciiError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}

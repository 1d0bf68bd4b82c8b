use artscii_core::ArtsciiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ArtsciiError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] ArtsciiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl RenderError {
    /// Returns `true` when the render failed because of a caller-supplied
    /// argument (bad factors, gamma or buffer size) rather than exhaustion.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            RenderError::Pipeline(e) => e.is_invalid_argument(),
            RenderError::Config(ConfigError::Invalid(e)) => e.is_invalid_argument(),
            RenderError::Config(_) => false,
        }
    }
}

use crate::error::RenderError;
use crate::models::{BackgroundColor, DownsizeFactors, RenderConfig};
use crate::rendering::Artscii;
use artscii_core::PixelBuffer;
use std::time::Instant;

/// Runs the full pipeline: downsize, luminance, gamma, glyphs.
///
/// Configuration methods consume and return `self`; [`render`](Self::render)
/// takes `&self`, so one renderer can be reused across many images.
///
/// # Example
///
/// ```
/// use artscii::{ArtsciiRenderer, BackgroundColor};
///
/// let renderer = ArtsciiRenderer::default()
///     .downsize(2, 1)
///     .background(BackgroundColor::WHITE)
///     .gamma(1.0);
///
/// // 2x1 fully transparent image over white
/// let art = renderer.render_rgba(2, 1, vec![0; 8]).unwrap();
/// assert_eq!(art.glyphs(), "@");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArtsciiRenderer {
    config: RenderConfig,
}

impl ArtsciiRenderer {
    /// Create a renderer from a loaded configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration the renderer runs with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Set the box-filter factors (height, width).
    #[inline]
    pub fn downsize(mut self, height: u8, width: u8) -> Self {
        self.config.downsize = DownsizeFactors::new(height, width);
        self
    }

    /// Set the color transparent pixels are composited onto.
    #[inline]
    pub fn background(mut self, color: BackgroundColor) -> Self {
        self.config.background = color;
        self
    }

    /// Set the gamma for tone correction.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Render a pixel buffer to glyphs.
    ///
    /// The configuration is validated before any pixel is touched. Factors
    /// larger than the image are reported by the downsize stage.
    pub fn render(&self, mut buffer: PixelBuffer) -> Result<Artscii, RenderError> {
        let started = Instant::now();
        self.config
            .validate()
            .map_err(|e| RenderError::Config(e.into()))?;

        let source_height = buffer.height();
        let source_width = buffer.width();
        let factors = self.config.downsize;

        if !factors.is_identity() {
            buffer.downsize(factors.height, factors.width)?;
            tracing::trace!(
                height_factor = factors.height,
                width_factor = factors.width,
                height = buffer.height(),
                width = buffer.width(),
                "Downsized buffer"
            );
        }

        let bg = self.config.background;
        let mut field = buffer.luminance(bg.r, bg.g, bg.b)?;
        tracing::trace!(background = %bg, "Computed luminance");

        field.gamma_correct(self.config.gamma)?;
        let glyphs = field.to_glyphs();

        tracing::debug!(
            source_height,
            source_width,
            height = field.height(),
            width = field.width(),
            gamma = self.config.gamma,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Rendered artscii"
        );

        Ok(Artscii::new(glyphs, field.height(), field.width()))
    }

    /// Adopt a raw row-major RGBA buffer and render it.
    pub fn render_rgba(
        &self,
        height: u32,
        width: u32,
        rgba: Vec<u8>,
    ) -> Result<Artscii, RenderError> {
        let buffer = PixelBuffer::from_rgba(height, width, rgba)?;
        self.render(buffer)
    }
}

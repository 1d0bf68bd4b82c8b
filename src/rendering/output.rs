//! [`Artscii`]: the rendered text with its grid dimensions.

use std::fmt;

/// A rendered image: `height * width` glyphs in row-major order.
///
/// The glyph string itself carries no line breaks. [`rows`](Self::rows)
/// and the [`Display`](fmt::Display) impl add them for terminal output.
///
/// # Example
///
/// ```
/// use artscii::ArtsciiRenderer;
///
/// let renderer = ArtsciiRenderer::default().downsize(1, 1);
/// let art = renderer.render_rgba(2, 2, vec![255; 16]).unwrap();
///
/// assert_eq!(art.glyphs(), "@@@@");
/// assert_eq!(art.to_string(), "@@\n@@");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artscii {
    glyphs: String,
    height: u32,
    width: u32,
}

impl Artscii {
    /// Wrap a glyph string produced by the renderer: one ASCII glyph per
    /// cell, `height * width` in total.
    pub(crate) fn new(glyphs: String, height: u32, width: u32) -> Self {
        debug_assert!(glyphs.is_ascii(), "glyph ramp must be ASCII");
        debug_assert_eq!(
            glyphs.len(),
            height as usize * width as usize,
            "glyph count ({}) must match height * width ({}x{})",
            glyphs.len(),
            height,
            width,
        );
        Self {
            glyphs,
            height,
            width,
        }
    }

    /// Number of glyph rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of glyphs per row.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// All glyphs, row-major, without line breaks.
    #[inline]
    pub fn glyphs(&self) -> &str {
        &self.glyphs
    }

    /// Consume the output, returning the row-major glyph string.
    pub fn into_glyphs(self) -> String {
        self.glyphs
    }

    /// One `&str` of `width` glyphs per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |row| &self.glyphs[row * width..(row + 1) * width])
    }
}

impl fmt::Display for Artscii {
    /// Rows separated by `\n`, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

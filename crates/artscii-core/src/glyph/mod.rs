//! Quantization of luminance to a fixed character ramp.
//!
//! Each value is scaled by [`LEVEL_SCALE`] and floored, giving one of
//! [`GLYPH_LEVELS`] levels for inputs in `[0, 1]`. The level indexes
//! [`GLYPH_RAMP`], ordered from the sparsest glyph (space) to the densest.
//! Out-of-range and NaN values are clamped to the nearest level rather than
//! reported.

use crate::luminance::LuminanceField;

/// Number of discrete brightness levels.
pub const GLYPH_LEVELS: usize = 8;

/// Multiplier mapping `[0, 1]` onto `0..GLYPH_LEVELS`. Slightly below 8 so
/// that exactly 1.0 still lands on the last level.
pub const LEVEL_SCALE: f32 = 7.999;

/// Glyphs from sparsest (darkest) to densest (brightest).
pub const GLYPH_RAMP: [char; GLYPH_LEVELS] = [' ', '.', '-', '=', '+', '*', '#', '@'];

/// Brightness level of a single luminance value, in `0..GLYPH_LEVELS`.
///
/// # Example
///
/// ```
/// use artscii_core::glyph_level;
///
/// assert_eq!(glyph_level(0.0), 0);
/// assert_eq!(glyph_level(0.5), 3);
/// assert_eq!(glyph_level(1.0), 7);
/// assert_eq!(glyph_level(1.5), 7);
/// assert_eq!(glyph_level(-0.2), 0);
/// ```
#[inline]
pub fn glyph_level(value: f32) -> usize {
    // Float-to-int `as` saturates: negatives become 0 and so does NaN.
    let level = (value * LEVEL_SCALE).floor() as usize;
    level.min(GLYPH_LEVELS - 1)
}

/// Glyph for a single luminance value.
#[inline]
pub fn glyph_for(value: f32) -> char {
    GLYPH_RAMP[glyph_level(value)]
}

impl LuminanceField {
    /// Brightness level of every value, row-major.
    pub fn to_glyph_levels(&self) -> Vec<u8> {
        self.values()
            .iter()
            .map(|&value| glyph_level(value) as u8)
            .collect()
    }

    /// Render the field as `height * width` glyphs, row-major.
    ///
    /// The string contains no line breaks; splitting it into rows of
    /// [`width`](Self::width) characters is left to the caller.
    pub fn to_glyphs(&self) -> String {
        self.values().iter().map(|&value| glyph_for(value)).collect()
    }
}

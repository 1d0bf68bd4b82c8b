//! Perceptual luminance of RGBA pixels.
//!
//! Luminance uses the Rec. 709 luma weights applied directly to the 8-bit
//! channel values, then normalized by 255. No sRGB transfer function is
//! applied: the weights act on the stored bytes as-is.

mod field;
mod gamma;

pub use field::LuminanceField;

/// Rec. 709 red weight.
pub const LUMA_R: f32 = 0.2126;
/// Rec. 709 green weight.
pub const LUMA_G: f32 = 0.7152;
/// Rec. 709 blue weight.
pub const LUMA_B: f32 = 0.0722;

/// Normalized luma of an 8-bit RGB triple, in `[0, 1]`.
///
/// # Example
///
/// ```
/// use artscii_core::relative_luminance;
///
/// assert_eq!(relative_luminance(0, 0, 0), 0.0);
/// assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    (LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b)) / 255.0
}

//! Power-law tone remapping.

use super::LuminanceField;
use crate::error::ArtsciiError;

impl LuminanceField {
    /// Replace every value `v` with `v^(1 / gamma)`, in place.
    ///
    /// Gamma above 1 brightens mid-tones, below 1 darkens them. Values are
    /// not clamped before or after.
    ///
    /// # Errors
    ///
    /// [`ArtsciiError::InvalidGamma`] if `gamma` is zero, negative or NaN.
    /// The field is left unmodified; no default is substituted.
    ///
    /// # Example
    ///
    /// ```
    /// use artscii_core::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::from_rgba(1, 1, vec![64, 64, 64, 255]).unwrap();
    /// let mut field = buffer.luminance(0, 0, 0).unwrap();
    /// let before = field.values()[0];
    ///
    /// field.gamma_correct(2.2).unwrap();
    /// assert!(field.values()[0] > before);
    ///
    /// assert!(field.gamma_correct(0.0).is_err());
    /// ```
    pub fn gamma_correct(&mut self, gamma: f32) -> Result<(), ArtsciiError> {
        if gamma.is_nan() || gamma <= 0.0 {
            return Err(ArtsciiError::InvalidGamma(gamma));
        }
        if gamma == 1.0 {
            return Ok(());
        }

        let exponent = 1.0 / gamma;
        for value in &mut self.values {
            *value = value.powf(exponent);
        }
        Ok(())
    }
}

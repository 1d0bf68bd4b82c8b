//! [`LuminanceField`]: per-pixel brightness derived from a pixel buffer.

/// A `height x width` grid of luminance values, row-major.
///
/// Produced by [`PixelBuffer::luminance`](crate::PixelBuffer::luminance).
/// The field is an independent snapshot: it owns its values and holds no
/// reference back to the buffer it came from. Extraction clamps each value
/// into `[0, 1]` to absorb float rounding; later operations such as
/// [`gamma_correct`](Self::gamma_correct) do not clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceField {
    height: u32,
    width: u32,
    pub(super) values: Vec<f32>,
}

impl LuminanceField {
    pub(crate) fn new(height: u32, width: u32, values: Vec<f32>) -> Self {
        debug_assert_eq!(
            values.len(),
            height as usize * width as usize,
            "values length ({}) must match height * width ({}x{})",
            values.len(),
            height,
            width,
        );
        Self {
            height,
            width,
            values,
        }
    }

    /// Field height, equal to the source buffer's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Field width, equal to the source buffer's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// All values in row-major order.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The value at `(row, col)`, or `None` out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.values
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Consume the field, returning its row-major values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

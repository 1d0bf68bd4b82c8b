//! [`PixelBuffer`]: an owned, row-major RGBA image.

use super::downsize::box_filter;
use crate::alloc::{rgba_len, try_filled, try_with_capacity};
use crate::error::{ArtsciiError, Axis};
use crate::luminance::{relative_luminance, LuminanceField};

/// A `height x width` RGBA image with 8 bits per channel.
///
/// Storage is a single contiguous `Vec<u8>` in R, G, B, A order with no
/// padding between rows. Its length is `height * width * 4` at all times;
/// operations that change the dimensions install a freshly allocated vector
/// and drop the previous one.
///
/// The buffer is not internally synchronized. [`downsize`](Self::downsize)
/// takes `&mut self`, so concurrent callers must serialize access themselves.
///
/// # Example
///
/// ```
/// use artscii_core::PixelBuffer;
///
/// let mut buffer = PixelBuffer::new(4, 2).unwrap();
/// buffer.as_rgba_mut().fill(255);
///
/// buffer.downsize(2, 1).unwrap();
/// assert_eq!((buffer.height(), buffer.width()), (2, 2));
///
/// let field = buffer.luminance(0, 0, 0).unwrap();
/// assert_eq!(field.to_glyphs(), "@@@@");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    height: u32,
    width: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled (transparent black) buffer.
    ///
    /// Returns [`ArtsciiError::AllocationFailed`] if the storage cannot be
    /// reserved.
    pub fn new(height: u32, width: u32) -> Result<Self, ArtsciiError> {
        let pixels = try_filled(rgba_len(height, width)?, 0u8)?;
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Adopt caller-filled RGBA bytes.
    ///
    /// `pixels` must hold exactly `height * width * 4` bytes, row-major,
    /// in R, G, B, A order.
    pub fn from_rgba(height: u32, width: u32, pixels: Vec<u8>) -> Result<Self, ArtsciiError> {
        let expected = rgba_len(height, width)?;
        if pixels.len() != expected {
            return Err(ArtsciiError::BufferLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable view of the RGBA bytes, for filling the buffer in place.
    #[inline]
    pub fn as_rgba_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer, returning its RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    /// The `[R, G, B, A]` value at `(row, col)`, or `None` out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<[u8; 4]> {
        let idx = self.index(row, col)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    /// Overwrite the pixel at `(row, col)`. Returns `false` out of bounds.
    pub fn set_pixel(&mut self, row: u32, col: u32, rgba: [u8; 4]) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.pixels[idx..idx + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some((row as usize * self.width as usize + col as usize) * 4)
    }

    /// Shrink the image by averaging `height_factor x width_factor` blocks.
    ///
    /// The new dimensions are `height / height_factor` and
    /// `width / width_factor`; leftover edge rows and columns are cropped.
    /// Colour is averaged with alpha as the weight, so transparent pixels
    /// do not darken their neighbours, and the block's maximum alpha is kept.
    /// A block with no opacity at all becomes transparent black.
    ///
    /// # Errors
    ///
    /// - [`ArtsciiError::ZeroDownsizeFactor`] if either factor is 0
    /// - [`ArtsciiError::DownsizeFactorTooLarge`] if a factor exceeds the
    ///   matching dimension
    /// - [`ArtsciiError::AllocationFailed`] if the new storage cannot be
    ///   reserved
    ///
    /// On error the buffer is left exactly as it was.
    pub fn downsize(&mut self, height_factor: u8, width_factor: u8) -> Result<(), ArtsciiError> {
        check_factor(Axis::Height, height_factor, self.height)?;
        check_factor(Axis::Width, width_factor, self.width)?;

        let (pixels, height, width) = box_filter(
            &self.pixels,
            self.height,
            self.width,
            height_factor,
            width_factor,
        )?;

        self.pixels = pixels;
        self.height = height;
        self.width = width;
        Ok(())
    }

    /// Flatten the image onto an opaque `(r, g, b)` background and return
    /// the perceptual luminance of every pixel.
    ///
    /// Each value is `alpha * L(pixel) + (1 - alpha) * L(background)` where
    /// `L` is the Rec. 709 luma of the byte triple normalized to `[0, 1]`.
    /// The buffer itself is not modified and the returned field does not
    /// borrow from it.
    pub fn luminance(&self, r: u8, g: u8, b: u8) -> Result<LuminanceField, ArtsciiError> {
        let background = relative_luminance(r, g, b);
        let mut values = try_with_capacity(self.pixels.len() / 4)?;

        for px in self.pixels.chunks_exact(4) {
            let alpha = f32::from(px[3]) / 255.0;
            let composed = alpha * relative_luminance(px[0], px[1], px[2])
                + (1.0 - alpha) * background;
            // Both terms are in [0, 1]; clamp away float rounding at the ends.
            values.push(composed.clamp(0.0, 1.0));
        }

        Ok(LuminanceField::new(self.height, self.width, values))
    }
}

fn check_factor(axis: Axis, factor: u8, dimension: u32) -> Result<(), ArtsciiError> {
    if factor == 0 {
        return Err(ArtsciiError::ZeroDownsizeFactor { axis });
    }
    if u32::from(factor) > dimension {
        return Err(ArtsciiError::DownsizeFactorTooLarge {
            axis,
            factor,
            dimension,
        });
    }
    Ok(())
}

//! Error type for the artscii pipeline core.
//!
//! Every variant except [`ArtsciiError::AllocationFailed`] is an
//! invalid-argument condition: the offending call returns it before touching
//! any state, so a failed operation never leaves a buffer or field half
//! updated.

use std::fmt;

/// Image axis named in downsize errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rows (the height dimension).
    Height,
    /// Columns (the width dimension).
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Height => write!(f, "height"),
            Axis::Width => write!(f, "width"),
        }
    }
}

/// Error type for pixel buffer and luminance field operations.
///
/// # Example
///
/// ```
/// use artscii_core::{ArtsciiError, Axis, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new(4, 4).unwrap();
/// let err = buffer.downsize(0, 2).unwrap_err();
/// assert_eq!(err, ArtsciiError::ZeroDownsizeFactor { axis: Axis::Height });
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ArtsciiError {
    /// A downsize factor of zero was requested.
    ZeroDownsizeFactor {
        /// Axis the zero factor was given for
        axis: Axis,
    },
    /// A downsize factor larger than the buffer dimension was requested.
    DownsizeFactorTooLarge {
        /// Axis the factor was given for
        axis: Axis,
        /// Requested factor
        factor: u8,
        /// Current size of the buffer along `axis`
        dimension: u32,
    },
    /// Gamma was zero, negative or NaN.
    InvalidGamma(f32),
    /// A raw RGBA buffer did not hold exactly `height * width * 4` bytes.
    BufferLengthMismatch {
        /// Byte length implied by the dimensions
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },
    /// Backing storage could not be reserved.
    AllocationFailed {
        /// Number of bytes requested
        bytes: usize,
    },
}

impl ArtsciiError {
    /// Returns `true` for errors caused by the arguments of the call, as
    /// opposed to resource exhaustion.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, ArtsciiError::AllocationFailed { .. })
    }
}

impl fmt::Display for ArtsciiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtsciiError::ZeroDownsizeFactor { axis } => {
                write!(f, "{} downsize factor must be at least 1", axis)
            }
            ArtsciiError::DownsizeFactorTooLarge {
                axis,
                factor,
                dimension,
            } => write!(
                f,
                "{} downsize factor {} exceeds image {} of {}",
                axis, factor, axis, dimension
            ),
            ArtsciiError::InvalidGamma(gamma) => {
                write!(f, "gamma must be greater than 0, got {}", gamma)
            }
            ArtsciiError::BufferLengthMismatch { expected, actual } => write!(
                f,
                "RGBA buffer length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            ArtsciiError::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {} bytes", bytes)
            }
        }
    }
}

impl std::error::Error for ArtsciiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_factor_display() {
        let err = ArtsciiError::ZeroDownsizeFactor { axis: Axis::Width };
        assert_eq!(err.to_string(), "width downsize factor must be at least 1");
    }

    #[test]
    fn test_factor_too_large_display() {
        let err = ArtsciiError::DownsizeFactorTooLarge {
            axis: Axis::Height,
            factor: 9,
            dimension: 4,
        };
        assert_eq!(
            err.to_string(),
            "height downsize factor 9 exceeds image height of 4"
        );
    }

    #[test]
    fn test_invalid_gamma_display() {
        let err = ArtsciiError::InvalidGamma(-1.0);
        assert_eq!(err.to_string(), "gamma must be greater than 0, got -1");
    }

    #[test]
    fn test_buffer_length_mismatch_display() {
        let err = ArtsciiError::BufferLengthMismatch {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "RGBA buffer length mismatch: expected 16 bytes, got 12"
        );
    }

    #[test]
    fn test_classification() {
        assert!(ArtsciiError::InvalidGamma(0.0).is_invalid_argument());
        assert!(ArtsciiError::ZeroDownsizeFactor { axis: Axis::Height }.is_invalid_argument());
        assert!(!ArtsciiError::AllocationFailed { bytes: 64 }.is_invalid_argument());
    }
}

//! Fallible allocation of pixel and luminance storage.

use crate::error::ArtsciiError;

/// Allocate `len` copies of `fill`, reporting exhaustion instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, fill: T) -> Result<Vec<T>, ArtsciiError> {
    let mut storage = try_with_capacity(len)?;
    storage.resize(len, fill);
    Ok(storage)
}

/// Empty vector with room for exactly `len` elements.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, ArtsciiError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| ArtsciiError::AllocationFailed {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(storage)
}

/// Byte length of an RGBA image, or `AllocationFailed` if it cannot be
/// addressed on this platform.
pub(crate) fn rgba_len(height: u32, width: u32) -> Result<usize, ArtsciiError> {
    (height as usize)
        .checked_mul(width as usize)
        .and_then(|area| area.checked_mul(4))
        .ok_or(ArtsciiError::AllocationFailed { bytes: usize::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_filled() {
        let v = try_filled(6, 0u8).unwrap();
        assert_eq!(v, vec![0u8; 6]);
    }

    #[test]
    fn test_try_with_capacity_reports_exhaustion() {
        let err = try_with_capacity::<u64>(usize::MAX).unwrap_err();
        assert_eq!(err, ArtsciiError::AllocationFailed { bytes: usize::MAX });
    }

    #[test]
    fn test_rgba_len() {
        assert_eq!(rgba_len(3, 5).unwrap(), 60);
        assert_eq!(rgba_len(0, 5).unwrap(), 0);
    }
}

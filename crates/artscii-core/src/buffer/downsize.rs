//! Alpha-weighted box filter.
//!
//! Each destination pixel averages a `height_factor x width_factor` block of
//! source pixels. Colour channels are weighted by alpha so that transparent
//! pixels contribute nothing to the colour of the block; the destination
//! alpha is the block maximum. Source rows and columns past the last whole
//! block are never read.

use crate::alloc::{rgba_len, try_filled};
use crate::error::ArtsciiError;

/// Box-filter `pixels` (a `height x width` RGBA image) down by the given
/// factors.
///
/// Returns the new storage together with its dimensions. Factors must
/// already be validated as `1..=dimension`.
pub(crate) fn box_filter(
    pixels: &[u8],
    height: u32,
    width: u32,
    height_factor: u8,
    width_factor: u8,
) -> Result<(Vec<u8>, u32, u32), ArtsciiError> {
    debug_assert!(height_factor >= 1 && width_factor >= 1);

    let new_height = height / u32::from(height_factor);
    let new_width = width / u32::from(width_factor);
    let mut out = try_filled(rgba_len(new_height, new_width)?, 0u8)?;

    let src_width = width as usize;
    let hf = usize::from(height_factor);
    let wf = usize::from(width_factor);

    for (dst_idx, dst) in out.chunks_exact_mut(4).enumerate() {
        let dst_row = dst_idx / new_width as usize;
        let dst_col = dst_idx % new_width as usize;
        let start_row = dst_row * hf;
        let start_col = dst_col * wf;

        // 255 * 255 pixels of alpha * channel overflows u32.
        let mut r_tot = 0u64;
        let mut g_tot = 0u64;
        let mut b_tot = 0u64;
        let mut a_tot = 0u64;
        let mut max_a = 0u8;

        for row in start_row..start_row + hf {
            let row_start = (row * src_width + start_col) * 4;
            let row_pixels = &pixels[row_start..row_start + wf * 4];
            for px in row_pixels.chunks_exact(4) {
                let a = u64::from(px[3]);
                r_tot += a * u64::from(px[0]);
                g_tot += a * u64::from(px[1]);
                b_tot += a * u64::from(px[2]);
                a_tot += a;
                max_a = max_a.max(px[3]);
            }
        }

        if a_tot > 0 {
            dst[0] = (r_tot / a_tot) as u8;
            dst[1] = (g_tot / a_tot) as u8;
            dst[2] = (b_tot / a_tot) as u8;
            dst[3] = max_a;
        }
        // Fully transparent blocks keep the zero fill.
    }

    Ok((out, new_height, new_width))
}

//! Owned RGBA pixel storage and alpha-aware downsampling.
//!
//! [`PixelBuffer`] is the entry point of the pipeline: the caller fills it
//! with row-major RGBA bytes (R, G, B, A, 8 bits each, no row padding),
//! optionally shrinks it with [`PixelBuffer::downsize`], then derives a
//! [`LuminanceField`](crate::LuminanceField) from it.

mod downsize;
mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;

/// Default height factor: terminal cells are about twice as tall as wide.
pub const DEFAULT_HEIGHT_FACTOR: u8 = 2;

/// Default width factor.
pub const DEFAULT_WIDTH_FACTOR: u8 = 1;

//! artscii-core: text renderings of RGBA images
//!
//! This library turns a raw RGBA pixel buffer into a reduced-resolution,
//! luminance-weighted character rendering ("artscii"). It contains only the
//! buffer transformations; decoding image files and printing to a terminal
//! are left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use artscii_core::PixelBuffer;
//!
//! // 4x2 image: top half white, bottom half transparent
//! let mut rgba = vec![255u8; 2 * 2 * 4];
//! rgba.extend(vec![0u8; 2 * 2 * 4]);
//! let mut buffer = PixelBuffer::from_rgba(4, 2, rgba).unwrap();
//!
//! buffer.downsize(2, 1).unwrap();
//! let mut field = buffer.luminance(0, 0, 0).unwrap();
//! field.gamma_correct(1.0).unwrap();
//!
//! assert_eq!(field.to_glyphs(), "@@  ");
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! PixelBuffer (RGBA bytes)
//!     |
//!     v
//! [downsize]           alpha-weighted box filter, in place (optional)
//!     |
//!     v
//! [luminance]          composite over an opaque background, Rec. 709 luma
//!     |
//!     v
//! LuminanceField (f32 per pixel)
//!     |
//!     v
//! [gamma_correct]      v^(1/gamma), in place
//!     |
//!     v
//! [to_glyphs]          floor(v * 7.999) -> " .-=+*#@"
//! ```
//!
//! ## Downsizing
//!
//! [`PixelBuffer::downsize`] averages each `height_factor x width_factor`
//! block into one pixel. Colour channels are weighted by alpha, so a
//! transparent pixel contributes nothing to the block's colour, and the
//! block keeps its most opaque alpha. Edge rows and columns that do not fill
//! a whole block are cropped.
//!
//! ## Luminance
//!
//! [`PixelBuffer::luminance`] flattens the image onto an opaque background
//! and reduces each pixel to `0.2126 R + 0.7152 G + 0.0722 B`, normalized
//! to `[0, 1]`. The weights apply to the stored bytes directly; no sRGB
//! decoding is performed.
//!
//! ## Glyphs
//!
//! [`LuminanceField::to_glyphs`] maps each value onto eight levels of
//! [`GLYPH_RAMP`]. Values outside `[0, 1]` clamp to the first or last glyph.
//! The output has no line breaks.
//!
//! # Errors
//!
//! Invalid arguments (zero or oversized downsize factors, non-positive
//! gamma, mis-sized input) are reported as [`ArtsciiError`] before any state
//! changes. Storage is reserved fallibly, so running out of memory surfaces
//! as [`ArtsciiError::AllocationFailed`] instead of aborting.
//!
//! # Concurrency
//!
//! Everything is synchronous and single-threaded. Buffers and fields own
//! their storage exclusively; mutation goes through `&mut self`.

mod alloc;
pub mod buffer;
pub mod error;
pub mod glyph;
pub mod luminance;


pub use buffer::{PixelBuffer, DEFAULT_HEIGHT_FACTOR, DEFAULT_WIDTH_FACTOR};
pub use error::{ArtsciiError, Axis};
pub use glyph::{glyph_for, glyph_level, GLYPH_LEVELS, GLYPH_RAMP, LEVEL_SCALE};
pub use luminance::{relative_luminance, LuminanceField, LUMA_B, LUMA_G, LUMA_R};

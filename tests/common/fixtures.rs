//! Test images and configuration snippets.

use artscii::PixelBuffer;

/// Opaque white.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Opaque black.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Fully transparent pixel with arbitrary hidden color.
pub const CLEAR: [u8; 4] = [200, 40, 90, 0];

/// A `height x width` image filled with one pixel value.
pub fn solid(height: u32, width: u32, rgba: [u8; 4]) -> PixelBuffer {
    PixelBuffer::from_rgba(height, width, rgba.repeat((height * width) as usize))
        .expect("solid fixture has matching length")
}

/// Opaque grey ramp: column `c` has value `c * 255 / (width - 1)`.
pub fn horizontal_ramp(height: u32, width: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(height, width).expect("ramp fixture allocates");
    for row in 0..height {
        for col in 0..width {
            let v = (col * 255 / (width - 1).max(1)) as u8;
            buffer.set_pixel(row, col, [v, v, v, 255]);
        }
    }
    buffer
}

/// Checkerboard of `a` and `b`, starting with `a` at the origin.
pub fn checkerboard(height: u32, width: u32, a: [u8; 4], b: [u8; 4]) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(height, width).expect("checkerboard fixture allocates");
    for row in 0..height {
        for col in 0..width {
            let px = if (row + col) % 2 == 0 { a } else { b };
            buffer.set_pixel(row, col, px);
        }
    }
    buffer
}

/// A config file exercising every field.
pub const FULL_CONFIG_YAML: &str = r##"
downsize:
  height: 2
  width: 2
background: "#FFFFFF"
gamma: 2.0
"##;

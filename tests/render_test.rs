//! End-to-end rendering through the public API.

mod common;

use artscii::{Artscii, ArtsciiRenderer, BackgroundColor, RenderError};
use artscii_core::{ArtsciiError, GLYPH_RAMP};
use common::*;
use pretty_assertions::assert_eq;

fn render(renderer: &ArtsciiRenderer, buffer: artscii::PixelBuffer) -> Artscii {
    common::init_tracing();
    renderer.render(buffer).expect("render should succeed")
}

#[test]
fn test_white_on_black_is_densest_glyph() {
    let renderer = ArtsciiRenderer::default().downsize(1, 1);
    let art = render(&renderer, solid(2, 2, WHITE));

    assert_eq!(art.glyphs(), "@@@@");
    assert_eq!(art.to_string(), "@@\n@@");
}

#[test]
fn test_black_is_sparsest_glyph() {
    let renderer = ArtsciiRenderer::default()
        .downsize(1, 1)
        .background(BackgroundColor::WHITE);
    let art = render(&renderer, solid(1, 3, BLACK));

    // Opaque pixels ignore the background entirely.
    assert_eq!(art.glyphs(), "   ");
}

#[test]
fn test_transparent_takes_background_luminance() {
    let renderer = ArtsciiRenderer::default()
        .downsize(1, 1)
        .background(BackgroundColor::new(128, 128, 128));
    let art = render(&renderer, solid(1, 1, CLEAR));

    assert_eq!(art.glyphs(), "+");
}

#[test]
fn test_default_factors_halve_rows() {
    let art = render(&ArtsciiRenderer::default(), solid(7, 5, WHITE));

    // 7 / 2 truncates; the last row is cropped.
    assert_eq!((art.height(), art.width()), (3, 5));
    assert_eq!(art.rows().count(), 3);
    assert!(art.rows().all(|row| row == "@@@@@"));
}

#[test]
fn test_ramp_renders_every_glyph_in_order() {
    let renderer = ArtsciiRenderer::default().downsize(1, 1);
    let art = render(&renderer, horizontal_ramp(1, 256));

    let glyphs: Vec<char> = art.glyphs().chars().collect();
    for pair in glyphs.windows(2) {
        let a = GLYPH_RAMP.iter().position(|&g| g == pair[0]).unwrap();
        let b = GLYPH_RAMP.iter().position(|&g| g == pair[1]).unwrap();
        assert!(a <= b, "{:?} after {:?}", pair[1], pair[0]);
    }
    let distinct: String = {
        let mut seen = glyphs.clone();
        seen.dedup();
        seen.into_iter().collect()
    };
    assert_eq!(distinct, " .-=+*#@");
}

#[test]
fn test_transparent_checkerboard_keeps_opaque_colour() {
    // Alpha weighting: averaging white with transparent must stay white.
    let renderer = ArtsciiRenderer::default().downsize(2, 2);
    let art = render(&renderer, checkerboard(4, 4, WHITE, CLEAR));

    assert_eq!(art.to_string(), "@@\n@@");
}

#[test]
fn test_opaque_checkerboard_averages_to_mid_grey() {
    let renderer = ArtsciiRenderer::default().downsize(2, 2);
    let art = render(&renderer, checkerboard(2, 2, WHITE, BLACK));

    // (255 + 0) / 2 = 127 -> 0.498 * 7.999 = 3.98
    assert_eq!(art.glyphs(), "=");
}

#[test]
fn test_gamma_changes_rendering() {
    let buffer = solid(1, 1, [64, 64, 64, 255]);

    let linear = ArtsciiRenderer::default().downsize(1, 1);
    let corrected = linear.clone().gamma(2.2);
    let darkened = linear.clone().gamma(0.5);

    assert_eq!(render(&linear, buffer.clone()).glyphs(), "-");
    assert_eq!(render(&corrected, buffer.clone()).glyphs(), "+");
    assert_eq!(render(&darkened, buffer).glyphs(), " ");
}

#[test]
fn test_renderer_is_reusable() {
    let renderer = ArtsciiRenderer::default();

    let first = render(&renderer, solid(2, 2, WHITE));
    let second = render(&renderer, solid(2, 2, BLACK));

    assert_eq!(first.glyphs(), "@@");
    assert_eq!(second.glyphs(), "  ");
}

#[test]
fn test_invalid_arguments_are_reported() {
    common::init_tracing();

    let cases = [
        ArtsciiRenderer::default().gamma(-1.0),
        ArtsciiRenderer::default().gamma(0.0),
        ArtsciiRenderer::default().downsize(0, 1),
        ArtsciiRenderer::default().downsize(1, 9),
    ];
    for renderer in cases {
        let err = renderer.render(solid(4, 4, WHITE)).unwrap_err();
        assert!(err.is_invalid_argument(), "{err}");
    }
}

#[test]
fn test_mis_sized_rgba_rejected() {
    let err = ArtsciiRenderer::default()
        .render_rgba(3, 3, vec![0; 35])
        .unwrap_err();

    assert!(matches!(
        err,
        RenderError::Pipeline(ArtsciiError::BufferLengthMismatch {
            expected: 36,
            actual: 35
        })
    ));
}

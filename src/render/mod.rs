//! Pixel-buffer rendering support for the tab strip.
//!
//! The widget draws into a plain `u32` framebuffer (`0xRRGGBB` per pixel,
//! the layout softbuffer presents). Text goes through [`TextPainter`],
//! which rasterizes glyphs with fontdue and caches the bitmaps.

mod primitives;
pub mod text;
pub mod types;

pub use primitives::{fill_rect, vline};
pub use text::TextPainter;
pub use types::RenderTarget;

/// Sanitizes a DPI scale factor to a safe, finite range.
///
/// Returns `1.0` for non-finite inputs, otherwise clamps to `[0.75, 4.0]`.
pub fn sanitize_scale(scale_factor: f64) -> f64 {
    if scale_factor.is_finite() {
        scale_factor.clamp(0.75, 4.0)
    } else {
        1.0
    }
}

/// Blends `src` over `dst` with `alpha` in 0..=255 (both colors are 0xRRGGBB).
pub(crate) fn blend_rgb(dst: u32, src: u32, alpha: u8) -> u32 {
    if alpha == 255 {
        return src;
    }
    if alpha == 0 {
        return dst;
    }

    let a = alpha as u32;
    let inv = 255 - a;

    let dr = (dst >> 16) & 0xFF;
    let dg = (dst >> 8) & 0xFF;
    let db = dst & 0xFF;

    let sr = (src >> 16) & 0xFF;
    let sg = (src >> 8) & 0xFF;
    let sb = src & 0xFF;

    let r = (sr * a + dr * inv) / 255;
    let g = (sg * a + dg * inv) / 255;
    let b = (sb * a + db * inv) / 255;

    (r << 16) | (g << 8) | b
}

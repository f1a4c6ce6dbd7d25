use crate::core::Color;

use super::blend_rgb;
use super::types::RenderTarget;

/// Fills an axis-aligned rectangle, clipped to the target, blending by `alpha`.
///
/// Fractional edges are rounded to whole pixels; empty or fully transparent
/// rectangles are skipped.
pub fn fill_rect(target: &mut RenderTarget<'_>, x: f32, y: f32, w: f32, h: f32, color: Color, alpha: u8) {
    if alpha == 0 || w <= 0.0 || h <= 0.0 {
        return;
    }

    let x0 = (x.round() as i64).max(0) as usize;
    let y0 = (y.round() as i64).max(0) as usize;
    let x1 = (((x + w).round() as i64).max(0) as usize).min(target.width);
    let y1 = (((y + h).round() as i64).max(0) as usize).min(target.height);

    let pixel = color.to_pixel();
    for py in y0..y1 {
        let row = py * target.width;
        for px in x0..x1 {
            let idx = row + px;
            target.buffer[idx] = blend_rgb(target.buffer[idx], pixel, alpha);
        }
    }
}

/// Draws a vertical line of `width` pixels centered on `x`, from `y0` to `y1`.
pub fn vline(target: &mut RenderTarget<'_>, x: f32, y0: f32, y1: f32, width: f32, color: Color) {
    if y1 <= y0 || width <= 0.0 {
        return;
    }
    fill_rect(target, x - width / 2.0, y0, width, y1 - y0, color, 255);
}

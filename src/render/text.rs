//! Glyph rasterization and label measurement.
//!
//! Labels are measured on a monospace cell grid: a label's width is its
//! unicode cell count (wide CJK glyphs count double) times the font's cell
//! advance at the requested size. Rasterized glyphs are cached per
//! `(char, size)` so steady-state drawing never re-rasterizes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use anyhow::{Context, anyhow};
use unicode_width::UnicodeWidthChar;

use crate::core::Color;

use super::blend_rgb;
use super::types::{GlyphBitmap, RenderTarget};

/// Width measurement seam between the tab strip and the text stack.
///
/// The widget's layout pass only needs label widths, so tests can substitute
/// fixed metrics without loading a font.
pub trait LabelMeasure {
    /// Width in pixels of `text` rendered at `size_px`.
    fn label_width(&self, text: &str, size_px: f32) -> f32;
}

/// Per-size font metrics derived once and cached.
#[derive(Clone, Copy)]
struct CellMetrics {
    cell_width: f32,
    cell_height: f32,
    ascent: f32,
}

/// System font locations probed in order, first match wins.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Rasterizes and caches glyphs for the strip and the demo host.
pub struct TextPainter {
    font: fontdue::Font,
    glyph_cache: HashMap<(char, u32), GlyphBitmap>,
    cell_cache: HashMap<u32, CellMetrics>,
}

impl TextPainter {
    /// Builds a painter from raw TTF/OTF bytes.
    pub fn from_bytes(data: &[u8]) -> anyhow::Result<Self> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(|e| anyhow!("invalid font data: {e}"))?;
        Ok(Self {
            font,
            glyph_cache: HashMap::new(),
            cell_cache: HashMap::new(),
        })
    }

    /// Loads the first readable font from the system search list.
    pub fn from_system_font() -> anyhow::Result<Self> {
        for path in FONT_CANDIDATES {
            if let Ok(data) = std::fs::read(path) {
                return Self::from_bytes(&data)
                    .with_context(|| format!("loading font from {path}"));
            }
        }
        Err(anyhow!("no usable system font found"))
    }

    fn size_key(size_px: f32) -> u32 {
        size_px.round().max(1.0) as u32
    }

    fn cell_metrics(&mut self, size_px: f32) -> CellMetrics {
        let key = Self::size_key(size_px);
        if let Some(m) = self.cell_cache.get(&key) {
            return *m;
        }
        let size = key as f32;
        let advance = self.font.metrics('M', size).advance_width.max(1.0);
        let (cell_height, ascent) = match self.font.horizontal_line_metrics(size) {
            Some(lm) => (lm.new_line_size, lm.ascent),
            None => (size * 1.2, size),
        };
        let m = CellMetrics { cell_width: advance, cell_height, ascent };
        self.cell_cache.insert(key, m);
        m
    }

    /// Line height at `size_px`, used to center labels vertically.
    pub fn line_height(&mut self, size_px: f32) -> f32 {
        self.cell_metrics(size_px).cell_height
    }

    /// Cell count of `text` on the monospace grid (CJK-aware).
    fn cell_count(text: &str) -> usize {
        text.chars().map(|c| c.width().unwrap_or(1)).sum()
    }

    /// Draws `text` with its top-left corner at `(x, y)`; returns the advance.
    pub fn draw_text(
        &mut self,
        target: &mut RenderTarget<'_>,
        x: f32,
        y: f32,
        text: &str,
        size_px: f32,
        color: Color,
    ) -> f32 {
        let m = self.cell_metrics(size_px);
        let mut pen_x = x;
        for ch in text.chars() {
            self.draw_char(target, pen_x, y, ch, size_px, color);
            pen_x += ch.width().unwrap_or(1) as f32 * m.cell_width;
        }
        pen_x - x
    }

    /// Draws one glyph with the text box's top-left corner at `(x, y)`.
    pub fn draw_char(
        &mut self,
        target: &mut RenderTarget<'_>,
        x: f32,
        y: f32,
        ch: char,
        size_px: f32,
        color: Color,
    ) {
        let m = self.cell_metrics(size_px);
        let key = (ch, Self::size_key(size_px));
        let glyph = match self.glyph_cache.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let (metrics, bitmap) = self.font.rasterize(ch, key.1 as f32);
                entry.insert(GlyphBitmap {
                    data: bitmap,
                    width: metrics.width,
                    height: metrics.height,
                    left: metrics.xmin,
                    top: metrics.height as i32 + metrics.ymin,
                })
            }
        };

        let pixel = color.to_pixel();
        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let alpha = glyph.data[gy * glyph.width + gx];
                if alpha == 0 {
                    continue;
                }

                let sx = x.round() as i32 + glyph.left + gx as i32;
                let sy = y.round() as i32 + (m.ascent.round() as i32 - glyph.top) + gy as i32;

                if sx >= 0
                    && sy >= 0
                    && (sx as usize) < target.width
                    && (sy as usize) < target.height
                {
                    let idx = sy as usize * target.width + sx as usize;
                    target.buffer[idx] = blend_rgb(target.buffer[idx], pixel, alpha);
                }
            }
        }
    }
}

impl LabelMeasure for TextPainter {
    fn label_width(&self, text: &str, size_px: f32) -> f32 {
        let key = Self::size_key(size_px);
        // Usually pre-warmed by a prior draw or measure; fall back to a fresh
        // metrics query without touching the cache when it is not.
        let cell_width = match self.cell_cache.get(&key) {
            Some(m) => m.cell_width,
            None => self.font.metrics('M', key as f32).advance_width.max(1.0),
        };
        Self::cell_count(text) as f32 * cell_width
    }
}

//! Draw routine: tab backgrounds and labels, then the selection indicator,
//! the full-width underline, and the per-tab dividers.

use crate::core::Color;
use crate::render::text::LabelMeasure;
use crate::render::{RenderTarget, TextPainter, fill_rect, vline};

use super::TabStrip;
use super::geometry;
use super::state::TabContent;

/// Icon glyphs render slightly larger than the default label size.
const ICON_GLYPH_SCALE: f32 = 1.25;

impl TabStrip {
    /// Draws the whole strip into the top `config.height` rows of `target`,
    /// shifted left by the current scroll offset.
    ///
    /// Skipped entirely when the collection is empty or the strip is in
    /// preview mode.
    pub fn draw(&mut self, target: &mut RenderTarget<'_>, painter: &mut TextPainter) {
        self.needs_redraw = false;
        if self.preview_mode || self.tabs.is_empty() {
            return;
        }

        let height = self.config.height;
        let viewport_width = self.viewport.0;

        // Bar base, then per-tab fills over it.
        fill_rect(
            target,
            0.0,
            0.0,
            viewport_width,
            height,
            Color::from_hex(self.config.background),
            255,
        );

        for (tab, span) in self.tabs.iter().zip(&self.spans) {
            let left = span.left - self.scroll_x;
            if left + span.width() <= 0.0 || left >= viewport_width {
                continue;
            }

            fill_rect(target, left, 0.0, span.width(), height, tab.visual.background, 255);

            match &tab.content {
                TabContent::Text(_) => {
                    let label = &tab.visual.display_label;
                    let size = tab.visual.text_size;
                    let label_width = painter.label_width(label, size);
                    let text_x = left + (span.width() - label_width) / 2.0;
                    let text_y = (height - painter.line_height(size)) / 2.0;
                    painter.draw_text(target, text_x, text_y, label, size, tab.visual.text_color);
                }
                TabContent::Icon(glyph) => {
                    let size = self.config.text.size * ICON_GLYPH_SCALE;
                    let glyph_width = painter.label_width(&glyph.to_string(), size);
                    let icon_x = left + (span.width() - glyph_width) / 2.0;
                    let icon_y = (height - painter.line_height(size)) / 2.0;
                    painter.draw_char(target, icon_x, icon_y, *glyph, size, tab.visual.text_color);
                }
            }
        }

        self.draw_decorations(target);
    }

    /// Draws the indicator, underline, and dividers. Split out from [`draw`]
    /// so the geometry can be verified against raw pixels without a font.
    ///
    /// [`draw`]: TabStrip::draw
    pub fn draw_decorations(&self, target: &mut RenderTarget<'_>) {
        if self.preview_mode || self.tabs.is_empty() {
            return;
        }

        let height = self.config.height;

        // Indicator under the active tab, interpolated during drags.
        if let Some((line_left, line_right)) = geometry::indicator_edges(
            &self.spans,
            self.page_state.position,
            self.page_state.offset,
        ) {
            let inset = if self.config.indicator.fixed_width {
                geometry::fixed_indicator_inset(line_left, line_right, self.config.indicator.width)
            } else {
                self.config.indicator.padding
            };
            let x0 = line_left + inset - self.scroll_x;
            let x1 = line_right - inset - self.scroll_x;
            fill_rect(
                target,
                x0,
                height - self.config.indicator.height,
                x1 - x0,
                self.config.indicator.height,
                Color::from_hex(self.config.indicator.color),
                255,
            );
        }

        // Underline across the whole content width, painted after the
        // indicator so it covers the indicator's bottom rows.
        fill_rect(
            target,
            -self.scroll_x,
            height - self.config.underline.height,
            geometry::content_width(&self.spans),
            self.config.underline.height,
            Color::from_hex(self.config.underline.color),
            255,
        );

        // Divider at the right edge of every tab except the last.
        let divider_color = Color::from_hex(self.config.divider.color);
        for span in self.spans.iter().take(self.spans.len().saturating_sub(1)) {
            vline(
                target,
                span.right - self.scroll_x,
                self.config.divider.padding,
                height - self.config.divider.padding,
                self.config.divider.width,
                divider_color,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_draw.rs"]
mod draw_tests;

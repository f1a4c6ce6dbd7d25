//! Flat configuration accessor surface.
//!
//! Each setter marks the cheapest sufficient follow-up: decoration-only
//! properties request a redraw, sizing properties request a re-layout, and
//! text properties re-run the style updater. Never both unnecessarily.

use super::TabStrip;

impl TabStrip {
    // ── Indicator ────────────────────────────────────────────────────

    pub fn set_indicator_color(&mut self, color: u32) {
        self.config.indicator.color = color;
        self.invalidate();
    }

    pub fn indicator_color(&self) -> u32 {
        self.config.indicator.color
    }

    pub fn set_indicator_height(&mut self, height: f32) {
        self.config.indicator.height = height;
        self.invalidate();
    }

    pub fn indicator_height(&self) -> f32 {
        self.config.indicator.height
    }

    pub fn set_indicator_width(&mut self, width: f32) {
        self.config.indicator.width = width;
        self.invalidate();
    }

    pub fn indicator_width(&self) -> f32 {
        self.config.indicator.width
    }

    pub fn set_fixed_indicator_width(&mut self, fixed: bool) {
        self.config.indicator.fixed_width = fixed;
        self.invalidate();
    }

    pub fn is_fixed_indicator_width(&self) -> bool {
        self.config.indicator.fixed_width
    }

    // ── Underline ────────────────────────────────────────────────────

    pub fn set_underline_color(&mut self, color: u32) {
        self.config.underline.color = color;
        self.invalidate();
    }

    pub fn underline_color(&self) -> u32 {
        self.config.underline.color
    }

    pub fn set_underline_height(&mut self, height: f32) {
        self.config.underline.height = height;
        self.invalidate();
    }

    pub fn underline_height(&self) -> f32 {
        self.config.underline.height
    }

    // ── Divider ──────────────────────────────────────────────────────

    pub fn set_divider_color(&mut self, color: u32) {
        self.config.divider.color = color;
        self.invalidate();
    }

    pub fn divider_color(&self) -> u32 {
        self.config.divider.color
    }

    pub fn set_divider_width(&mut self, width: f32) {
        self.config.divider.width = width;
        self.invalidate();
    }

    pub fn divider_width(&self) -> f32 {
        self.config.divider.width
    }

    pub fn set_divider_padding(&mut self, padding: f32) {
        self.config.divider.padding = padding;
        self.invalidate();
    }

    pub fn divider_padding(&self) -> f32 {
        self.config.divider.padding
    }

    // ── Scroll behavior ──────────────────────────────────────────────

    pub fn set_scroll_offset(&mut self, lead_in: f32) {
        self.config.scroll_offset = lead_in;
        self.invalidate();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.config.scroll_offset
    }

    pub fn set_should_expand(&mut self, should_expand: bool) {
        self.config.should_expand = should_expand;
        self.request_layout();
    }

    pub fn should_expand(&self) -> bool {
        self.config.should_expand
    }

    // ── Text ─────────────────────────────────────────────────────────

    pub fn set_text_size(&mut self, size: f32) {
        self.config.text.size = size;
        self.refresh_styles();
        self.invalidate();
    }

    pub fn text_size(&self) -> f32 {
        self.config.text.size
    }

    pub fn set_text_color(&mut self, color: u32) {
        self.config.text.color = color;
        self.refresh_styles();
        self.invalidate();
    }

    pub fn text_color(&self) -> u32 {
        self.config.text.color
    }

    pub fn set_selected_text_size(&mut self, size: f32) {
        self.config.text.selected_size = size;
        self.refresh_styles();
        self.invalidate();
    }

    pub fn selected_text_size(&self) -> f32 {
        self.config.text.selected_size
    }

    pub fn set_selected_text_color(&mut self, color: u32) {
        self.config.text.selected_color = color;
        self.refresh_styles();
        self.invalidate();
    }

    pub fn selected_text_color(&self) -> u32 {
        self.config.text.selected_color
    }

    /// Takes effect on the next style refresh.
    pub fn set_all_caps(&mut self, all_caps: bool) {
        self.config.text.all_caps = all_caps;
    }

    pub fn is_text_all_caps(&self) -> bool {
        self.config.text.all_caps
    }

    // ── Tabs ─────────────────────────────────────────────────────────

    pub fn set_tab_padding(&mut self, padding: f32) {
        self.config.tab_padding = padding;
        self.refresh_styles();
        self.invalidate();
    }

    pub fn tab_padding(&self) -> f32 {
        self.config.tab_padding
    }

    /// Takes effect on the next style refresh.
    pub fn set_tab_background(&mut self, color: u32) {
        self.config.background = color;
    }

    pub fn tab_background(&self) -> u32 {
        self.config.background
    }

    pub fn strip_height(&self) -> f32 {
        self.config.height
    }
}

//! Measurement and arrangement passes.
//!
//! The sizing decision (natural vs. equal-share) is made once per rebuild
//! and frozen behind `checked_tab_widths`; layout passes happen far more
//! often than content changes, so re-deciding every pass would be wasted
//! work and could flip modes mid-interaction.

use crate::render::text::LabelMeasure;

use super::geometry::{self, ICON_INTRINSIC_WIDTH};
use super::source::PageSource;
use super::state::{TabContent, TabSizing};
use super::TabStrip;

impl TabStrip {
    /// Runs one full layout pass for the given viewport.
    ///
    /// Measures intrinsic tab widths, freezes the sizing decision if it is
    /// not frozen yet, arranges the spans, clamps the scroll offset to the
    /// new content width, and fires the one-shot post-layout scroll armed by
    /// the last rebuild.
    pub fn perform_layout(
        &mut self,
        measurer: &dyn LabelMeasure,
        viewport_width: f32,
        viewport_height: f32,
        source: &dyn PageSource,
    ) {
        self.viewport = (viewport_width, viewport_height);

        self.measure_tabs(measurer);
        self.check_tab_widths(viewport_width);
        self.arrange(viewport_width);

        if self.pending_initial_scroll {
            self.pending_initial_scroll = false;
            self.page_state.position = source.current_page();
            self.page_state.offset = 0.0;
            self.scroll_to_child(self.page_state.position, 0.0);
        }

        self.needs_layout = false;
        self.invalidate();
    }

    /// Fills in each tab's intrinsic width from its content.
    fn measure_tabs(&mut self, measurer: &dyn LabelMeasure) {
        for tab in &mut self.tabs {
            tab.intrinsic_width = match &tab.content {
                TabContent::Text(_) => {
                    measurer.label_width(&tab.visual.display_label, tab.visual.text_size)
                }
                TabContent::Icon(_) => ICON_INTRINSIC_WIDTH,
            };
        }
    }

    /// Freezes the sizing decision on the first measurement with real
    /// dimensions; a no-op on every later pass until a rebuild resets it.
    fn check_tab_widths(&mut self, available_width: f32) {
        if self.checked_tab_widths {
            return;
        }

        let intrinsics: Vec<f32> = self.tabs.iter().map(|t| t.intrinsic_width).collect();
        let summed = geometry::summed_width(&intrinsics, self.config.tab_padding);
        if summed <= 0.0 || available_width <= 0.0 {
            return;
        }

        self.sizing = if self.config.should_expand {
            TabSizing::EqualShare
        } else {
            geometry::choose_sizing(summed, available_width)
        };
        self.checked_tab_widths = true;
    }

    /// Lays the tabs out according to the frozen decision and keeps the
    /// scroll offset inside the new scrollable range.
    fn arrange(&mut self, available_width: f32) {
        let intrinsics: Vec<f32> = self.tabs.iter().map(|t| t.intrinsic_width).collect();
        self.spans = geometry::tab_spans(
            &intrinsics,
            self.sizing,
            available_width,
            self.config.tab_padding,
        );

        let max = geometry::max_scroll(geometry::content_width(&self.spans), available_width);
        self.scroll_x = self.scroll_x.clamp(0.0, max);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_layout.rs"]
mod layout_tests;

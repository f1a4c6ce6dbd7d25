//! The scroll/indicator synchronizer: page-change event handlers and the
//! de-duplicated scroll-follow command.

use super::TabStrip;
use super::geometry;
use super::source::ScrollState;

impl TabStrip {
    /// Continuous page-scroll callback from the source.
    ///
    /// Updates the scroll state, follows the scroll so the active tab stays
    /// in view, requests a redraw, and forwards the event to the delegate.
    pub fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: f32) {
        self.page_state.position = position;
        self.page_state.offset = offset;

        let tab_width = self.spans.get(position).map_or(0.0, |s| s.width());
        self.scroll_to_child(position, offset * tab_width);
        self.invalidate();

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_page_scrolled(position, offset, offset_px);
        }
    }

    /// Scroll-state transition callback from the source.
    ///
    /// On the transition to idle the strip re-snaps to the committed page
    /// with zero offset, correcting any drift accumulated while following
    /// fractional scroll positions.
    pub fn on_page_scroll_state_changed(&mut self, state: ScrollState, current_page: usize) {
        if state == ScrollState::Idle {
            self.scroll_to_child(current_page, 0.0);
        }

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_page_scroll_state_changed(state);
        }
    }

    /// Page-selection commit callback from the source.
    ///
    /// The delegate hears about it first, then the selected styling moves to
    /// the new page.
    pub fn on_page_selected(&mut self, position: usize) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_page_selected(position);
        }

        self.selected_position = position;
        self.refresh_styles();
        self.invalidate();
    }

    /// Scrolls the strip so the tab at `position` (shifted by `offset_px`)
    /// sits just past the lead-in from the left edge.
    ///
    /// The raw target is compared against the last issued one and redundant
    /// commands are dropped; page-scroll callbacks arrive at high frequency
    /// and usually map to the same pixel target several times in a row.
    /// Returns `true` when a scroll command was actually issued.
    pub fn scroll_to_child(&mut self, position: usize, offset_px: f32) -> bool {
        if self.tabs.is_empty() {
            return false;
        }
        let Some(span) = self.spans.get(position) else {
            return false;
        };

        let target =
            geometry::scroll_target(span.left, offset_px, position, self.config.scroll_offset);
        if target == self.page_state.last_scroll_x {
            return false;
        }
        self.page_state.last_scroll_x = target;

        let max = geometry::max_scroll(geometry::content_width(&self.spans), self.viewport.0);
        self.scroll_x = target.clamp(0.0, max);
        self.invalidate();
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_sync.rs"]
mod sync_tests;

//! Seams between the strip and its paged-content collaborator.
//!
//! The widget is a pure consumer of the source's page-change events plus a
//! driver of its set-current-page operation. Subscription is explicit: the
//! host forwards every source event to the strip's `on_page_*` methods (a
//! persistent registration), in source order, on the UI thread.

use super::state::TabContent;

/// Supplies per-page tab content.
pub trait PageAdapter {
    fn page_count(&self) -> usize;
    /// Content for the tab at `position`; `position < page_count()`.
    fn tab_content(&self, position: usize) -> TabContent;
}

/// The paged content view the strip synchronizes with.
pub trait PageSource {
    /// The attached data provider, if any. Attaching a source without one is
    /// a programmer error and the strip fails fast on it.
    fn adapter(&self) -> Option<&dyn PageAdapter>;
    fn current_page(&self) -> usize;
    /// Commits a page selection; the source is expected to report the change
    /// back through its page-change callbacks.
    fn set_current_page(&mut self, position: usize);
}

/// Scroll phase reported by the paged content view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    /// No active drag or fling.
    Idle,
    /// The user is actively dragging between pages.
    Dragging,
    /// A drag was released and the view is settling onto a page.
    Settling,
}

/// Optional pass-through listener.
///
/// Every event the strip receives from the source is forwarded verbatim to at
/// most one delegate, after the strip's own handling (for page selection:
/// before the style refresh moves the selected styling).
pub trait PageChangeListener {
    fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: f32);
    fn on_page_scroll_state_changed(&mut self, state: ScrollState);
    fn on_page_selected(&mut self, position: usize);
}

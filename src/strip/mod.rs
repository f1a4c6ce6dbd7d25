//! The sliding tab strip widget.
//!
//! One `TabStrip` owns the tab collection, the frozen sizing decision, the
//! scroll-follow state, and the draw routine. It is driven by three kinds of
//! host callbacks: layout passes ([`TabStrip::perform_layout`]), draw
//! requests ([`TabStrip::draw`]), and the page-change events forwarded from
//! the attached [`PageSource`]. All of them must arrive on the same thread;
//! the widget holds no synchronization of its own.

mod accessors;
mod draw;
pub mod geometry;
mod measure;
mod source;
mod state;
mod styles;
mod sync;

pub use source::{PageAdapter, PageChangeListener, PageSource, ScrollState};
pub use state::{PageScrollState, SavedState, Tab, TabContent, TabSizing, TabVisual};

use geometry::TabSpan;

use crate::config::StripConfig;

pub struct TabStrip {
    config: StripConfig,
    tabs: Vec<Tab>,
    spans: Vec<TabSpan>,
    page_state: PageScrollState,
    /// Index styled as selected; follows the source's committed selection,
    /// not the transient scroll position.
    selected_position: usize,
    sizing: TabSizing,
    checked_tab_widths: bool,
    scroll_x: f32,
    viewport: (f32, f32),
    delegate: Option<Box<dyn PageChangeListener>>,
    /// Single-fire post-layout action armed by a rebuild: re-read the
    /// source's current page and snap the strip there. Re-arming replaces
    /// the pending one; it self-disarms on first fire.
    pending_initial_scroll: bool,
    needs_redraw: bool,
    needs_layout: bool,
    /// Suppresses drawing in non-interactive previews.
    preview_mode: bool,
}

impl TabStrip {
    /// Creates an empty strip. Dimensions in `config` are taken as physical
    /// pixels; apply [`StripConfig::to_physical`] first on HiDPI displays.
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            tabs: Vec::new(),
            spans: Vec::new(),
            page_state: PageScrollState::default(),
            selected_position: 0,
            sizing: TabSizing::EqualShare,
            checked_tab_widths: false,
            scroll_x: 0.0,
            viewport: (0.0, 0.0),
            delegate: None,
            pending_initial_scroll: false,
            needs_redraw: false,
            needs_layout: false,
            preview_mode: false,
        }
    }

    /// Binds the strip to a paged content source and builds the tabs.
    ///
    /// # Panics
    ///
    /// Panics when the source has no adapter attached; content must be
    /// attached before the strip can build tabs.
    pub fn attach(&mut self, source: &dyn PageSource) {
        assert!(
            source.adapter().is_some(),
            "page source does not have an adapter instance"
        );
        self.notify_data_set_changed(source);
    }

    /// Rebuilds the tab collection from the source's adapter.
    ///
    /// Clears all tabs, creates one per page, refreshes styles once, resets
    /// the frozen sizing decision, and arms the one-shot post-layout scroll
    /// to the selected tab.
    pub fn notify_data_set_changed(&mut self, source: &dyn PageSource) {
        let adapter = source
            .adapter()
            .expect("page source does not have an adapter instance");

        self.tabs.clear();
        let page_count = adapter.page_count();
        for position in 0..page_count {
            self.tabs.push(Tab::new(position, adapter.tab_content(position)));
        }
        self.spans.clear();

        self.selected_position = source.current_page();
        self.refresh_styles();

        self.checked_tab_widths = false;
        self.pending_initial_scroll = true;
        self.request_layout();
    }

    /// Installs the pass-through delegate (at most one).
    pub fn set_delegate(&mut self, delegate: Box<dyn PageChangeListener>) {
        self.delegate = Some(delegate);
    }

    /// Routes a pointer press to the tab under it, committing that page on
    /// the source. Returns `true` when a tab was activated.
    pub fn handle_click(&mut self, x: f32, y: f32, source: &mut dyn PageSource) -> bool {
        if y < 0.0 || y >= self.config.height {
            return false;
        }
        let Some(position) = geometry::tab_at(&self.spans, x + self.scroll_x) else {
            return false;
        };
        source.set_current_page(position);
        true
    }

    // ── Persisted state ──────────────────────────────────────────────

    /// Captures the one persisted field, the current page index.
    pub fn save_state(&self) -> SavedState {
        SavedState { current_position: self.page_state.position }
    }

    /// Restores a previously saved position and requests a layout pass.
    /// Every other property is expected to be re-supplied via the config.
    pub fn restore_state(&mut self, saved: SavedState) {
        self.page_state.position = saved.current_position;
        self.selected_position = saved.current_position;
        self.refresh_styles();
        self.request_layout();
    }

    // ── Introspection ────────────────────────────────────────────────

    pub fn page_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn spans(&self) -> &[TabSpan] {
        &self.spans
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn selected_position(&self) -> usize {
        self.selected_position
    }

    pub fn current_position(&self) -> usize {
        self.page_state.position
    }

    pub fn sizing(&self) -> TabSizing {
        self.sizing
    }

    pub fn set_preview_mode(&mut self, preview: bool) {
        self.preview_mode = preview;
    }

    // ── Invalidation flags polled by the host ────────────────────────

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Consumes the pending layout request, if any.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }

    pub(in crate::strip) fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    pub(in crate::strip) fn request_layout(&mut self) {
        self.needs_layout = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strip_rebuild.rs"]
mod rebuild_tests;

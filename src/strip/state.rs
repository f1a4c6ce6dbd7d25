use serde::{Deserialize, Serialize};

use crate::core::Color;

/// What a tab displays: a text label or an icon glyph reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabContent {
    Text(String),
    Icon(char),
}

/// One selectable entry in the strip.
///
/// Tabs are created in bulk on every rebuild and destroyed wholesale on the
/// next one; there is no incremental diffing. `position` always equals the
/// tab's index in the collection and the page index it activates.
pub struct Tab {
    pub position: usize,
    pub content: TabContent,
    /// Intrinsic width, filled in by the measurement pass (0 until then).
    pub intrinsic_width: f32,
    /// Resolved visual state, rewritten by every style refresh.
    pub visual: TabVisual,
}

impl Tab {
    pub fn new(position: usize, content: TabContent) -> Self {
        Self {
            position,
            content,
            intrinsic_width: 0.0,
            visual: TabVisual::default(),
        }
    }
}

/// Materialized appearance of one tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabVisual {
    /// Label after the all-caps transform; empty for icon tabs.
    pub display_label: String,
    pub text_size: f32,
    pub text_color: Color,
    pub background: Color,
}

/// Transient page-scroll state, updated on every scroll callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageScrollState {
    /// Current page index. Invariant: `position < page_count` whenever the
    /// collection is non-empty (the source guarantees its callbacks stay in
    /// range).
    pub position: usize,
    /// Fractional progress toward the next page, in `[0, 1)`. Zero exactly
    /// when resting on an integral page.
    pub offset: f32,
    /// Last scroll-follow target, used to suppress redundant scroll commands.
    pub last_scroll_x: f32,
}

/// How tab widths are assigned, decided once per rebuild and then frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabSizing {
    /// Each tab keeps its intrinsic width plus padding.
    Natural,
    /// All tabs share the available width equally.
    EqualShare,
}

/// The single persisted piece of widget state.
///
/// Everything else in [`crate::StripConfig`] is expected to be re-supplied by
/// the owning screen on reconstruction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SavedState {
    pub current_position: usize,
}

//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation: given widths, spans,
//! and offsets it returns coordinates. No widget state, no side effects, so
//! the synchronizer, the draw routine, and the tests all share one source of
//! truth for geometry.

use super::state::TabSizing;

// ── Constants ────────────────────────────────────────────────────────

/// Intrinsic width of an icon tab before padding.
pub const ICON_INTRINSIC_WIDTH: f32 = 24.0;

// ── Helper types ─────────────────────────────────────────────────────

/// Horizontal extent of one tab in strip-content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabSpan {
    pub left: f32,
    pub right: f32,
}

impl TabSpan {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns `true` when `x` falls inside this span (`left` inclusive,
    /// `right` exclusive).
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x < self.right
    }
}

// ── Sizing ───────────────────────────────────────────────────────────

/// Sum of intrinsic widths, each plus double the tab padding.
pub fn summed_width(intrinsics: &[f32], tab_padding: f32) -> f32 {
    intrinsics.iter().map(|w| w + tab_padding * 2.0).sum()
}

/// Picks the frozen sizing mode: natural widths when the tabs overflow the
/// available width, equal shares otherwise.
pub fn choose_sizing(summed: f32, available: f32) -> TabSizing {
    if summed > available {
        TabSizing::Natural
    } else {
        TabSizing::EqualShare
    }
}

/// Lays the tabs out left to right and returns their spans.
pub fn tab_spans(
    intrinsics: &[f32],
    sizing: TabSizing,
    available: f32,
    tab_padding: f32,
) -> Vec<TabSpan> {
    let count = intrinsics.len();
    if count == 0 {
        return Vec::new();
    }

    let mut spans = Vec::with_capacity(count);
    let mut left = 0.0f32;
    for &intrinsic in intrinsics {
        let width = match sizing {
            TabSizing::Natural => intrinsic + tab_padding * 2.0,
            TabSizing::EqualShare => available / count as f32,
        };
        spans.push(TabSpan { left, right: left + width });
        left += width;
    }
    spans
}

/// Total content width of the laid-out strip.
pub fn content_width(spans: &[TabSpan]) -> f32 {
    spans.last().map_or(0.0, |s| s.right)
}

/// Maximum scroll offset for the given content and viewport widths.
pub fn max_scroll(content_width: f32, viewport_width: f32) -> f32 {
    (content_width - viewport_width).max(0.0)
}

// ── Indicator ────────────────────────────────────────────────────────

/// Left/right edges of the selection indicator before insets.
///
/// At a fractional offset both edges interpolate independently toward the
/// next tab (`offset * next + (1 - offset) * current`); on the last page the
/// offset is ignored. Returns `None` when `position` has no span.
pub fn indicator_edges(spans: &[TabSpan], position: usize, offset: f32) -> Option<(f32, f32)> {
    let current = spans.get(position)?;
    let mut line_left = current.left;
    let mut line_right = current.right;

    if offset > 0.0
        && let Some(next) = spans.get(position + 1)
    {
        line_left = offset * next.left + (1.0 - offset) * line_left;
        line_right = offset * next.right + (1.0 - offset) * line_right;
    }

    Some((line_left, line_right))
}

/// Inset that centers a constant-width indicator inside `[left, right]`.
///
/// Goes negative when the indicator is wider than the span, in which case the
/// indicator deliberately draws wider than the tab.
pub fn fixed_indicator_inset(left: f32, right: f32, indicator_width: f32) -> f32 {
    (right - left - indicator_width) / 2.0
}

// ── Scroll follow ────────────────────────────────────────────────────

/// Raw scroll-follow target for a tab's left edge plus a pixel offset.
///
/// The lead-in is subtracted whenever there is anything to the left of the
/// target, so the active tab is not flush against the strip's edge.
pub fn scroll_target(tab_left: f32, offset_px: f32, position: usize, lead_in: f32) -> f32 {
    let mut target = tab_left + offset_px;
    if position > 0 || offset_px > 0.0 {
        target -= lead_in;
    }
    target
}

// ── Hit testing ──────────────────────────────────────────────────────

/// Index of the tab containing `x` (in strip-content coordinates).
pub fn tab_at(spans: &[TabSpan], x: f32) -> Option<usize> {
    spans.iter().position(|span| span.contains(x))
}

// ── Tests ────────────────────────────────────────────────────────────

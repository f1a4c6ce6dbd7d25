use crate::config::StripConfig;
use crate::render::text::LabelMeasure;
use crate::strip::{PageAdapter, PageSource, TabContent, TabSizing, TabStrip};

struct FixedWidth(f32);

impl LabelMeasure for FixedWidth {
    fn label_width(&self, _text: &str, _size_px: f32) -> f32 {
        self.0
    }
}

struct CountAdapter(usize);

impl PageAdapter for CountAdapter {
    fn page_count(&self) -> usize {
        self.0
    }

    fn tab_content(&self, position: usize) -> TabContent {
        TabContent::Text(format!("tab {position}"))
    }
}

struct Pages {
    adapter: CountAdapter,
    current: usize,
}

impl Pages {
    fn new(count: usize) -> Self {
        Self { adapter: CountAdapter(count), current: 0 }
    }
}

impl PageSource for Pages {
    fn adapter(&self) -> Option<&dyn PageAdapter> {
        Some(&self.adapter)
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn set_current_page(&mut self, position: usize) {
        self.current = position;
    }
}

fn strip_with(count: usize, tab_padding: f32) -> (TabStrip, Pages) {
    let mut config = StripConfig::default();
    config.tab_padding = tab_padding;
    let source = Pages::new(count);
    let mut strip = TabStrip::new(config);
    strip.attach(&source);
    (strip, source)
}

#[test]
fn underfilled_content_gets_equal_shares() {
    // 3 tabs at 80px with 22px padding each side: 3 * (80 + 44) = 372 < 400.
    let (mut strip, source) = strip_with(3, 22.0);
    strip.perform_layout(&FixedWidth(80.0), 400.0, 48.0, &source);

    assert_eq!(strip.sizing(), TabSizing::EqualShare);
    let spans = strip.spans();
    assert_eq!(spans.len(), 3);
    for span in spans {
        assert!((span.width() - 400.0 / 3.0).abs() < 1e-4);
    }
    assert_eq!(spans[0].left, 0.0);
    assert!((spans[2].right - 400.0).abs() < 1e-4);
}

#[test]
fn overflowing_content_keeps_natural_widths() {
    // 3 tabs at 150px, no padding: 450 > 400.
    let (mut strip, source) = strip_with(3, 0.0);
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);

    assert_eq!(strip.sizing(), TabSizing::Natural);
    let spans = strip.spans();
    assert_eq!(spans[1].left, 150.0);
    assert_eq!(spans[2].right, 450.0);
}

#[test]
fn sizing_decision_freezes_until_rebuild() {
    let (mut strip, source) = strip_with(3, 22.0);
    strip.perform_layout(&FixedWidth(80.0), 400.0, 48.0, &source);
    assert_eq!(strip.sizing(), TabSizing::EqualShare);

    // A narrower viewport would flip the decision, but it is frozen.
    strip.perform_layout(&FixedWidth(80.0), 100.0, 48.0, &source);
    assert_eq!(strip.sizing(), TabSizing::EqualShare);

    // A rebuild thaws it.
    strip.notify_data_set_changed(&source);
    strip.perform_layout(&FixedWidth(80.0), 100.0, 48.0, &source);
    assert_eq!(strip.sizing(), TabSizing::Natural);
}

#[test]
fn zero_width_viewport_defers_the_decision() {
    let (mut strip, source) = strip_with(3, 22.0);
    strip.perform_layout(&FixedWidth(80.0), 0.0, 48.0, &source);

    // No real dimensions yet, so the next pass decides again.
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    assert_eq!(strip.sizing(), TabSizing::Natural);
}

#[test]
fn expand_flag_forces_equal_shares() {
    let mut config = StripConfig::default();
    config.tab_padding = 0.0;
    config.should_expand = true;
    let source = Pages::new(3);
    let mut strip = TabStrip::new(config);
    strip.attach(&source);

    // 450px of content would normally stay natural in a 400px viewport.
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    assert_eq!(strip.sizing(), TabSizing::EqualShare);
}

#[test]
fn initial_scroll_fires_once_after_layout() {
    let (mut strip, mut source) = strip_with(3, 0.0);
    source.current = 2;
    strip.notify_data_set_changed(&source);

    // Spans [0,150) [150,300) [300,450): target 300 - 52 = 248, clamped to 50.
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    assert_eq!(strip.scroll_x(), 50.0);
    assert_eq!(strip.current_position(), 2);

    // Later passes must not re-snap on their own.
    source.current = 0;
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    assert_eq!(strip.scroll_x(), 50.0);
}

#[test]
fn relayout_clamps_a_stale_scroll_offset() {
    let (mut strip, source) = strip_with(3, 0.0);
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    strip.scroll_to_child(2, 0.0);
    assert_eq!(strip.scroll_x(), 50.0);

    // Widening the viewport removes the overflow entirely.
    strip.perform_layout(&FixedWidth(150.0), 500.0, 48.0, &source);
    assert_eq!(strip.scroll_x(), 0.0);
}

#[test]
fn layout_on_an_empty_strip_is_harmless() {
    let (mut strip, source) = strip_with(0, 22.0);
    strip.perform_layout(&FixedWidth(80.0), 400.0, 48.0, &source);
    assert!(strip.spans().is_empty());
    assert_eq!(strip.scroll_x(), 0.0);
}

use crate::config::StripConfig;
use crate::render::RenderTarget;
use crate::render::text::LabelMeasure;
use crate::strip::{PageAdapter, PageSource, TabContent, TabStrip};

const INDICATOR: u32 = 0xAA0000;
const UNDERLINE: u32 = 0x00AA00;
const DIVIDER: u32 = 0x0000AA;

struct FixedWidth(f32);

impl LabelMeasure for FixedWidth {
    fn label_width(&self, _text: &str, _size_px: f32) -> f32 {
        self.0
    }
}

struct ThreeTabAdapter;

impl PageAdapter for ThreeTabAdapter {
    fn page_count(&self) -> usize {
        3
    }

    fn tab_content(&self, position: usize) -> TabContent {
        TabContent::Text(format!("tab {position}"))
    }
}

struct ThreeTabs;

impl PageSource for ThreeTabs {
    fn adapter(&self) -> Option<&dyn PageAdapter> {
        Some(&ThreeTabAdapter)
    }

    fn current_page(&self) -> usize {
        0
    }

    fn set_current_page(&mut self, _position: usize) {}
}

/// Three 150px tabs in a 400x48 viewport, one decoration layer enabled at a
/// time so pixel checks cannot collide.
fn bare_strip() -> TabStrip {
    let mut config = StripConfig::default();
    config.tab_padding = 0.0;
    config.background = 0x000000;
    config.indicator.color = INDICATOR;
    config.indicator.height = 0.0;
    config.indicator.padding = 0.0;
    config.underline.color = UNDERLINE;
    config.underline.height = 0.0;
    config.divider.color = DIVIDER;
    config.divider.width = 0.0;

    let mut strip = TabStrip::new(config);
    strip.attach(&ThreeTabs);
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &ThreeTabs);
    strip
}

fn rendered(strip: &TabStrip) -> Vec<u32> {
    let mut buf = vec![0u32; 400 * 48];
    let mut target = RenderTarget::new(&mut buf, 400, 48);
    strip.draw_decorations(&mut target);
    buf
}

fn px(buf: &[u32], x: usize, y: usize) -> u32 {
    buf[y * 400 + x]
}

#[test]
fn indicator_covers_the_interpolated_span() {
    let mut strip = bare_strip();
    strip.config.indicator.height = 4.0;
    // Halfway from tab 1 to tab 2: edges interpolate to [225, 375].
    strip.page_state.position = 1;
    strip.page_state.offset = 0.5;
    strip.scroll_x = 0.0;

    let buf = rendered(&strip);
    assert_eq!(px(&buf, 225, 45), INDICATOR);
    assert_eq!(px(&buf, 374, 45), INDICATOR);
    assert_eq!(px(&buf, 224, 45), 0);
    assert_eq!(px(&buf, 375, 45), 0);
    // Height 4: rows 44..48 only.
    assert_eq!(px(&buf, 300, 44), INDICATOR);
    assert_eq!(px(&buf, 300, 43), 0);
}

#[test]
fn fixed_width_indicator_is_centered() {
    let mut strip = bare_strip();
    strip.config.indicator.height = 4.0;
    strip.config.indicator.fixed_width = true;
    strip.config.indicator.width = 20.0;
    strip.page_state.position = 1;
    strip.page_state.offset = 0.5;
    strip.scroll_x = 0.0;

    // Span [225, 375] insets by (150 - 20) / 2 = 65 to [290, 310].
    let buf = rendered(&strip);
    assert_eq!(px(&buf, 290, 45), INDICATOR);
    assert_eq!(px(&buf, 309, 45), INDICATOR);
    assert_eq!(px(&buf, 289, 45), 0);
    assert_eq!(px(&buf, 310, 45), 0);
}

#[test]
fn indicator_shifts_with_the_strip_scroll() {
    let mut strip = bare_strip();
    strip.config.indicator.height = 4.0;
    strip.page_state.position = 2;
    strip.scroll_x = 50.0;

    // Tab 2 spans [300, 450); on screen that is [250, 400).
    let buf = rendered(&strip);
    assert_eq!(px(&buf, 250, 45), INDICATOR);
    assert_eq!(px(&buf, 399, 45), INDICATOR);
    assert_eq!(px(&buf, 249, 45), 0);
}

#[test]
fn underline_spans_the_content_width() {
    let mut strip = bare_strip();
    strip.config.underline.height = 2.0;

    let buf = rendered(&strip);
    assert_eq!(px(&buf, 0, 46), UNDERLINE);
    assert_eq!(px(&buf, 399, 47), UNDERLINE);
    assert_eq!(px(&buf, 0, 45), 0);
}

#[test]
fn underline_paints_over_the_indicator() {
    let mut strip = bare_strip();
    strip.config.indicator.height = 4.0;
    strip.config.underline.height = 2.0;

    let buf = rendered(&strip);
    // Indicator sits on tab 0; its bottom rows lose to the underline.
    assert_eq!(px(&buf, 75, 44), INDICATOR);
    assert_eq!(px(&buf, 75, 46), UNDERLINE);
    assert_eq!(px(&buf, 75, 47), UNDERLINE);
}

#[test]
fn dividers_sit_between_tabs_only() {
    let mut strip = bare_strip();
    strip.config.divider.width = 2.0;
    strip.config.divider.padding = 6.0;
    strip.scroll_x = 0.0;

    let buf = rendered(&strip);
    // Right edges of tabs 0 and 1; a 2px line centered on x covers x-1 and x.
    assert_eq!(px(&buf, 149, 24), DIVIDER);
    assert_eq!(px(&buf, 150, 24), DIVIDER);
    assert_eq!(px(&buf, 299, 24), DIVIDER);
    assert_eq!(px(&buf, 151, 24), 0);
    // Inset top and bottom by the divider padding.
    assert_eq!(px(&buf, 150, 5), 0);
    assert_eq!(px(&buf, 150, 6), DIVIDER);
    assert_eq!(px(&buf, 150, 42), 0);
}

#[test]
fn preview_mode_draws_nothing() {
    let mut strip = bare_strip();
    strip.config.indicator.height = 4.0;
    strip.config.underline.height = 2.0;
    strip.set_preview_mode(true);

    let buf = rendered(&strip);
    assert!(buf.iter().all(|&p| p == 0));
}

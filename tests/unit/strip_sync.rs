use std::cell::RefCell;
use std::rc::Rc;

use crate::config::StripConfig;
use crate::render::text::LabelMeasure;
use crate::strip::{
    PageAdapter, PageChangeListener, PageSource, ScrollState, TabContent, TabStrip,
};

struct FixedWidth(f32);

impl LabelMeasure for FixedWidth {
    fn label_width(&self, _text: &str, _size_px: f32) -> f32 {
        self.0
    }
}

struct ThreeTabs {
    current: usize,
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

impl PageSource for ThreeTabs {
    fn adapter(&self) -> Option<&dyn PageAdapter> {
        Some(&ThreeTabAdapter)
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn set_current_page(&mut self, position: usize) {
        self.current = position;
    }
}

/// Three 150px tabs in a 400px viewport: spans [0,150), [150,300), [300,450),
/// natural sizing, max scroll 50.
fn laid_out_strip() -> TabStrip {
    let mut config = StripConfig::default();
    config.tab_padding = 0.0;
    config.scroll_offset = 52.0;

    let source = ThreeTabs { current: 0 };
    let mut strip = TabStrip::new(config);
    strip.attach(&source);
    strip.perform_layout(&FixedWidth(150.0), 400.0, 48.0, &source);
    strip
}

#[test]
fn scrolled_updates_state_and_requests_redraw() {
    let mut strip = laid_out_strip();
    let _ = strip.take_redraw_request();

    strip.on_page_scrolled(1, 0.25, 100.0);
    assert_eq!(strip.page_state.position, 1);
    assert_eq!(strip.page_state.offset, 0.25);
    assert!(strip.take_redraw_request());
}

#[test]
fn scroll_follow_subtracts_lead_in_past_position_zero() {
    let mut strip = laid_out_strip();

    assert!(strip.scroll_to_child(2, 0.0));
    assert_eq!(strip.page_state.last_scroll_x, 248.0);
    // Content only overflows by 50px, so the applied offset clamps there.
    assert_eq!(strip.scroll_x(), 50.0);
}

#[test]
fn scroll_follow_keeps_first_tab_flush() {
    let mut strip = laid_out_strip();

    // Position 0 with a pixel offset still gets the lead-in.
    assert!(strip.scroll_to_child(0, 10.0));
    assert_eq!(strip.page_state.last_scroll_x, -42.0);
    assert_eq!(strip.scroll_x(), 0.0);

    // Position 0 at rest does not.
    assert!(strip.scroll_to_child(0, 0.0));
    assert_eq!(strip.page_state.last_scroll_x, 0.0);
}

#[test]
fn repeated_scroll_targets_issue_one_command() {
    let mut strip = laid_out_strip();

    assert!(strip.scroll_to_child(2, 0.0));
    assert!(!strip.scroll_to_child(2, 0.0));
    assert_eq!(strip.scroll_x(), 50.0);
}

#[test]
fn out_of_range_scroll_is_a_no_op() {
    let mut strip = laid_out_strip();
    assert!(!strip.scroll_to_child(9, 0.0));
    assert_eq!(strip.scroll_x(), 0.0);
}

#[test]
fn idle_transition_resnaps_to_current_page() {
    let mut strip = laid_out_strip();

    strip.on_page_scrolled(1, 0.5, 0.0);
    assert_eq!(strip.page_state.last_scroll_x, 173.0);

    strip.on_page_scroll_state_changed(ScrollState::Dragging, 1);
    assert_eq!(strip.page_state.last_scroll_x, 173.0);

    strip.on_page_scroll_state_changed(ScrollState::Idle, 1);
    assert_eq!(strip.page_state.last_scroll_x, 98.0);
}

#[test]
fn selection_moves_the_selected_styling() {
    let mut strip = laid_out_strip();
    let selected = strip.selected_text_color();
    let default = strip.text_color();

    strip.on_page_selected(2);
    assert_eq!(strip.tabs()[2].visual.text_color.to_pixel(), selected);
    assert_eq!(strip.tabs()[0].visual.text_color.to_pixel(), default);
}

#[derive(Debug, PartialEq)]
enum Heard {
    Scrolled(usize, u32, u32),
    State(ScrollState),
    Selected(usize),
}

struct Recorder(Rc<RefCell<Vec<Heard>>>);

impl PageChangeListener for Recorder {
    fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_px: f32) {
        self.0
            .borrow_mut()
            .push(Heard::Scrolled(position, offset.to_bits(), offset_px.to_bits()));
    }

    fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
        self.0.borrow_mut().push(Heard::State(state));
    }

    fn on_page_selected(&mut self, position: usize) {
        self.0.borrow_mut().push(Heard::Selected(position));
    }
}

#[test]
fn delegate_hears_every_event_verbatim() {
    let mut strip = laid_out_strip();
    let log = Rc::new(RefCell::new(Vec::new()));
    strip.set_delegate(Box::new(Recorder(log.clone())));

    strip.on_page_scrolled(1, 0.5, 200.0);
    strip.on_page_scroll_state_changed(ScrollState::Settling, 1);
    strip.on_page_selected(1);

    assert_eq!(
        *log.borrow(),
        vec![
            Heard::Scrolled(1, 0.5f32.to_bits(), 200.0f32.to_bits()),
            Heard::State(ScrollState::Settling),
            Heard::Selected(1),
        ]
    );
}

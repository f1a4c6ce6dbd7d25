//! Demo paged view: a handful of titled pages flipped with an eased slide
//! animation, reporting its motion through the standard page events.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use slidetab::{PageAdapter, PageSource, ScrollState, TabContent};

const SLIDE_DURATION: Duration = Duration::from_millis(260);

/// Quadratic ease-out: fast start, smooth deceleration.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// One page-change event, queued for the host to forward to the strip.
pub enum PageEvent {
    Scrolled { position: usize, offset: f32, offset_px: f32 },
    StateChanged(ScrollState),
    Selected(usize),
}

struct TitleAdapter {
    titles: Vec<&'static str>,
}

impl PageAdapter for TitleAdapter {
    fn page_count(&self) -> usize {
        self.titles.len()
    }

    fn tab_content(&self, position: usize) -> TabContent {
        TabContent::Text(self.titles[position].to_string())
    }
}

/// A minimal paged content view. Pages slide between integral positions; the
/// continuous position is exposed to both the renderer and, via queued
/// [`PageEvent`]s, to the strip.
pub struct PagerView {
    adapter: TitleAdapter,
    current: usize,
    width: f32,
    slide: Option<Slide>,
    events: VecDeque<PageEvent>,
}

struct Slide {
    from: f32,
    to: usize,
    started: Instant,
}

impl PagerView {
    pub fn new(titles: Vec<&'static str>) -> Self {
        Self {
            adapter: TitleAdapter { titles },
            current: 0,
            width: 0.0,
            slide: None,
            events: VecDeque::new(),
        }
    }

    /// Page width in pixels, used to report pixel offsets in scroll events.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn page_title(&self, position: usize) -> &str {
        self.adapter.titles.get(position).copied().unwrap_or("")
    }

    /// Jumps without animating or emitting events, for session restore.
    pub fn jump_to(&mut self, position: usize) {
        self.current = position.min(self.adapter.titles.len().saturating_sub(1));
        self.slide = None;
    }

    /// Continuous page position; fractional while a slide is running.
    pub fn scroll_position(&self, now: Instant) -> f32 {
        match &self.slide {
            Some(slide) => {
                let elapsed = now.saturating_duration_since(slide.started);
                let t = (elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32()).min(1.0);
                slide.from + (slide.to as f32 - slide.from) * ease_out(t)
            }
            None => self.current as f32,
        }
    }

    /// Advances the slide animation, queuing scroll events along the way.
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(slide) = &self.slide else {
            return false;
        };

        let elapsed = now.saturating_duration_since(slide.started);
        let t = (elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32()).min(1.0);
        if t >= 1.0 {
            let landed = slide.to;
            self.slide = None;
            self.events.push_back(PageEvent::Scrolled {
                position: landed,
                offset: 0.0,
                offset_px: 0.0,
            });
            self.events.push_back(PageEvent::StateChanged(ScrollState::Idle));
            return false;
        }

        let pos = slide.from + (slide.to as f32 - slide.from) * ease_out(t);
        let position = pos.floor().max(0.0) as usize;
        let offset = (pos - position as f32).clamp(0.0, 0.999_9);
        self.events.push_back(PageEvent::Scrolled {
            position,
            offset,
            offset_px: offset * self.width,
        });
        true
    }

    pub fn next_event(&mut self) -> Option<PageEvent> {
        self.events.pop_front()
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }
}

impl PageSource for PagerView {
    fn adapter(&self) -> Option<&dyn PageAdapter> {
        Some(&self.adapter)
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn set_current_page(&mut self, position: usize) {
        let target = position.min(self.adapter.titles.len().saturating_sub(1));
        if target == self.current && self.slide.is_none() {
            return;
        }

        let now = Instant::now();
        let from = self.scroll_position(now);
        self.current = target;
        self.slide = Some(Slide { from, to: target, started: now });
        self.events.push_back(PageEvent::Selected(target));
        self.events.push_back(PageEvent::StateChanged(ScrollState::Settling));
    }
}

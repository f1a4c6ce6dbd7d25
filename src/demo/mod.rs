//! Winit host for the demo: one window, a softbuffer surface, the tab strip
//! across the top and the sliding pager content underneath.

mod pager;

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, OwnedDisplayHandle};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use slidetab::config::{load_config, load_session, save_session};
use slidetab::render::fill_rect;
use slidetab::render::text::LabelMeasure;
use slidetab::{Color, PageSource, RenderTarget, TabStrip, TextPainter};

use self::pager::{PageEvent, PagerView};

const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);
const PAGE_TITLES: [&str; 8] =
    ["Home", "Trending", "Music", "Movies", "Books", "Sports", "News", "Tech"];
const PAGE_COLORS: [u32; 8] = [
    0x2B3A42, 0x3F5866, 0x42584B, 0x5C4B51, 0x4B3F72, 0x6B4226, 0x2F4858, 0x553A41,
];

struct DemoWindow {
    window: Arc<Window>,
    surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    painter: TextPainter,
    strip: TabStrip,
    pager: PagerView,
    mouse_pos: (f64, f64),
    laid_out_size: (u32, u32),
}

struct App {
    context: Option<Context<OwnedDisplayHandle>>,
    win: Option<DemoWindow>,
}

impl App {
    fn new() -> Self {
        App { context: None, win: None }
    }

    /// Pops queued pager events and routes each through the strip.
    fn forward_page_events(win: &mut DemoWindow) {
        while let Some(event) = win.pager.next_event() {
            match event {
                PageEvent::Scrolled { position, offset, offset_px } => {
                    win.strip.on_page_scrolled(position, offset, offset_px);
                }
                PageEvent::StateChanged(state) => {
                    win.strip
                        .on_page_scroll_state_changed(state, win.pager.current_page());
                }
                PageEvent::Selected(position) => {
                    win.strip.on_page_selected(position);
                }
            }
        }
    }
}

impl DemoWindow {
    fn flip_page(&mut self, delta: isize) {
        let current = self.pager.current_page() as isize;
        let target = (current + delta).max(0) as usize;
        self.pager.set_current_page(target);
    }

    fn render_frame(&mut self) {
        let DemoWindow { window, surface, painter, strip, pager, laid_out_size, .. } = self;

        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        let width = size.width as f32;
        pager.set_width(width);
        if strip.take_layout_request() || *laid_out_size != (size.width, size.height) {
            strip.perform_layout(&*painter, width, strip.strip_height(), &*pager);
            *laid_out_size = (size.width, size.height);
        }

        if surface.resize(w, h).is_err() {
            return;
        }
        let Ok(mut buffer) = surface.buffer_mut() else {
            return;
        };
        buffer.fill(Color::DEFAULT_BG.to_pixel());

        let mut target = RenderTarget::new(&mut buffer, size.width as usize, size.height as usize);
        draw_pages(&mut target, painter, pager, strip.strip_height());
        strip.draw(&mut target, painter);

        if let Err(err) = buffer.present() {
            eprintln!("Failed to present frame: {err}");
        }
    }
}

/// Draws the page panes below the strip, slid by the continuous position.
fn draw_pages(
    target: &mut RenderTarget<'_>,
    painter: &mut TextPainter,
    pager: &PagerView,
    top: f32,
) {
    let width = target.width as f32;
    let pane_height = target.height as f32 - top;
    if pane_height <= 0.0 {
        return;
    }

    let pos = pager.scroll_position(Instant::now());
    for (i, title) in PAGE_TITLES.iter().enumerate() {
        let left = (i as f32 - pos) * width;
        if left + width <= 0.0 || left >= width {
            continue;
        }

        let color = Color::from_hex(PAGE_COLORS[i % PAGE_COLORS.len()]);
        fill_rect(target, left, top, width, pane_height, color, 255);

        let size = 28.0;
        let label_width = painter.label_width(title, size);
        let text_x = left + (width - label_width) / 2.0;
        let text_y = top + (pane_height - painter.line_height(size)) / 2.0;
        painter.draw_text(target, text_x, text_y, title, size, Color::DEFAULT_FG);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.win.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("Failed to create rendering context: {err}");
                event_loop.exit();
                return;
            }
        };

        let attrs = Window::default_attributes()
            .with_title("slidetab demo")
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 480.0));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(err) => {
                eprintln!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let surface = match Surface::new(&context, window.clone()) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("Failed to create surface: {err}");
                event_loop.exit();
                return;
            }
        };

        let painter = match TextPainter::from_system_font() {
            Ok(p) => p,
            Err(err) => {
                eprintln!("Failed to load a UI font: {err}");
                event_loop.exit();
                return;
            }
        };

        let config = load_config().to_physical(window.scale_factor());
        let mut strip = TabStrip::new(config);
        let mut pager = PagerView::new(PAGE_TITLES.to_vec());
        strip.attach(&pager);
        if let Some(saved) = load_session() {
            pager.jump_to(saved.current_position);
            strip.restore_state(saved);
        }

        window.request_redraw();
        self.context = Some(context);
        self.win = Some(DemoWindow {
            window,
            surface,
            painter,
            strip,
            pager,
            mouse_pos: (0.0, 0.0),
            laid_out_size: (0, 0),
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.win.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                save_session(&win.strip.save_state());
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                win.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.mouse_pos = (position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = win.mouse_pos;
                let DemoWindow { strip, pager, .. } = win;
                if strip.handle_click(x as f32, y as f32, pager) {
                    Self::forward_page_events(win);
                    win.window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match &event.logical_key {
                        Key::Named(NamedKey::ArrowLeft) => win.flip_page(-1),
                        Key::Named(NamedKey::ArrowRight) => win.flip_page(1),
                        Key::Named(NamedKey::Escape) => {
                            save_session(&win.strip.save_state());
                            event_loop.exit();
                            return;
                        }
                        _ => {}
                    }
                    Self::forward_page_events(win);
                    win.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                win.render_frame();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(win) = self.win.as_mut() else {
            return;
        };

        let now = Instant::now();
        let animating = win.pager.tick(now);
        Self::forward_page_events(win);
        if animating || win.strip.take_redraw_request() {
            win.window.request_redraw();
        }

        if animating {
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + ANIMATION_FRAME_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

pub fn run() {
    let event_loop = match EventLoop::new() {
        Ok(loop_) => loop_,
        Err(err) => {
            eprintln!("Failed to create event loop: {err}");
            return;
        }
    };
    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        eprintln!("Application error: {err}");
    }
}

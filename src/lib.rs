//! A horizontally scrollable tab strip that keeps its selection indicator,
//! tab styling, and scroll position synchronized with a paged content view.
//!
//! The widget draws into a raw `0xRRGGBB` pixel buffer ([`render::RenderTarget`])
//! and is driven entirely by host callbacks: layout passes, draw requests, and
//! the three page-change events of the attached [`strip::PageSource`]. All
//! mutation is expected to happen on the host's UI thread; the widget holds no
//! locks and spawns no work of its own.

pub mod config;
pub mod core;
pub mod render;
pub mod strip;

pub use config::{StripConfig, load_config, save_config};
pub use crate::core::Color;
pub use render::{RenderTarget, TextPainter};
pub use strip::{
    PageAdapter, PageChangeListener, PageSource, SavedState, ScrollState, TabContent, TabStrip,
};

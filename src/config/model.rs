use serde::{Deserialize, Serialize};

use crate::render::sanitize_scale;

/// Visual configuration of the tab strip.
///
/// Colors are stored as `0xRRGGBB` integers; dimensions are logical pixels
/// until [`StripConfig::to_physical`] applies the display scale once at
/// construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub indicator: IndicatorConfig,
    pub underline: UnderlineConfig,
    pub divider: DividerConfig,
    pub text: TextConfig,
    /// Horizontal padding added to each side of a tab's intrinsic width.
    pub tab_padding: f32,
    /// Lead-in subtracted from the scroll-follow target so the active tab is
    /// not flush against the strip's left edge.
    pub scroll_offset: f32,
    /// Prefer stretching tabs across the full available width.
    pub should_expand: bool,
    /// Overall strip height.
    pub height: f32,
    /// Per-tab background color.
    pub background: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub color: u32,
    pub height: f32,
    /// Indicator width in fixed-width mode; ignored otherwise.
    pub width: f32,
    /// Left/right inset when not in fixed-width mode.
    pub padding: f32,
    /// Center a constant-width indicator instead of spanning the tab.
    pub fixed_width: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            color: 0xFF811C,
            height: 4.0,
            width: 0.0,
            padding: 10.0,
            fixed_width: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderlineConfig {
    pub color: u32,
    pub height: f32,
}

impl Default for UnderlineConfig {
    fn default() -> Self {
        Self { color: 0xCECECE, height: 2.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerConfig {
    pub color: u32,
    pub width: f32,
    /// Top/bottom inset of the divider line.
    pub padding: f32,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self { color: 0xFF811C, width: 1.0, padding: 6.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub size: f32,
    pub color: u32,
    pub selected_size: f32,
    pub selected_color: u32,
    pub all_caps: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: 0x999999,
            selected_size: 16.0,
            selected_color: 0xFFFFFF,
            all_caps: true,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            indicator: IndicatorConfig::default(),
            underline: UnderlineConfig::default(),
            divider: DividerConfig::default(),
            text: TextConfig::default(),
            tab_padding: 22.0,
            scroll_offset: 52.0,
            should_expand: false,
            height: 48.0,
            background: 0x1E2127,
        }
    }
}

impl StripConfig {
    /// Scales every dimension by the display factor, leaving colors and flags
    /// untouched. Applied once when the widget is constructed.
    pub fn to_physical(&self, scale_factor: f64) -> StripConfig {
        let s = sanitize_scale(scale_factor) as f32;
        let mut out = self.clone();
        out.indicator.height *= s;
        out.indicator.width *= s;
        out.indicator.padding *= s;
        out.underline.height *= s;
        out.divider.width *= s;
        out.divider.padding *= s;
        out.text.size *= s;
        out.text.selected_size *= s;
        out.tab_padding *= s;
        out.scroll_offset *= s;
        out.height *= s;
        out
    }
}

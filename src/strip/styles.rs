use crate::core::Color;

use super::TabStrip;
use super::state::{TabContent, TabVisual};

impl TabStrip {
    /// Re-applies background, text size, and text color to every tab based
    /// on which one is currently selected.
    ///
    /// Pure function of the selected position and the config: running it
    /// twice with unchanged state produces identical visuals, and it touches
    /// nothing but the per-tab `TabVisual`.
    pub fn refresh_styles(&mut self) {
        let selected = self.selected_position;
        let background = Color::from_hex(self.config.background);
        let text = &self.config.text;

        for tab in &mut self.tabs {
            let is_selected = tab.position == selected;
            let (size, color) = if is_selected {
                (text.selected_size, Color::from_hex(text.selected_color))
            } else {
                (text.size, Color::from_hex(text.color))
            };

            let display_label = match &tab.content {
                TabContent::Text(label) => {
                    if text.all_caps {
                        label.to_uppercase()
                    } else {
                        label.clone()
                    }
                }
                TabContent::Icon(_) => String::new(),
            };

            tab.visual = TabVisual {
                display_label,
                text_size: size,
                text_color: color,
                background,
            };
        }
    }
}

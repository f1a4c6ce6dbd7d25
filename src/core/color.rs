#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default strip background.
    pub const DEFAULT_BG: Color = Color::from_hex(0x1E2127);

    /// Default page-content foreground used by the demo host.
    pub const DEFAULT_FG: Color = Color::from_hex(0xD2DBEB);

    /// Unpacks a `0xRRGGBB` integer (the form the configuration stores).
    pub const fn from_hex(rgb: u32) -> Color {
        Color {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

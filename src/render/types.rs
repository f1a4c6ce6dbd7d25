/// A borrowed frame to draw into: `0xRRGGBB` pixels in row-major order.
pub struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}

impl<'a> RenderTarget<'a> {
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        debug_assert!(buffer.len() >= width * height);
        Self { buffer, width, height }
    }
}

/// A rasterized glyph plus the placement metrics fontdue reported for it.
pub struct GlyphBitmap {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub left: i32,
    pub top: i32,
}

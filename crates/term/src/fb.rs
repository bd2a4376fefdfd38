//! Framebuffer and style types for terminal rendering.

use crate::types::ColorTag;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<ColorTag> for Rgb {
    fn from(tag: ColorTag) -> Self {
        let (r, g, b) = tag.rgb();
        Self { r, g, b }
    }
}

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl GlyphStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(255, 255, 255))
    }
}

/// A single terminal character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: GlyphStyle::default(),
        }
    }
}

/// 2D framebuffer of styled glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: GlyphStyle) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.put_char(cx as u16, y, ch, style);
        }
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: GlyphStyle) {
        self.put_str(x, y, &value.to_string(), style);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: GlyphStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Collect row `y` as a string (for tests and debugging)
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_bounds_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'X', GlyphStyle::default());
        fb.put_char(0, 2, 'X', GlyphStyle::default());
        assert!(fb.row_text(0).chars().all(|c| c == ' '));
        assert!(fb.row_text(1).chars().all(|c| c == ' '));
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "SCORE", GlyphStyle::default());
        assert_eq!(fb.row_text(0), " SCO");
    }

    #[test]
    fn put_u32_writes_decimal() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_u32(0, 0, 1300, GlyphStyle::default());
        assert_eq!(fb.row_text(0), "1300  ");
    }

    #[test]
    fn color_tag_converts_to_rgb() {
        assert_eq!(Rgb::from(ColorTag::Orange), Rgb::new(255, 165, 0));
    }
}

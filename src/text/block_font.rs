//! Fixed-grid placeholder font

use image::{GrayImage, Luma};
use unicode_width::UnicodeWidthChar;

use super::Font;

/// A monospace font that draws every visible character as a solid block.
///
/// Advance widths come from `unicode-width` (wide CJK characters take two
/// cells), so layout math behaves like a real font with predictable numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFont {
    cell_width: i32,
    height: i32,
    ascent: i32,
}

impl BlockFont {
    pub const fn new(cell_width: i32, height: i32, ascent: i32) -> Self {
        debug_assert!(ascent <= height);
        Self {
            cell_width,
            height,
            ascent,
        }
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    fn cells(ch: char) -> i32 {
        ch.width().unwrap_or(0) as i32
    }
}

impl Font for BlockFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn width(&self, text: &str) -> i32 {
        text.chars().map(Self::cells).sum::<i32>() * self.cell_width
    }

    fn rasterize(&self, text: &str) -> GrayImage {
        let width = self.width(text).max(0) as u32;
        let mut mask = GrayImage::new(width, self.height.max(0) as u32);
        // glyph box spans cap height down to the baseline
        let top = (self.ascent * 3 / 10).max(0) as u32;
        let bottom = self.ascent.max(0) as u32;
        let mut x = 0u32;
        for ch in text.chars() {
            let advance = (Self::cells(ch) * self.cell_width) as u32;
            if !ch.is_whitespace() && advance > 2 {
                for gy in top..bottom.min(mask.height()) {
                    for gx in (x + 1)..(x + advance - 1) {
                        mask.put_pixel(gx, gy, Luma([255]));
                    }
                }
            }
            x += advance;
        }
        mask
    }
}

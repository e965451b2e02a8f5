//! Surface that records draw calls instead of rasterizing them

use image::GrayImage;

use super::{Color, Pixmap, Surface};
use crate::geometry::{Rect, Size};
use crate::text::Font;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    Mask {
        rect: Rect,
        color: Color,
    },
    Pixmap {
        rect: Rect,
        key: u64,
    },
    Text {
        x: i32,
        baseline: i32,
        text: String,
        color: Color,
    },
}

/// Surface that keeps an ordered log of draw calls.
///
/// Used to assert *what* a painter decided to draw without comparing pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any drawn text contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Find the first text op containing `needle`
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(needle)))
    }

    /// Rectangles of all pixmaps drawn, in order
    pub fn pixmaps(&self) -> Vec<(Rect, u64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Pixmap { rect, key } => Some((*rect, *key)),
                _ => None,
            })
            .collect()
    }

    /// Masks (icons, glyph runs, ripples) drawn with `color`
    pub fn masks_with_color(&self, color: Color) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Mask { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillEllipse { rect, color });
    }

    fn draw_mask(&mut self, x: i32, y: i32, mask: &GrayImage, color: Color) {
        self.ops.push(DrawOp::Mask {
            rect: Rect::new(x, y, mask.width() as i32, mask.height() as i32),
            color,
        });
    }

    fn draw_pixmap(&mut self, x: i32, y: i32, pixmap: &Pixmap) {
        self.ops.push(DrawOp::Pixmap {
            rect: Rect::new(x, y, pixmap.width(), pixmap.height()),
            key: pixmap.cache_key(),
        });
    }

    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, _font: &dyn Font, color: Color) {
        self.ops.push(DrawOp::Text {
            x,
            baseline,
            text: text.to_string(),
            color,
        });
    }
}

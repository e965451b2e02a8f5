//! Text typing indicator

use crate::geometry::Rect;
use crate::surface::{Color, Surface};
use crate::text::Font;
use crate::traits::SendActionPainter;

/// Milliseconds per animation step of the trailing dots
const DOT_STEP_MS: i64 = 400;

/// Animated `"label..."` indicator, e.g. "Alice is typing".
pub struct TypingIndicator<'a> {
    pub label: String,
    pub font: &'a dyn Font,
}

impl<'a> TypingIndicator<'a> {
    pub fn new(label: impl Into<String>, font: &'a dyn Font) -> Self {
        Self {
            label: label.into(),
            font,
        }
    }

    /// Label plus zero to three dots for `frame_time`
    pub fn frame_text(&self, frame_time: i64) -> String {
        let dots = (frame_time / DOT_STEP_MS).rem_euclid(4) as usize;
        format!("{}{}", self.label, ".".repeat(dots))
    }
}

impl SendActionPainter for TypingIndicator<'_> {
    fn paint(&self, surface: &mut dyn Surface, rect: Rect, color: Color, frame_time: i64) -> bool {
        if self.label.is_empty() || rect.width <= 0 {
            return false;
        }
        let text = self.font.elided(&self.frame_text(frame_time), rect.width);
        surface.draw_text_left(rect.x, rect.y, &text, self.font, color);
        true
    }
}

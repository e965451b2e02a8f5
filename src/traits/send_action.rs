//! Typing indicator trait.

use crate::geometry::Rect;
use crate::surface::{Color, Surface};

/// Paints a peer's current send action ("typing", "recording a voice
/// message") into the text line of a row.
pub trait SendActionPainter {
    /// Paint into `rect` using `color` at animation time `frame_time` (ms).
    ///
    /// Returns true if anything was drawn. When nothing is drawn the row
    /// falls back to its draft or message preview.
    fn paint(&self, surface: &mut dyn Surface, rect: Rect, color: Color, frame_time: i64) -> bool;
}

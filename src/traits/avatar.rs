//! Userpic painter traits.

use crate::surface::Surface;

/// Paints a static userpic.
pub trait AvatarPainter {
    /// Paint a `size` x `size` userpic with its top-left corner at (x, y)
    fn paint(&self, surface: &mut dyn Surface, x: i32, y: i32, size: i32);
}

/// Paints the current frame of an animated userpic.
pub trait VideoUserpic {
    /// Returns false when no frame is ready; the caller then paints the
    /// static userpic instead.
    fn paint_frame(&self, surface: &mut dyn Surface, x: i32, y: i32, size: i32, paused: bool)
        -> bool;
}

//! Press feedback circle

use crate::geometry::Rect;
use crate::models::Ripple;
use crate::surface::raster::coverage_mask;
use crate::surface::{Color, Surface};

/// Paint `ripple` clipped to the `width` x `height` row box
pub fn paint_ripple(surface: &mut dyn Surface, ripple: &Ripple, width: i32, height: i32, color: Color) {
    if ripple.radius <= 0 || ripple.opacity == 0 {
        return;
    }
    let r = ripple.radius;
    let bounds = Rect::new(ripple.center.x - r, ripple.center.y - r, 2 * r, 2 * r);
    let clip = bounds.intersect(&Rect::new(0, 0, width, height));
    if clip.is_empty() {
        return;
    }
    let cx = (ripple.center.x - clip.x) as f32;
    let cy = (ripple.center.y - clip.y) as f32;
    let radius = r as f32;
    let mask = coverage_mask(clip.width as u32, clip.height as u32, |x, y| {
        (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius
    });
    surface.draw_mask(clip.x, clip.y, &mask, color.with_alpha_factor(ripple.opacity));
}

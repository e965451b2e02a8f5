//! Raster helpers: anti-aliased masks, colorizing and source-over blending

use image::{GrayImage, Luma, Rgba, RgbaImage};

use super::Color;
use crate::geometry::Rect;

/// Supersampling grid per pixel axis for anti-aliased coverage
const SAMPLES: u32 = 4;

/// Build an anti-aliased coverage mask by sampling `inside` on a sub-pixel grid.
///
/// `inside` receives coordinates in mask pixels (fractional).
pub fn coverage_mask<F>(width: u32, height: u32, inside: F) -> GrayImage
where
    F: Fn(f32, f32) -> bool,
{
    let total = SAMPLES * SAMPLES;
    GrayImage::from_fn(width, height, |px, py| {
        let mut hits = 0;
        for sy in 0..SAMPLES {
            for sx in 0..SAMPLES {
                let x = px as f32 + (sx as f32 + 0.5) / SAMPLES as f32;
                let y = py as f32 + (sy as f32 + 0.5) / SAMPLES as f32;
                if inside(x, y) {
                    hits += 1;
                }
            }
        }
        Luma([((hits * 255 + total / 2) / total) as u8])
    })
}

/// Anti-aliased ellipse inscribed in a `width` x `height` box
pub fn ellipse_mask(width: u32, height: u32) -> GrayImage {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    coverage_mask(width, height, |x, y| {
        let dx = (x - rx) / rx;
        let dy = (y - ry) / ry;
        dx * dx + dy * dy <= 1.0
    })
}

/// Anti-aliased circle of diameter `size`
pub fn circle_mask(size: u32) -> GrayImage {
    ellipse_mask(size, size)
}

/// Colorize the `source` region of an alpha mask.
///
/// The result has `color`'s channels everywhere and alpha equal to
/// `mask * color.a / 255`. Regions outside the mask stay transparent.
pub fn colorize(mask: &GrayImage, color: Color, source: Rect) -> RgbaImage {
    let width = source.width.max(0) as u32;
    let height = source.height.max(0) as u32;
    RgbaImage::from_fn(width, height, |x, y| {
        let mx = source.x + x as i32;
        let my = source.y + y as i32;
        let coverage = if mx >= 0
            && my >= 0
            && (mx as u32) < mask.width()
            && (my as u32) < mask.height()
        {
            mask.get_pixel(mx as u32, my as u32).0[0]
        } else {
            0
        };
        color.with_alpha_factor(coverage).to_rgba()
    })
}

/// Source-over blend of `src` into `dst`, with the source alpha scaled by `coverage`.
pub fn blend(dst: &mut Rgba<u8>, src: Color, coverage: u8) {
    let sa = src.a as u32 * coverage as u32 / 255;
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = Rgba([src.r, src.g, src.b, 255]);
        return;
    }
    let [dr, dg, db, da] = dst.0;
    let da = da as u32;
    // out_a scaled by 255
    let inv = 255 - sa;
    let out_a = sa * 255 + da * inv;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    let mix = |s: u8, d: u8| -> u8 {
        ((s as u32 * sa * 255 + d as u32 * da * inv + out_a / 2) / out_a) as u8
    };
    *dst = Rgba([
        mix(src.r, dr),
        mix(src.g, dg),
        mix(src.b, db),
        ((out_a + 127) / 255) as u8,
    ]);
}

/// Distance from point (px, py) to the segment (ax, ay)-(bx, by)
pub fn segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (vx, vy) = (bx - ax, by - ay);
    let len2 = vx * vx + vy * vy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * vx + (py - ay) * vy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * vx, ay + t * vy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Even-odd point-in-polygon test
pub fn polygon_contains(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

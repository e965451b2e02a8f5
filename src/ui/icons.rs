//! Procedural row icons
//!
//! Icons are anti-aliased alpha masks built once per palette and tinted
//! with a state-keyed color at paint time.

use std::f32::consts::PI;
use std::rc::Rc;

use image::GrayImage;

use crate::geometry::Rect;
use crate::surface::raster::{coverage_mask, polygon_contains, segment_distance};
use crate::surface::Surface;
use crate::ui::theme::{Palette, RowState, StateColors};

/// Side of the square icon grid
const ICON_SIZE: u32 = 16;

/// An alpha mask plus the colors it is painted with in each row state
#[derive(Debug, Clone)]
pub struct Icon {
    mask: Rc<GrayImage>,
    colors: StateColors,
}

impl Icon {
    pub fn new(mask: GrayImage, colors: StateColors) -> Self {
        Self {
            mask: Rc::new(mask),
            colors,
        }
    }

    pub fn width(&self) -> i32 {
        self.mask.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.mask.height() as i32
    }

    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    pub fn colors(&self) -> &StateColors {
        &self.colors
    }

    pub fn paint(&self, surface: &mut dyn Surface, x: i32, y: i32, state: RowState) {
        surface.draw_mask(x, y, &self.mask, self.colors.color(state));
    }

    /// Paint centered inside `rect`
    pub fn paint_in_center(&self, surface: &mut dyn Surface, rect: Rect, state: RowState) {
        let x = rect.x + (rect.width - self.width()) / 2;
        let y = rect.y + (rect.height - self.height()) / 2;
        self.paint(surface, x, y, state);
    }
}

/// Every icon the row painters use
#[derive(Debug, Clone)]
pub struct Icons {
    pub pinned: Icon,
    pub sending: Icon,
    pub sent: Icon,
    pub received: Icon,
    pub chat: Icon,
    pub channel: Icon,
    pub bot: Icon,
    pub mention: Icon,
    pub reaction: Icon,
    pub verified_bg: Icon,
    pub verified_check: Icon,
    pub premium: Icon,
}

impl Icons {
    pub fn build(palette: &Palette) -> Self {
        Self {
            pinned: Icon::new(pin_mask(), palette.icon_fg),
            sending: Icon::new(clock_mask(), palette.sending_fg),
            sent: Icon::new(check_mask(ICON_SIZE, 0.0), palette.send_state_fg),
            received: Icon::new(double_check_mask(), palette.send_state_fg),
            chat: Icon::new(group_mask(), palette.name_fg),
            channel: Icon::new(megaphone_mask(), palette.name_fg),
            bot: Icon::new(bot_mask(), palette.name_fg),
            mention: Icon::new(at_mask(), palette.unread_fg),
            reaction: Icon::new(heart_mask(12), palette.unread_fg),
            verified_bg: Icon::new(rosette_mask(), palette.verified_bg),
            verified_check: Icon::new(check_mask(ICON_SIZE, 0.0), palette.verified_check),
            premium: Icon::new(star_mask(ICON_SIZE), palette.premium_fg),
        }
    }
}

// ============================================================================
// Shapes
// ============================================================================

fn stroke(segments: &[((f32, f32), (f32, f32))], half_width: f32, x: f32, y: f32) -> bool {
    segments
        .iter()
        .any(|&((ax, ay), (bx, by))| segment_distance(x, y, ax, ay, bx, by) <= half_width)
}

fn ring(cx: f32, cy: f32, radius: f32, half_width: f32, x: f32, y: f32) -> bool {
    let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
    (d - radius).abs() <= half_width
}

fn disc(cx: f32, cy: f32, radius: f32, x: f32, y: f32) -> bool {
    (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius
}

fn pin_mask() -> GrayImage {
    coverage_mask(ICON_SIZE, ICON_SIZE, |x, y| {
        disc(9.5, 6.5, 4.0, x, y) || stroke(&[((8.0, 8.0), (3.0, 13.0))], 0.9, x, y)
    })
}

fn clock_mask() -> GrayImage {
    coverage_mask(ICON_SIZE, ICON_SIZE, |x, y| {
        ring(8.0, 8.0, 6.0, 0.8, x, y)
            || stroke(&[((8.0, 8.0), (8.0, 4.5)), ((8.0, 8.0), (10.5, 8.0))], 0.8, x, y)
    })
}

/// Check mark shifted right by `dx`
fn check_mask(width: u32, dx: f32) -> GrayImage {
    coverage_mask(width, ICON_SIZE, move |x, y| {
        stroke(
            &[
                ((3.0 + dx, 8.5), (6.5 + dx, 12.0)),
                ((6.5 + dx, 12.0), (13.0 + dx, 4.5)),
            ],
            0.9,
            x,
            y,
        )
    })
}

fn double_check_mask() -> GrayImage {
    let first = check_mask(20, 0.0);
    let second = check_mask(20, 4.0);
    GrayImage::from_fn(20, ICON_SIZE, |x, y| {
        let a = first.get_pixel(x, y).0[0];
        let b = second.get_pixel(x, y).0[0];
        image::Luma([a.max(b)])
    })
}

fn group_mask() -> GrayImage {
    coverage_mask(ICON_SIZE, ICON_SIZE, |x, y| {
        let heads = disc(5.5, 5.5, 2.5, x, y) || disc(11.0, 5.0, 2.5, x, y);
        let bodies = (y >= 9.5 && y <= 14.0)
            && (disc(5.5, 14.0, 4.5, x, y) || disc(11.0, 13.5, 4.0, x, y));
        heads || bodies
    })
}

fn megaphone_mask() -> GrayImage {
    let body = [
        (2.0, 6.0),
        (6.0, 6.0),
        (13.0, 2.5),
        (13.0, 13.5),
        (6.0, 10.0),
        (2.0, 10.0),
    ];
    coverage_mask(ICON_SIZE, ICON_SIZE, move |x, y| {
        polygon_contains(&body, x, y) || stroke(&[((4.5, 10.0), (5.5, 14.0))], 1.0, x, y)
    })
}

fn bot_mask() -> GrayImage {
    coverage_mask(ICON_SIZE, ICON_SIZE, |x, y| {
        let head = (3.0..=13.0).contains(&x) && (5.0..=13.0).contains(&y);
        let eyes = disc(6.0, 8.5, 1.2, x, y) || disc(10.0, 8.5, 1.2, x, y);
        let antenna = stroke(&[((8.0, 5.0), (8.0, 2.0))], 0.7, x, y) || disc(8.0, 2.0, 1.2, x, y);
        (head && !eyes) || antenna
    })
}

fn at_mask() -> GrayImage {
    coverage_mask(12, 12, |x, y| {
        let outer = ring(6.0, 6.0, 4.8, 0.7, x, y) && !(x > 6.5 && y > 6.5 && y < 9.5);
        let inner = ring(6.0, 6.0, 2.0, 0.7, x, y);
        let tail = stroke(&[((8.0, 4.0), (8.0, 7.5)), ((8.0, 7.5), (10.0, 8.5))], 0.7, x, y);
        outer || inner || tail
    })
}

fn heart_mask(size: u32) -> GrayImage {
    let scale = size as f32 / 2.6;
    let center = size as f32 / 2.0;
    coverage_mask(size, size, move |x, y| {
        let hx = (x - center) / scale;
        let hy = (center - y) / scale + 0.15;
        (hx * hx + hy * hy - 1.0).powi(3) - hx * hx * hy.powi(3) <= 0.0
    })
}

fn rosette_mask() -> GrayImage {
    coverage_mask(ICON_SIZE, ICON_SIZE, |x, y| {
        let (dx, dy) = (x - 8.0, y - 8.0);
        let angle = dy.atan2(dx);
        let radius = 6.6 + 0.8 * (angle * 8.0).cos();
        dx * dx + dy * dy <= radius * radius
    })
}

fn star_mask(size: u32) -> GrayImage {
    let c = size as f32 / 2.0;
    let outer = c - 0.5;
    let inner = outer * 0.45;
    let points: Vec<(f32, f32)> = (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = -PI / 2.0 + i as f32 * PI / 5.0;
            (c + r * a.cos(), c + r * a.sin())
        })
        .collect();
    coverage_mask(size, size, move |x, y| polygon_contains(&points, x, y))
}

//! Raster surface backed by an `image::RgbaImage`

use image::{GrayImage, RgbaImage};

use super::raster::{blend, ellipse_mask};
use super::{Color, Pixmap, Surface};
use crate::geometry::{Rect, Size};
use crate::text::Font;

/// An in-memory RGBA drawing surface.
///
/// All operations composite source-over and clip to the image bounds.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a canvas filled with `color`
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color.to_rgba()),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.image.width() as i32, self.image.height() as i32)
    }
}

impl Surface for Canvas {
    fn size(&self) -> Size {
        self.bounds().size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let clipped = rect.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                blend(self.image.get_pixel_mut(x as u32, y as u32), color, 255);
            }
        }
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let mask = ellipse_mask(rect.width as u32, rect.height as u32);
        self.draw_mask(rect.x, rect.y, &mask, color);
    }

    fn draw_mask(&mut self, x: i32, y: i32, mask: &GrayImage, color: Color) {
        let target = Rect::new(x, y, mask.width() as i32, mask.height() as i32);
        let clipped = target.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        for py in clipped.top()..clipped.bottom() {
            for px in clipped.left()..clipped.right() {
                let coverage = mask.get_pixel((px - x) as u32, (py - y) as u32).0[0];
                blend(self.image.get_pixel_mut(px as u32, py as u32), color, coverage);
            }
        }
    }

    fn draw_pixmap(&mut self, x: i32, y: i32, pixmap: &Pixmap) {
        let source = pixmap.image();
        let target = Rect::new(x, y, pixmap.width(), pixmap.height());
        let clipped = target.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        for py in clipped.top()..clipped.bottom() {
            for px in clipped.left()..clipped.right() {
                let src: Color = (*source.get_pixel((px - x) as u32, (py - y) as u32)).into();
                blend(self.image.get_pixel_mut(px as u32, py as u32), src, 255);
            }
        }
    }

    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, font: &dyn Font, color: Color) {
        if text.is_empty() || font.width(text) <= 0 {
            return;
        }
        let mask = font.rasterize(text);
        self.draw_mask(x, baseline - font.ascent(), &mask, color);
    }
}

//! Drawing surfaces
//!
//! Every painter in the crate draws through the [`Surface`] trait. The crate
//! ships a raster implementation ([`Canvas`]), an offsetting wrapper used to
//! place rows inside a list ([`Translated`]), a [`RecordingSurface`] that logs
//! operations for tests, and a terminal blitter for previews.

mod canvas;
mod color;
pub mod raster;
mod recording;
pub mod terminal;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{GrayImage, RgbaImage};

use crate::geometry::{Rect, Size};
use crate::text::Font;

pub use canvas::Canvas;
pub use color::Color;
pub use recording::{DrawOp, RecordingSurface};

/// Target of all paint operations.
///
/// Coordinates are surface pixels. Implementations clip silently; drawing
/// outside the surface is never an error.
pub trait Surface {
    fn size(&self) -> Size;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Anti-aliased ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Colorize an alpha mask with `color` and composite it at (x, y)
    fn draw_mask(&mut self, x: i32, y: i32, mask: &GrayImage, color: Color);

    fn draw_pixmap(&mut self, x: i32, y: i32, pixmap: &Pixmap);

    /// Draw a single line of text with its baseline at `baseline`
    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, font: &dyn Font, color: Color);

    /// Draw a single line of text with its top edge at `top`
    fn draw_text_left(&mut self, x: i32, top: i32, text: &str, font: &dyn Font, color: Color) {
        self.draw_text(x, top + font.ascent(), text, font, color);
    }
}

static NEXT_PIXMAP_KEY: AtomicU64 = AtomicU64::new(1);

/// An immutable, cheaply clonable RGBA image.
///
/// Each pixmap built with [`Pixmap::new`] gets a fresh cache key, so two
/// pixmaps with the same pixels are still distinguishable. Clones share the
/// key.
#[derive(Debug, Clone)]
pub struct Pixmap {
    image: Rc<RgbaImage>,
    key: u64,
}

impl Pixmap {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Rc::new(image),
            key: NEXT_PIXMAP_KEY.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    /// Identity of this pixmap's pixel data
    pub fn cache_key(&self) -> u64 {
        self.key
    }
}

/// A surface view that shifts every operation by a fixed offset.
///
/// Row painters draw in row-local coordinates (0, 0 at the row's top-left);
/// list code wraps the target surface in `Translated` to place each row.
pub struct Translated<'a> {
    inner: &'a mut dyn Surface,
    dx: i32,
    dy: i32,
}

impl<'a> Translated<'a> {
    pub fn new(inner: &'a mut dyn Surface, dx: i32, dy: i32) -> Self {
        Self { inner, dx, dy }
    }
}

impl Surface for Translated<'_> {
    fn size(&self) -> Size {
        let size = self.inner.size();
        Size::new(size.width - self.dx, size.height - self.dy)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.inner.fill_rect(rect.translated(self.dx, self.dy), color);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.inner
            .fill_ellipse(rect.translated(self.dx, self.dy), color);
    }

    fn draw_mask(&mut self, x: i32, y: i32, mask: &GrayImage, color: Color) {
        self.inner.draw_mask(x + self.dx, y + self.dy, mask, color);
    }

    fn draw_pixmap(&mut self, x: i32, y: i32, pixmap: &Pixmap) {
        self.inner.draw_pixmap(x + self.dx, y + self.dy, pixmap);
    }

    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, font: &dyn Font, color: Color) {
        self.inner
            .draw_text(x + self.dx, baseline + self.dy, text, font, color);
    }
}

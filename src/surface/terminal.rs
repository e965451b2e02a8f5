//! Terminal preview of a raster
//!
//! Maps an RGBA image onto a ratatui buffer using upper-half-block cells:
//! each cell shows two vertically stacked samples, the top one as the
//! foreground color of `▀` and the bottom one as the cell background.

use std::io;

use image::RgbaImage;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{buffer::Buffer, layout::Rect, Terminal, TerminalOptions, Viewport};
use tracing::debug;

use super::Color;
use crate::error::RenderResult;

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Number of terminal rows needed to show `image` at `columns` cells wide
/// while preserving its aspect ratio.
pub fn rows_for(image: &RgbaImage, columns: u16) -> u16 {
    if image.width() == 0 || columns == 0 {
        return 0;
    }
    let samples = (image.height() as u64 * columns as u64).div_ceil(image.width() as u64);
    samples.div_ceil(2).min(u16::MAX as u64) as u16
}

/// Blit `image` scaled to fill `area`, compositing translucent pixels over `backdrop`.
pub fn blit(image: &RgbaImage, area: Rect, buf: &mut Buffer, backdrop: Color) {
    if image.width() == 0 || image.height() == 0 || area.width == 0 || area.height == 0 {
        return;
    }
    let sample_rows = area.height as u32 * 2;
    let sample = |cx: u16, sy: u32| -> Color {
        let x = (cx as u32 * image.width() / area.width as u32).min(image.width() - 1);
        let y = (sy * image.height() / sample_rows).min(image.height() - 1);
        over(backdrop, (*image.get_pixel(x, y)).into())
    };
    for cy in 0..area.height {
        for cx in 0..area.width {
            let top = sample(cx, cy as u32 * 2);
            let bottom = sample(cx, cy as u32 * 2 + 1);
            let pos = (area.x + cx, area.y + cy);
            if !buf.area.contains(pos.into()) {
                continue;
            }
            buf[pos]
                .set_char(UPPER_HALF_BLOCK)
                .set_fg(top.to_ratatui())
                .set_bg(bottom.to_ratatui());
        }
    }
}

/// Draw `image` below the cursor in an inline viewport at most
/// `max_columns` cells wide.
pub fn preview_inline(image: &RgbaImage, backdrop: Color, max_columns: u16) -> RenderResult<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let columns = backend.size()?.width.min(max_columns);
    let rows = rows_for(image, columns);
    if rows == 0 {
        return Ok(());
    }
    debug!(columns, rows, "Drawing inline preview");
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(rows),
        },
    )?;
    terminal.draw(|frame| {
        let area = frame.area();
        let area = Rect::new(area.x, area.y, columns.min(area.width), area.height);
        blit(image, area, frame.buffer_mut(), backdrop);
    })?;
    println!();
    Ok(())
}

fn over(backdrop: Color, src: Color) -> Color {
    let a = src.a as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Color::rgb(
        mix(src.r, backdrop.r),
        mix(src.g, backdrop.g),
        mix(src.b, backdrop.b),
    )
}

//! Row avatars: peer userpics, placeholders and the online dot

use image::GrayImage;

use crate::geometry::Rect;
use crate::models::{initials, Entry, HiddenSender, Peer};
use crate::surface::raster::{coverage_mask, polygon_contains, segment_distance};
use crate::surface::{Color, Surface};
use crate::text::Font;
use crate::traits::{AvatarPainter, VideoUserpic};
use crate::ui::context::PaintContext;

/// Which avatar a row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    /// "Saved Messages" bookmark
    SelfPlaceholder,
    /// Replies service chat arrow
    RepliesPlaceholder,
    /// The peer's own userpic, optionally with the online dot
    RealPeer { allow_online_dot: bool },
    /// Forward from an account that hides itself
    HiddenSender,
    /// Folders and other non-chat entries
    GenericEntry,
}

/// What the avatar painter may draw from
#[derive(Clone, Copy)]
pub struct AvatarSources<'a> {
    pub entry: &'a Entry,
    pub from: Option<&'a Peer>,
    pub hidden_sender: Option<&'a HiddenSender>,
    pub userpic: Option<&'a dyn AvatarPainter>,
    pub video_userpic: Option<&'a dyn VideoUserpic>,
}

/// Generated avatar: colored circle with up to two initials
pub struct InitialsAvatar<'a> {
    pub initials: String,
    pub background: Color,
    pub foreground: Color,
    pub font: &'a dyn Font,
}

impl AvatarPainter for InitialsAvatar<'_> {
    fn paint(&self, surface: &mut dyn Surface, x: i32, y: i32, size: i32) {
        surface.fill_ellipse(Rect::new(x, y, size, size), self.background);
        if self.initials.is_empty() {
            return;
        }
        let width = self.font.width(&self.initials);
        surface.draw_text_left(
            x + (size - width) / 2,
            y + (size - self.font.height()) / 2,
            &self.initials,
            self.font,
            self.foreground,
        );
    }
}

/// Paint the avatar for `kind` at the row's photo position
pub fn paint_avatar(
    surface: &mut dyn Surface,
    kind: AvatarKind,
    sources: &AvatarSources<'_>,
    context: &PaintContext<'_>,
) {
    let st = context.st;
    let (x, y, size) = (st.padding.left, st.padding.top, st.photo_size);
    let palette = &context.theme.palette;
    match kind {
        AvatarKind::SelfPlaceholder => {
            paint_placeholder(surface, x, y, size, palette.saved_messages_bg, palette.placeholder_fg, bookmark_mask);
        }
        AvatarKind::RepliesPlaceholder => {
            paint_placeholder(surface, x, y, size, palette.replies_bg, palette.placeholder_fg, reply_arrow_mask);
        }
        AvatarKind::RealPeer { allow_online_dot } => {
            if let Some(peer) = sources.from {
                paint_peer_userpic(surface, peer, sources, x, y, size, context);
                if allow_online_dot && peer.is_online(context.unix_now()) {
                    paint_online_dot(surface, context);
                }
            }
        }
        AvatarKind::HiddenSender => {
            let (name, color_index) = sources
                .hidden_sender
                .map(|hidden| (hidden.name.as_str(), hidden.color_index))
                .unwrap_or_default();
            InitialsAvatar {
                initials: initials(name),
                background: palette.userpic_color(color_index),
                foreground: palette.placeholder_fg,
                font: context.theme.fonts.semibold.as_ref(),
            }
            .paint(surface, x, y, size);
        }
        AvatarKind::GenericEntry => {
            if let Some(userpic) = sources.userpic {
                userpic.paint(surface, x, y, size);
            } else if sources.entry.folder.is_some() {
                paint_folder_userpic(surface, x, y, size, context);
            } else {
                InitialsAvatar {
                    initials: initials(&sources.entry.name),
                    background: palette.archive_userpic_bg,
                    foreground: palette.placeholder_fg,
                    font: context.theme.fonts.semibold.as_ref(),
                }
                .paint(surface, x, y, size);
            }
        }
    }
}

fn paint_peer_userpic(
    surface: &mut dyn Surface,
    peer: &Peer,
    sources: &AvatarSources<'_>,
    x: i32,
    y: i32,
    size: i32,
    context: &PaintContext<'_>,
) {
    if let Some(video) = sources.video_userpic {
        if video.paint_frame(surface, x, y, size, context.paused) {
            return;
        }
    }
    match sources.userpic {
        Some(userpic) => userpic.paint(surface, x, y, size),
        None => {
            let palette = &context.theme.palette;
            InitialsAvatar {
                initials: peer.initials(),
                background: palette.userpic_color(peer.color_index),
                foreground: palette.placeholder_fg,
                font: context.theme.fonts.semibold.as_ref(),
            }
            .paint(surface, x, y, size);
        }
    }
}

/// Folder glyph on the archive background, any size
pub fn paint_folder_userpic(surface: &mut dyn Surface, x: i32, y: i32, size: i32, context: &PaintContext<'_>) {
    let palette = &context.theme.palette;
    paint_placeholder(surface, x, y, size, palette.archive_userpic_bg, palette.placeholder_fg, folder_mask);
}

/// Green dot at the avatar's bottom-right corner, ringed in the row color
pub fn paint_online_dot(surface: &mut dyn Surface, context: &PaintContext<'_>) {
    let st = context.st;
    let metrics = context.metrics;
    let dot = metrics.online_dot_size;
    let stroke = metrics.online_dot_stroke;
    let right = st.padding.left + st.photo_size;
    let bottom = st.padding.top + st.photo_size;
    let outer = Rect::new(right - dot, bottom - dot, dot, dot);
    surface.fill_ellipse(outer, context.color(&context.theme.palette.bg));
    let inner = Rect::new(
        outer.x + stroke,
        outer.y + stroke,
        dot - 2 * stroke,
        dot - 2 * stroke,
    );
    surface.fill_ellipse(inner, context.theme.palette.online_dot);
}

fn paint_placeholder(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    size: i32,
    background: Color,
    foreground: Color,
    glyph: fn(u32) -> GrayImage,
) {
    surface.fill_ellipse(Rect::new(x, y, size, size), background);
    let glyph_size = (size / 2).max(1);
    let offset = (size - glyph_size) / 2;
    surface.draw_mask(x + offset, y + offset, &glyph(glyph_size as u32), foreground);
}

fn bookmark_mask(size: u32) -> GrayImage {
    let s = size as f32;
    let outline = [
        (s * 0.2, 0.0),
        (s * 0.8, 0.0),
        (s * 0.8, s),
        (s * 0.5, s * 0.72),
        (s * 0.2, s),
    ];
    coverage_mask(size, size, move |x, y| polygon_contains(&outline, x, y))
}

fn reply_arrow_mask(size: u32) -> GrayImage {
    let s = size as f32;
    let head = [(0.0, s * 0.45), (s * 0.45, s * 0.1), (s * 0.45, s * 0.8)];
    let width = (s * 0.09).max(0.8);
    coverage_mask(size, size, move |x, y| {
        polygon_contains(&head, x, y)
            || segment_distance(x, y, s * 0.4, s * 0.45, s * 0.7, s * 0.45) <= width
            || segment_distance(x, y, s * 0.7, s * 0.45, s * 0.92, s * 0.9) <= width
    })
}

fn folder_mask(size: u32) -> GrayImage {
    let s = size as f32;
    coverage_mask(size, size, move |x, y| {
        let tab = x >= s * 0.05 && x <= s * 0.45 && y >= s * 0.12 && y <= s * 0.3;
        let body = x >= s * 0.05 && x <= s * 0.95 && y >= s * 0.25 && y <= s * 0.88;
        tab || body
    })
}

//! Collapsed folder bar ("Archived chats" strip above the list)

use crate::geometry::Rect;
use crate::models::{FolderInfo, Ripple};
use crate::surface::Surface;
use crate::ui::context::PaintContext;
use crate::ui::dialogs::avatar::paint_folder_userpic;
use crate::ui::dialogs::badge::{paint_unread_badge, UnreadBadgeStyle};
use crate::ui::dialogs::ripple::paint_ripple;

/// Paint the collapsed row bar.
///
/// Wide bars show `text` on the left and a muted unread badge on the right.
/// Narrow bars show the folder userpic centered, or `text` centered when
/// there is no folder.
pub fn paint_collapsed_row(
    surface: &mut dyn Surface,
    ripple: Option<&Ripple>,
    folder: Option<&FolderInfo>,
    text: &str,
    unread: u32,
    context: &PaintContext<'_>,
) {
    let theme = context.theme;
    let palette = &theme.palette;
    let metrics = context.metrics;
    let st = context.st;
    let width = context.width;
    let bar_height = metrics.important_bar_height;

    let bg = if context.selected {
        palette.bg.over
    } else {
        palette.bg.normal
    };
    surface.fill_rect(Rect::new(0, 0, width, bar_height), bg);
    if let Some(ripple) = ripple {
        paint_ripple(surface, ripple, width, bar_height, palette.ripple_bg.normal);
    }

    let unread_height = metrics.unread_height;
    let unread_top = (bar_height - unread_height) / 2;
    if !context.narrow || folder.is_none() {
        let font = theme.fonts.semibold.as_ref();
        let unread_font = theme.fonts.unread.as_ref();
        let baseline = unread_top + (unread_height - unread_font.height()) / 2 + unread_font.ascent();
        let left = if context.narrow {
            (width - font.width(text)) / 2
        } else {
            st.padding.left
        };
        surface.draw_text(left, baseline, text, font, palette.name_fg.normal);
    } else {
        paint_folder_userpic(surface, (width - unread_height) / 2, unread_top, unread_height, context);
    }

    if !context.narrow && unread > 0 {
        let mut style = UnreadBadgeStyle::new(metrics, theme.fonts.unread.as_ref());
        style.muted = true;
        paint_unread_badge(
            surface,
            context.badges,
            &palette.unread_fg,
            &unread.to_string(),
            width - st.padding.right,
            unread_top,
            &style,
            0,
        );
    }
}

//! Content line selection and text painters
//!
//! A row's second line shows exactly one of: the promotion message, a
//! draft (or support occupancy marker), nothing for chats without
//! messages, a preview of the last message, or nothing for an empty
//! message. [`select_content`] evaluates the precedence as an ordered
//! rule table so it can be tested without painting.

use crate::geometry::Rect;
use crate::models::{FolderInfo, Message, Peer};
use crate::surface::{Color, Surface};
use crate::text::{preview_line, Font, ELLIPSIS};
use crate::ui::context::PaintContext;

/// Facts about an entry that decide its content line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentInputs {
    /// Promotion applies and the row is not a search result
    pub promoted: bool,
    pub has_promotion_message: bool,
    /// A draft is visible
    pub has_draft: bool,
    pub support_mode: bool,
    /// Support mode: another agent handles this chat
    pub occupied: bool,
    pub has_item: bool,
    pub item_is_empty: bool,
}

/// Which content block a row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Promotion,
    Draft,
    NoMessage,
    Preview,
    EmptyMessage,
}

type Rule = (ContentKind, fn(&ContentInputs) -> bool);

const RULES: &[Rule] = &[
    (ContentKind::Promotion, |i| i.promoted && i.has_promotion_message),
    (ContentKind::Draft, |i| {
        (i.has_draft && !i.support_mode) || (i.support_mode && i.occupied)
    }),
    (ContentKind::NoMessage, |i| !i.has_item),
    (ContentKind::Preview, |i| !i.item_is_empty),
];

/// First matching rule wins; an empty last message is the fallback
pub fn select_content(inputs: &ContentInputs) -> ContentKind {
    RULES
        .iter()
        .find(|(_, applies)| applies(inputs))
        .map(|(kind, _)| *kind)
        .unwrap_or(ContentKind::EmptyMessage)
}

/// Typing indicators show for groups and channels, and for users who
/// share their online status.
pub fn show_send_action(peer: Option<&Peer>) -> bool {
    match peer {
        Some(peer) => !peer.is_user() || peer.online_till > 0,
        None => false,
    }
}

// ============================================================================
// Text painters
// ============================================================================

/// One elided line of text with its top at `rect.y`
pub fn paint_elided_line(
    surface: &mut dyn Surface,
    text: &str,
    rect: Rect,
    font: &dyn Font,
    color: Color,
) -> i32 {
    if rect.width <= 0 || text.is_empty() {
        return 0;
    }
    let shown = font.elided(text, rect.width);
    surface.draw_text_left(rect.x, rect.y, &shown, font, color);
    font.width(&shown)
}

/// Promotion message in the text color
pub fn paint_promotion_text(surface: &mut dyn Surface, message: &str, rect: Rect, context: &PaintContext<'_>) {
    let theme = context.theme;
    paint_elided_line(
        surface,
        &preview_line(message),
        rect,
        theme.fonts.text.as_ref(),
        context.color(&theme.palette.text_fg),
    );
}

/// `"Draft: text"` with the label in the draft color, or the support
/// occupancy marker in the taken color.
pub fn paint_draft_text(
    surface: &mut dyn Surface,
    draft_text: &str,
    occupied_by: Option<&str>,
    rect: Rect,
    context: &PaintContext<'_>,
) {
    let theme = context.theme;
    let font = theme.fonts.text.as_ref();
    if context.support_mode {
        let marker = occupied_by.unwrap_or_default();
        paint_elided_line(surface, marker, rect, font, context.color(&theme.palette.taken_fg));
        return;
    }
    let label = theme.strings.draft_prefix();
    let body = preview_line(draft_text);
    paint_prefixed_line(
        surface,
        &label,
        context.color(&theme.palette.draft_fg),
        &body,
        context.color(&theme.palette.text_fg),
        rect,
        font,
    );
}

/// Last-message preview: optional `"Sender: "` part in the service color,
/// then the message body.
pub fn paint_message_preview(
    surface: &mut dyn Surface,
    message: &Message,
    hide_sender: bool,
    rect: Rect,
    context: &PaintContext<'_>,
) {
    let theme = context.theme;
    let font = theme.fonts.text.as_ref();
    let body = message.preview_body();
    let text_color = context.color(&theme.palette.text_fg);
    match message.sender.as_deref().filter(|_| !hide_sender) {
        Some(sender) if !sender.is_empty() => paint_prefixed_line(
            surface,
            &format!("{}:", sender),
            context.color(&theme.palette.text_fg_service),
            &body,
            text_color,
            rect,
            font,
        ),
        _ => {
            paint_elided_line(surface, &body, rect, font, text_color);
        }
    }
}

fn paint_prefixed_line(
    surface: &mut dyn Surface,
    prefix: &str,
    prefix_color: Color,
    body: &str,
    body_color: Color,
    rect: Rect,
    font: &dyn Font,
) {
    let used = paint_elided_line(surface, prefix, rect, font, prefix_color);
    if font.width(prefix) > rect.width {
        return;
    }
    let gap = font.width(" ");
    let mut rest = rect;
    rest.set_left(rect.left() + used + gap);
    paint_elided_line(surface, body, rest, font, body_color);
}

/// Folder summary: names of the chats inside, unread ones highlighted,
/// wrapped over as many lines as fit into `rect`.
pub fn paint_list_entry_text(
    surface: &mut dyn Surface,
    folder: &FolderInfo,
    rect: Rect,
    context: &PaintContext<'_>,
) {
    if rect.is_empty() {
        return;
    }
    let theme = context.theme;
    let font = theme.fonts.text.as_ref();
    let max_lines = (rect.height / font.height()).max(1);
    let plain = context.color(&theme.palette.archive_text_fg);
    let unread = context.color(&theme.palette.archive_fg);
    let separator = ", ";

    let mut line = 0;
    let mut x = rect.left();
    for (i, chat) in folder.chats.iter().enumerate() {
        let last = i + 1 == folder.chats.len();
        let span = if last {
            chat.name.clone()
        } else {
            format!("{}{}", chat.name, separator)
        };
        let color = if chat.unread { unread } else { plain };
        let width = font.width(&span);
        if x + width > rect.right() && x > rect.left() {
            if line + 1 >= max_lines {
                paint_elided_rest(surface, &span, x, rect, line, font, color);
                return;
            }
            line += 1;
            x = rect.left();
        }
        let top = rect.top() + line * font.height();
        if x + width > rect.right() {
            let room = Rect::new(x, top, rect.right() - x, font.height());
            paint_elided_line(surface, &span, room, font, color);
            if line + 1 >= max_lines {
                return;
            }
            line += 1;
            x = rect.left();
            continue;
        }
        surface.draw_text_left(x, top, &span, font, color);
        x += width;
    }
}

fn paint_elided_rest(
    surface: &mut dyn Surface,
    span: &str,
    x: i32,
    rect: Rect,
    line: i32,
    font: &dyn Font,
    color: Color,
) {
    let top = rect.top() + line * font.height();
    let room = rect.right() - x;
    if font.width(ELLIPSIS) > room {
        return;
    }
    paint_elided_line(surface, span, Rect::new(x, top, room, font.height()), font, color);
}

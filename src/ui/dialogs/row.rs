//! Row compositor
//!
//! Paints one chat-list row in row-local coordinates:
//!
//! ```text
//! +--------+----------------------------------------------+
//! | avatar | [type] name [badge]        [state] [date]    |
//! |        | content line (draft/preview/typing) [counts] |
//! +--------+----------------------------------------------+
//! ```
//!
//! Regular entries and search results share [`paint_row_parts`]; they
//! differ in how the avatar, counters and preview are chosen.

use chrono::NaiveDateTime;
use tracing::trace;

use crate::geometry::Rect;
use crate::models::{Draft, Entry, HiddenSender, Message, Peer, PeerBadge, Ripple, Row, SearchRow};
use crate::surface::{Color, Surface};
use crate::traits::SendActionPainter;
use crate::ui::context::PaintContext;
use crate::ui::dialogs::avatar::{paint_avatar, AvatarKind, AvatarSources};
use crate::ui::dialogs::content::{
    paint_draft_text, paint_list_entry_text, paint_message_preview, paint_promotion_text, select_content,
    show_send_action, ContentInputs, ContentKind,
};
use crate::ui::dialogs::counters::{paint_narrow_counter, paint_pinned_icon, paint_wide_counter, RowBadges};
use crate::ui::dialogs::date::{paint_row_date, paint_row_top_right};
use crate::ui::dialogs::ripple::paint_ripple;
use crate::ui::icons::Icon;

/// Delivery state icon next to the date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Sending,
    Sent,
    Received,
}

/// Which delivery icon a row shows, if any.
///
/// A draft shows the sending clock only while it is being saved. An
/// outgoing message shows the clock while sending (or after failing), a
/// single check while unread by the peer and a double check once read.
pub fn send_state(has_thread: bool, draft: Option<&Draft>, item: Option<&Message>) -> Option<SendState> {
    if !has_thread {
        return None;
    }
    if let Some(draft) = draft {
        return draft.saving.then_some(SendState::Sending);
    }
    let item = item.filter(|item| !item.is_empty() && item.needs_check())?;
    if item.sending || item.failed {
        Some(SendState::Sending)
    } else if item.unread_by_peer {
        Some(SendState::Sent)
    } else {
        Some(SendState::Received)
    }
}

/// Area of the typing animation inside a row, used to schedule repaints.
///
/// When the text was updated the whole text line is invalidated.
pub fn send_action_animation_rect(
    st: &crate::ui::style::DialogRowStyle,
    animation_left: i32,
    animation_width: i32,
    animation_height: i32,
    full_width: i32,
    text_updated: bool,
) -> Rect {
    let name_width = full_width - st.name_left - st.padding.right;
    Rect::new(
        st.name_left + if text_updated { 0 } else { animation_left },
        st.text_top,
        if text_updated { name_width } else { animation_width },
        animation_height,
    )
}

/// Everything the shared compositor needs to know about one row
struct RowParts<'a> {
    entry: &'a Entry,
    ripple: Option<Ripple>,
    avatar: AvatarKind,
    sources: AvatarSources<'a>,
    from: Option<&'a Peer>,
    hidden_sender: Option<&'a HiddenSender>,
    item: Option<&'a Message>,
    draft: Option<&'a Draft>,
    date: Option<NaiveDateTime>,
    send_action: Option<&'a dyn SendActionPainter>,
}

/// Paint a regular chat-list row
pub fn paint_row(surface: &mut dyn Surface, row: &Row<'_>, context: &PaintContext<'_>) {
    let entry = row.entry;
    let peer = entry.peer.as_ref();
    let item = entry.last_message.as_ref();
    let draft = entry.visible_draft();
    let badges = RowBadges::compute(entry, context.filter);
    let from = peer.map(Peer::resolved);

    let allow_online_dot =
        !context.narrow || (!badges.display_unread_counter && !badges.display_unread_mark);
    let avatar = match (peer, from) {
        (Some(peer), _) if peer.is_self => AvatarKind::SelfPlaceholder,
        (Some(peer), _) if peer.replies_chat => AvatarKind::RepliesPlaceholder,
        (_, Some(_)) => AvatarKind::RealPeer { allow_online_dot },
        _ => AvatarKind::GenericEntry,
    };

    let parts = RowParts {
        entry,
        ripple: row.ripple,
        avatar,
        sources: AvatarSources {
            entry,
            from,
            hidden_sender: None,
            userpic: row.userpic,
            video_userpic: row.video_userpic,
        },
        from,
        hidden_sender: None,
        item,
        draft,
        date: entry.display_date(draft),
        send_action: row.send_action,
    };

    let paint_item = |surface: &mut dyn Surface, name_left: i32, name_width: i32| {
        let text_top = context.st.text_top;
        let available = paint_wide_counter(surface, context, &badges, text_top, name_width);
        let rect = Rect::new(
            name_left,
            text_top,
            available,
            context.theme.fonts.text.height(),
        );
        let color = context.color(&context.theme.palette.text_fg_service);
        let action_painted = show_send_action(peer)
            && row
                .send_action
                .is_some_and(|action| action.paint(surface, rect, color, context.frame_time));
        if let Some(folder) = &entry.folder {
            paint_list_entry_text(surface, folder, rect, context);
        } else if let (false, Some(item)) = (action_painted, item) {
            paint_message_preview(surface, item, false, rect, context);
        }
    };
    let paint_counter = |surface: &mut dyn Surface| paint_narrow_counter(surface, context, &badges);

    paint_row_parts(surface, &parts, context, paint_item, paint_counter);
}

/// Paint a message search result as a row
pub fn paint_search_row(surface: &mut dyn Surface, row: &SearchRow<'_>, context: &PaintContext<'_>) {
    let item = row.message;
    let history = row.history;
    let peer = history.peer.as_ref();

    let from = match row.search_in_chat {
        Some(_) => item.from.as_ref(),
        None => peer.map(Peer::resolved),
    };
    let imported = item.forwarded.as_ref().is_some_and(|f| f.imported);
    let hidden_sender = row
        .search_in_chat
        .filter(|chat| chat.is_self || imported)
        .and_then(|_| item.hidden_sender());
    let hide_sender = row.search_in_chat.is_some_and(|chat| !chat.is_broadcast());
    let badges = RowBadges::for_search(history, context.display_unread_info);

    let in_chat = row.search_in_chat.is_some();
    let avatar = match peer {
        Some(peer) if peer.is_self && !in_chat => AvatarKind::SelfPlaceholder,
        Some(peer) if peer.replies_chat && !in_chat => AvatarKind::RepliesPlaceholder,
        _ if from.is_some() => AvatarKind::RealPeer {
            allow_online_dot: false,
        },
        _ if hidden_sender.is_some() => AvatarKind::HiddenSender,
        _ => AvatarKind::GenericEntry,
    };

    let parts = RowParts {
        entry: history,
        ripple: row.ripple,
        avatar,
        sources: AvatarSources {
            entry: history,
            from,
            hidden_sender,
            userpic: None,
            video_userpic: None,
        },
        from,
        hidden_sender,
        item: Some(item),
        draft: None,
        date: Some(item.date),
        send_action: None,
    };

    let paint_item = |surface: &mut dyn Surface, name_left: i32, name_width: i32| {
        let text_top = context.st.text_top;
        let available = paint_wide_counter(surface, context, &badges, text_top, name_width);
        let rect = Rect::new(
            name_left,
            text_top,
            available,
            context.theme.fonts.text.height(),
        );
        paint_message_preview(surface, item, hide_sender, rect, context);
    };
    let paint_counter = |surface: &mut dyn Surface| paint_narrow_counter(surface, context, &badges);

    paint_row_parts(surface, &parts, context, paint_item, paint_counter);
}

fn paint_row_parts<I, C>(
    surface: &mut dyn Surface,
    parts: &RowParts<'_>,
    context: &PaintContext<'_>,
    paint_item: I,
    paint_counter: C,
) where
    I: FnOnce(&mut dyn Surface, i32, i32),
    C: FnOnce(&mut dyn Surface),
{
    let theme = context.theme;
    let palette = &theme.palette;
    let st = context.st;
    let entry = parts.entry;
    let draft = if context.support_mode { None } else { parts.draft };

    surface.fill_rect(Rect::new(0, 0, context.width, st.height), context.color(&palette.bg));
    if let Some(ripple) = &parts.ripple {
        let color = if context.active {
            palette.ripple_bg.active
        } else {
            palette.ripple_bg.normal
        };
        paint_ripple(surface, ripple, context.width, st.height, color);
    }
    paint_avatar(surface, parts.avatar, &parts.sources, context);

    let name_left = st.name_left;
    if context.width <= name_left {
        if draft.is_none() && parts.item.is_some_and(|item| !item.is_empty()) {
            paint_counter(surface);
        }
        return;
    }

    let name_width = context.width - name_left - st.padding.right;
    let mut rect_for_name = Rect::new(name_left, st.name_top, name_width, theme.fonts.semibold.height());

    let promoted = entry.uses_top_promotion() && !context.search;
    if promoted {
        let psa_type = entry
            .promotion
            .as_ref()
            .map(|p| p.psa_type.as_str())
            .unwrap_or_default();
        let label = theme.strings.promotion_label(psa_type);
        paint_row_top_right(surface, &label, &mut rect_for_name, context);
    } else if let Some(from) = parts.from {
        if let Some(icon) = chat_type_icon(from, context) {
            icon.paint(surface, rect_for_name.x, rect_for_name.y, context.state());
            rect_for_name.set_left(rect_for_name.left() + context.metrics.chat_type_skip);
        }
    }

    let text_top = st.text_top;
    let text_height = theme.fonts.text.height();
    let inputs = ContentInputs {
        promoted,
        has_promotion_message: entry
            .promotion
            .as_ref()
            .is_some_and(|p| !p.message.is_empty()),
        has_draft: draft.is_some(),
        support_mode: context.support_mode,
        occupied: entry.occupied_by.is_some(),
        has_item: parts.item.is_some(),
        item_is_empty: parts.item.map_or(true, Message::is_empty),
    };
    let kind = select_content(&inputs);
    trace!(?kind, name = %entry.name, "Row content");

    let service_color = context.color(&palette.text_fg_service);
    let send_action_peer = entry.peer.as_ref();
    match kind {
        ContentKind::Promotion => {
            let message = entry
                .promotion
                .as_ref()
                .map(|p| p.message.as_str())
                .unwrap_or_default();
            let rect = Rect::new(name_left, text_top, name_width, text_height);
            paint_promotion_text(surface, message, rect, context);
        }
        ContentKind::Draft => {
            if let (false, Some(date)) = (promoted, parts.date) {
                paint_row_date(surface, date, &mut rect_for_name, context);
            }
            let mut available = name_width;
            if entry.shows_pinned(context.filter) {
                available -= paint_pinned_icon(surface, context, text_top);
            }
            let rect = Rect::new(name_left, text_top, available, text_height);
            // The draft branch hands the animation the paused flag as its clock.
            let frame_time = i64::from(context.paused);
            let action_painted = show_send_action(send_action_peer)
                && parts
                    .send_action
                    .is_some_and(|action| action.paint(surface, rect, service_color, frame_time));
            if !action_painted {
                let text = draft.map(|d| d.text.as_str()).unwrap_or_default();
                paint_draft_text(surface, text, entry.occupied_by.as_deref(), rect, context);
            }
        }
        ContentKind::NoMessage => {
            let mut available = name_width;
            if entry.shows_pinned(context.filter) {
                available -= paint_pinned_icon(surface, context, text_top);
            }
            if show_send_action(send_action_peer) {
                if let Some(action) = parts.send_action {
                    let rect = Rect::new(name_left, text_top, available, text_height);
                    action.paint(surface, rect, service_color, context.frame_time);
                }
            }
        }
        ContentKind::Preview => {
            if let (true, false, Some(date)) = (entry.has_thread(), promoted, parts.date) {
                paint_row_date(surface, date, &mut rect_for_name, context);
            }
            paint_item(surface, name_left, name_width);
        }
        ContentKind::EmptyMessage => {
            if entry.shows_pinned(context.filter) {
                paint_pinned_icon(surface, context, text_top);
            }
        }
    }

    if let Some(state) = send_state(entry.has_thread(), draft, parts.item) {
        let icons = &theme.icons;
        let icon = match state {
            SendState::Sending => &icons.sending,
            SendState::Sent => &icons.sent,
            SendState::Received => &icons.received,
        };
        rect_for_name.set_width(rect_for_name.width - context.metrics.send_state_skip);
        icon.paint(surface, rect_for_name.right(), rect_for_name.top(), context.state());
    }

    paint_name(surface, parts, rect_for_name, context);
}

fn paint_name(surface: &mut dyn Surface, parts: &RowParts<'_>, mut rect: Rect, context: &PaintContext<'_>) {
    let theme = context.theme;
    let palette = &theme.palette;
    let font = theme.fonts.semibold.as_ref();
    let name_color = context.color(&palette.name_fg);

    let placeholder = match parts.avatar {
        AvatarKind::SelfPlaceholder => Some(&theme.strings.saved_messages),
        AvatarKind::RepliesPlaceholder => Some(&theme.strings.replies_messages),
        _ => None,
    };
    if let Some(text) = placeholder {
        draw_elided_name(surface, text, rect, name_color, context);
    } else if let Some(from) = parts.from {
        if parts.entry.has_thread() && !context.search {
            let badge_width = paint_peer_badge(surface, from, rect, font.width(&from.name), context);
            rect.set_width(rect.width - badge_width);
        }
        draw_elided_name(surface, &from.name, rect, name_color, context);
    } else if let Some(hidden) = parts.hidden_sender {
        draw_elided_name(surface, &hidden.name, rect, name_color, context);
    } else {
        let color = if context.active {
            palette.name_fg.active
        } else {
            context.color(&palette.archive_fg)
        };
        draw_elided_name(surface, &parts.entry.name, rect, color, context);
    }
}

fn draw_elided_name(
    surface: &mut dyn Surface,
    text: &str,
    rect: Rect,
    color: Color,
    context: &PaintContext<'_>,
) {
    if rect.width <= 0 {
        return;
    }
    let font = context.theme.fonts.semibold.as_ref();
    surface.draw_text_left(rect.x, rect.y, &font.elided(text, rect.width), font, color);
}

/// Group, channel or bot icon shown before the name
fn chat_type_icon<'c>(peer: &Peer, context: &PaintContext<'c>) -> Option<&'c Icon> {
    let icons = &context.theme.icons;
    if peer.is_group() {
        Some(&icons.chat)
    } else if peer.is_broadcast() {
        Some(&icons.channel)
    } else if peer.shows_bot_icon() {
        Some(&icons.bot)
    } else {
        None
    }
}

/// Draw the peer's verified/premium/scam decoration after its name and
/// return the width it takes from the name rectangle.
fn paint_peer_badge(
    surface: &mut dyn Surface,
    peer: &Peer,
    rect: Rect,
    name_width: i32,
    context: &PaintContext<'_>,
) -> i32 {
    let theme = context.theme;
    let skip = context.metrics.peer_badge_skip;
    let state = context.state();
    let line_height = theme.fonts.semibold.height();
    let place = |width: i32| rect.left() + name_width.min(rect.width - width - skip).max(0) + skip;
    match peer.badge {
        PeerBadge::None => 0,
        PeerBadge::Verified => {
            let bg = &theme.icons.verified_bg;
            let x = place(bg.width());
            let y = rect.top() + (line_height - bg.height()) / 2;
            bg.paint(surface, x, y, state);
            theme.icons.verified_check.paint(surface, x, y, state);
            bg.width() + skip
        }
        PeerBadge::Premium => {
            let star = &theme.icons.premium;
            let x = place(star.width());
            star.paint(surface, x, rect.top() + (line_height - star.height()) / 2, state);
            star.width() + skip
        }
        PeerBadge::Scam | PeerBadge::Fake => {
            let label = if peer.badge == PeerBadge::Scam {
                &theme.strings.scam
            } else {
                &theme.strings.fake
            };
            let font = theme.fonts.date.as_ref();
            let padding = 2;
            let width = font.width(label) + 2 * padding;
            let height = font.height();
            let x = place(width);
            let y = rect.top() + (line_height - height) / 2;
            let color = context.color(&theme.palette.scam_fg);
            surface.fill_rect(Rect::new(x, y, width, 1), color);
            surface.fill_rect(Rect::new(x, y + height - 1, width, 1), color);
            surface.fill_rect(Rect::new(x, y, 1, height), color);
            surface.fill_rect(Rect::new(x + width - 1, y, 1, height), color);
            surface.draw_text_left(x + padding, y, label, font, color);
            width + skip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::models::{Forwarded, PeerKind, Promotion};
    use crate::surface::{Canvas, DrawOp, RecordingSurface};
    use crate::ui::dialogs::{BadgeCache, TypingIndicator};
    use crate::ui::style::{DialogMetrics, DialogRowStyle};
    use crate::ui::theme::Theme;
    use chrono::NaiveDate;

    const WIDTH: i32 = 400;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    struct Fixture {
        theme: Theme,
        badges: BadgeCache,
        st: DialogRowStyle,
        metrics: DialogMetrics,
    }

    impl Fixture {
        fn new() -> Self {
            let theme = Theme::default();
            let badges = BadgeCache::new(&theme.palette);
            Self {
                theme,
                badges,
                st: DialogRowStyle::standard(),
                metrics: DialogMetrics::default(),
            }
        }

        fn context(&self) -> PaintContext<'_> {
            PaintContext::new(&self.st, &self.metrics, &self.theme, &self.badges, WIDTH, at(15, 10))
        }
    }

    fn chat(name: &str, kind: PeerKind) -> Entry {
        let mut entry = Entry::chat(Peer::new(1, name, kind));
        entry.last_message = Some(Message::new(at(15, 9), "hello there"));
        entry
    }

    fn record(entry: &Entry, context: &PaintContext<'_>) -> RecordingSurface {
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &Row::new(entry), context);
        surface
    }

    // ========================================================================
    // send_state Tests
    // ========================================================================

    #[test]
    fn test_send_state() {
        let mut item = Message::new(at(15, 9), "x");
        assert_eq!(send_state(true, None, Some(&item)), None);
        item.outgoing = true;
        assert_eq!(send_state(true, None, Some(&item)), Some(SendState::Received));
        item.unread_by_peer = true;
        assert_eq!(send_state(true, None, Some(&item)), Some(SendState::Sent));
        item.failed = true;
        assert_eq!(send_state(true, None, Some(&item)), Some(SendState::Sending));
        assert_eq!(send_state(false, None, Some(&item)), None);

        let mut draft = Draft {
            text: "d".to_string(),
            date: at(15, 9),
            saving: false,
        };
        assert_eq!(send_state(true, Some(&draft), Some(&item)), None);
        draft.saving = true;
        assert_eq!(send_state(true, Some(&draft), Some(&item)), Some(SendState::Sending));
    }

    #[test]
    fn test_send_action_animation_rect() {
        let st = DialogRowStyle::standard();
        assert_eq!(
            send_action_animation_rect(&st, 5, 30, 18, 400, false),
            Rect::new(73, 34, 30, 18)
        );
        assert_eq!(
            send_action_animation_rect(&st, 5, 30, 18, 400, true),
            Rect::new(68, 34, 322, 18)
        );
    }

    // ========================================================================
    // paint_row Tests
    // ========================================================================

    #[test]
    fn test_preview_row_layout() {
        let fx = Fixture::new();
        let surface = record(&chat("Alice", PeerKind::User), &fx.context());
        assert_eq!(surface.texts(), vec!["A", "09:00", "hello there", "Alice"]);
        assert_eq!(
            surface.ops()[0],
            DrawOp::FillRect {
                rect: Rect::new(0, 0, WIDTH, 62),
                color: fx.theme.palette.bg.normal
            }
        );
    }

    #[test]
    fn test_name_is_last_and_in_name_color() {
        let fx = Fixture::new();
        let context = fx.context().with_active(true);
        let surface = record(&chat("Alice", PeerKind::User), &context);
        match surface.ops().last() {
            Some(DrawOp::Text { text, color, x, .. }) => {
                assert_eq!(text, "Alice");
                assert_eq!(*color, fx.theme.palette.name_fg.active);
                assert_eq!(*x, 68);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_promotion_beats_draft() {
        let fx = Fixture::new();
        let mut entry = chat("Sponsor", PeerKind::Channel);
        entry.promotion = Some(Promotion {
            psa_type: String::new(),
            message: "Visit our channel".to_string(),
        });
        entry.cloud_draft = Some(Draft {
            text: "unsent".to_string(),
            date: at(15, 9),
            saving: false,
        });
        let surface = record(&entry, &fx.context());
        assert!(surface.has_text("Visit our channel"));
        assert!(surface.has_text("Proxy sponsor"));
        assert!(!surface.has_text("Draft:"));
        assert!(!surface.has_text("unsent"));
        assert!(!surface.has_text("09:00"));
    }

    #[test]
    fn test_promotion_in_search_is_ignored() {
        let fx = Fixture::new();
        let mut entry = chat("Sponsor", PeerKind::Channel);
        entry.promotion = Some(Promotion {
            psa_type: "covid".to_string(),
            message: "Stay home".to_string(),
        });
        let surface = record(&entry, &fx.context().with_search(true));
        assert!(!surface.has_text("Stay home"));
        assert!(!surface.has_text("PSA"));
        assert!(surface.has_text("hello there"));
    }

    #[test]
    fn test_draft_row() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        entry.cloud_draft = Some(Draft {
            text: "see you".to_string(),
            date: at(15, 9),
            saving: true,
        });
        let surface = record(&entry, &fx.context());
        assert!(surface.has_text("Draft:"));
        assert!(surface.has_text("see you"));
        assert!(!surface.has_text("hello there"));
        let sending = fx.theme.palette.sending_fg.normal;
        assert_eq!(surface.masks_with_color(sending).len(), 1);
    }

    #[test]
    fn test_no_message_no_draft_is_blank() {
        let fx = Fixture::new();
        let entry = Entry::chat(Peer::new(1, "Quiet", PeerKind::User));
        let surface = record(&entry, &fx.context());
        assert_eq!(surface.texts(), vec!["Q", "Quiet"]);
    }

    #[test]
    fn test_no_message_shows_typing_for_groups() {
        let fx = Fixture::new();
        let entry = Entry::chat(Peer::new(1, "Team", PeerKind::Megagroup));
        let typing = TypingIndicator::new("Bob is typing", fx.theme.fonts.text.as_ref());
        let context = fx.context().with_frame_time(800);
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &Row::new(&entry).with_send_action(&typing), &context);
        assert!(surface.has_text("Bob is typing.."));
    }

    #[test]
    fn test_typing_hidden_for_offline_user() {
        let fx = Fixture::new();
        let entry = chat("Alice", PeerKind::User);
        let typing = TypingIndicator::new("typing", fx.theme.fonts.text.as_ref());
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &Row::new(&entry).with_send_action(&typing), &fx.context());
        assert!(!surface.has_text("typing"));
        assert!(surface.has_text("hello there"));
    }

    #[test]
    fn test_typing_beats_preview_for_online_user() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        if let Some(peer) = entry.peer.as_mut() {
            peer.online_till = fx.context().unix_now() + 300;
        }
        let typing = TypingIndicator::new("typing", fx.theme.fonts.text.as_ref());
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &Row::new(&entry).with_send_action(&typing), &fx.context());
        assert!(surface.has_text("typing"));
        assert!(!surface.has_text("hello there"));
        assert!(surface.has_text("09:00"));
    }

    #[test]
    fn test_whitespace_message_keeps_counter_and_date() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        entry.last_message = Some(Message::new(at(15, 9), "   "));
        entry.unread_count = 4;

        let surface = record(&entry, &fx.context());
        let texts = surface.texts();
        assert!(texts.contains(&"4"));
        assert!(texts.contains(&"09:00"));

        let context = fx.context().with_width(60).with_narrow(true);
        let mut narrow = RecordingSurface::new(60, 62);
        paint_row(&mut narrow, &Row::new(&entry), &context);
        assert_eq!(narrow.texts(), vec!["A", "4"]);
    }

    #[test]
    fn test_typing_beats_draft_with_paused_clock() {
        let fx = Fixture::new();
        let mut entry = chat("Team", PeerKind::Chat);
        entry.cloud_draft = Some(Draft {
            text: "unsent".to_string(),
            date: at(15, 9),
            saving: false,
        });
        let typing = TypingIndicator::new("typing", fx.theme.fonts.text.as_ref());
        let context = fx.context().with_frame_time(1200).with_paused(true);
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &Row::new(&entry).with_send_action(&typing), &context);
        // draft branch animates with the paused flag as its clock
        assert!(surface.has_text("typing"));
        assert!(!surface.has_text("typing."));
        assert!(!surface.has_text("unsent"));
    }

    #[test]
    fn test_group_gets_chat_type_icon() {
        let fx = Fixture::new();
        let surface = record(&chat("Team", PeerKind::Megagroup), &fx.context());
        match surface.find_text("Team") {
            Some(DrawOp::Text { x, .. }) => assert_eq!(*x, 68 + fx.metrics.chat_type_skip),
            other => panic!("unexpected op {:?}", other),
        }
        let icon_color = fx.theme.palette.name_fg.normal;
        assert!(surface
            .masks_with_color(icon_color)
            .contains(&Rect::new(68, 10, 16, 16)));
    }

    #[test]
    fn test_saved_messages_label() {
        let fx = Fixture::new();
        let mut entry = chat("Me", PeerKind::User);
        if let Some(peer) = entry.peer.as_mut() {
            peer.is_self = true;
        }
        let surface = record(&entry, &fx.context());
        assert!(surface.has_text("Saved Messages"));
        assert!(!surface.texts().contains(&"Me"));
    }

    #[test]
    fn test_migrated_group_shows_target() {
        let fx = Fixture::new();
        let mut entry = chat("Old group", PeerKind::Chat);
        if let Some(peer) = entry.peer.as_mut() {
            peer.migrate_to = Some(Box::new(Peer::new(2, "Supergroup", PeerKind::Megagroup)));
        }
        let surface = record(&entry, &fx.context());
        assert!(surface.has_text("Supergroup"));
        assert!(!surface.has_text("Old group"));
    }

    #[test]
    fn test_verified_badge_shrinks_name() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        if let Some(peer) = entry.peer.as_mut() {
            peer.badge = PeerBadge::Verified;
        }
        let surface = record(&entry, &fx.context());
        let check = fx.theme.palette.verified_check.normal;
        let rects = surface.masks_with_color(check);
        assert_eq!(rects.len(), 1);
        // right after the five-cell name
        assert_eq!(rects[0].x, 68 + 5 * 8 + fx.metrics.peer_badge_skip);
    }

    #[test]
    fn test_scam_badge_skipped_in_search_context() {
        let fx = Fixture::new();
        let mut entry = chat("Crook", PeerKind::User);
        if let Some(peer) = entry.peer.as_mut() {
            peer.badge = PeerBadge::Scam;
        }
        assert!(record(&entry, &fx.context()).has_text("SCAM"));
        assert!(!record(&entry, &fx.context().with_search(true)).has_text("SCAM"));
    }

    #[test]
    fn test_long_name_is_elided() {
        let fx = Fixture::new();
        let name = "A remarkably long conversation title that cannot fit";
        let surface = record(&chat(name, PeerKind::User), &fx.context());
        let drawn = surface
            .texts()
            .into_iter()
            .find(|t| t.starts_with("A remarkably"))
            .map(str::to_string);
        match drawn {
            Some(text) => {
                assert!(text.ends_with(crate::text::ELLIPSIS));
                assert!(fx.theme.fonts.semibold.width(&text) <= WIDTH - 68 - 10);
            }
            None => panic!("name not drawn"),
        }
    }

    #[test]
    fn test_narrow_row_draws_only_counter() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        entry.unread_count = 3;
        let context = fx.context().with_width(60).with_narrow(true);
        let mut surface = RecordingSurface::new(60, 62);
        paint_row(&mut surface, &Row::new(&entry), &context);
        assert_eq!(surface.texts(), vec!["A", "3"]);
    }

    #[test]
    fn test_narrow_row_with_draft_skips_counter() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        entry.cloud_draft = Some(Draft {
            text: "d".to_string(),
            date: at(15, 9),
            saving: false,
        });
        entry.unread_mentions = true;
        let context = fx.context().with_width(60).with_narrow(true);
        let mut surface = RecordingSurface::new(60, 62);
        paint_row(&mut surface, &Row::new(&entry), &context);
        assert!(surface.pixmaps().is_empty());
    }

    #[test]
    fn test_folder_row_shows_entry_text() {
        let fx = Fixture::new();
        let mut folder = Entry::folder(
            "Archived Chats",
            crate::models::FolderInfo {
                chats: vec![crate::models::FolderChat {
                    name: "Old friend".to_string(),
                    unread: true,
                }],
            },
        );
        folder.last_message = Some(Message::new(at(14, 9), "ignored"));
        let surface = record(&folder, &fx.context());
        assert!(surface.has_text("Old friend"));
        assert!(surface.has_text("Archived Chats"));
        assert!(!surface.has_text("ignored"));
        // folders have no thread, so no date
        assert!(!surface.has_text("09:00"));
    }

    #[test]
    fn test_ripple_uses_active_color() {
        let fx = Fixture::new();
        let entry = chat("Alice", PeerKind::User);
        let row = Row::new(&entry).with_ripple(Ripple {
            center: Point::new(100, 30),
            radius: 20,
            opacity: 255,
        });
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_row(&mut surface, &row, &fx.context().with_active(true));
        assert_eq!(
            surface.masks_with_color(fx.theme.palette.ripple_bg.active),
            vec![Rect::new(80, 10, 40, 40)]
        );
    }

    #[test]
    fn test_paint_is_idempotent() {
        let fx = Fixture::new();
        let mut entry = chat("Alice", PeerKind::User);
        entry.unread_count = 5;
        let context = fx.context();
        let mut first = Canvas::new(WIDTH as u32, 62);
        let mut second = Canvas::new(WIDTH as u32, 62);
        paint_row(&mut first, &Row::new(&entry), &context);
        paint_row(&mut second, &Row::new(&entry), &context);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    // ========================================================================
    // paint_search_row Tests
    // ========================================================================

    #[test]
    fn test_search_row_in_chat_uses_sender() {
        let fx = Fixture::new();
        let history = chat("Team", PeerKind::Megagroup);
        let chat_peer = Peer::new(1, "Team", PeerKind::Megagroup);
        let mut message = Message::new(at(14, 9), "found it");
        message.from = Some(Peer::new(5, "Carol", PeerKind::User));
        message.sender = Some("Carol".to_string());
        let row = SearchRow::new(&message, &history).in_chat(&chat_peer);
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_search_row(&mut surface, &row, &fx.context().with_search(true));
        assert!(surface.has_text("Carol"));
        // sender prefix hidden in group searches
        assert!(!surface.has_text("Carol:"));
        assert!(surface.has_text("found it"));
        assert!(surface.has_text("Fri"));
    }

    #[test]
    fn test_search_row_hidden_sender() {
        let fx = Fixture::new();
        let mut saved = chat("Me", PeerKind::User);
        if let Some(peer) = saved.peer.as_mut() {
            peer.is_self = true;
        }
        let mut me = Peer::new(1, "Me", PeerKind::User);
        me.is_self = true;
        let mut message = Message::new(at(15, 8), "forwarded text");
        message.forwarded = Some(Forwarded {
            hidden_sender: Some(HiddenSender {
                name: "Anonymous Author".to_string(),
                color_index: 1,
            }),
            imported: false,
        });
        let row = SearchRow::new(&message, &saved).in_chat(&me);
        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_search_row(&mut surface, &row, &fx.context().with_search(true));
        assert!(surface.has_text("AA"));
        assert!(surface.has_text("Anonymous Author"));
        assert!(!surface.has_text("Saved Messages"));
    }

    #[test]
    fn test_search_row_counters_follow_flag() {
        let fx = Fixture::new();
        let mut history = chat("Alice", PeerKind::User);
        history.unread_count = 9;
        let message = Message::new(at(15, 8), "match");
        let row = SearchRow::new(&message, &history);

        let mut surface = RecordingSurface::new(WIDTH, 62);
        paint_search_row(&mut surface, &row, &fx.context().with_search(true));
        assert!(!surface.has_text("9"));

        surface.clear();
        let context = fx.context().with_search(true).with_display_unread_info(true);
        paint_search_row(&mut surface, &row, &context);
        assert!(surface.texts().contains(&"9"));
    }
}

//! Unread counters, mention/reaction badges and the pinned icon

use crate::geometry::Rect;
use crate::models::{Entry, FilterId};
use crate::surface::Surface;
use crate::ui::context::PaintContext;
use crate::ui::dialogs::badge::{paint_unread_badge, BadgeSize, UnreadBadgeStyle};

/// Which counters a row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowBadges {
    pub unread_count: u32,
    pub unread_muted: bool,
    pub mention_or_reaction_muted: bool,
    pub display_unread_counter: bool,
    pub display_unread_mark: bool,
    pub display_mention_badge: bool,
    pub display_reaction_badge: bool,
    pub display_pinned_icon: bool,
}

impl RowBadges {
    /// Counter policy for a regular chat-list row.
    ///
    /// The mention badge hides the reaction badge. A single unread message
    /// that is itself the unread mention shows only the mention badge. The
    /// unread mark needs a chat and no other counter. The pinned icon shows
    /// only when nothing else does.
    pub fn compute(entry: &Entry, filter: Option<FilterId>) -> Self {
        let thread = entry.has_thread();
        let mention = thread && entry.unread_mentions;
        let reaction = !mention && thread && entry.unread_reactions;
        let only_unread_is_mention = mention
            && entry.unread_count == 1
            && entry
                .last_message
                .as_ref()
                .is_some_and(|item| item.unread_mention);
        let counter = !only_unread_is_mention && entry.unread_count > 0;
        let mark = !counter && !mention && thread && entry.unread_mark;
        let pinned = !counter && !mention && !reaction && !mark && entry.shows_pinned(filter);
        Self {
            unread_count: entry.unread_count,
            unread_muted: entry.muted,
            mention_or_reaction_muted: entry.in_folder || (!mention && entry.muted),
            display_unread_counter: counter,
            display_unread_mark: mark,
            display_mention_badge: mention,
            display_reaction_badge: reaction,
            display_pinned_icon: pinned,
        }
    }

    /// Counter policy for a message search result; counters only show when
    /// the list asks for unread info.
    pub fn for_search(history: &Entry, display_unread_info: bool) -> Self {
        let unread_count = if display_unread_info {
            history.unread_count
        } else {
            0
        };
        let mention = display_unread_info && history.unread_mentions;
        let reaction = display_unread_info && !mention && history.unread_reactions;
        let counter = unread_count > 0;
        Self {
            unread_count,
            unread_muted: history.muted,
            mention_or_reaction_muted: history.in_folder,
            display_unread_counter: counter,
            display_unread_mark: !counter && !mention && display_unread_info && history.unread_mark,
            display_mention_badge: mention,
            display_reaction_badge: reaction,
            display_pinned_icon: false,
        }
    }

    fn shows_counter(&self) -> bool {
        self.display_unread_counter || self.display_unread_mark
    }

    fn shows_mention_or_reaction(&self) -> bool {
        self.display_mention_badge || self.display_reaction_badge
    }

    fn counter_text(&self) -> String {
        if self.unread_count > 0 {
            self.unread_count.to_string()
        } else {
            String::new()
        }
    }
}

fn paint_badge(
    surface: &mut dyn Surface,
    context: &PaintContext<'_>,
    count: &str,
    x: i32,
    y: i32,
    style: &UnreadBadgeStyle<'_>,
    allow_digits: usize,
) -> Rect {
    paint_unread_badge(
        surface,
        context.badges,
        &context.theme.palette.unread_fg,
        count,
        x,
        y,
        style,
        allow_digits,
    )
}

/// Mention or reaction badge: no text, icon centered inside
fn paint_mention_or_reaction(
    surface: &mut dyn Surface,
    context: &PaintContext<'_>,
    badges: &RowBadges,
    right: i32,
    top: i32,
) -> Rect {
    let mut style = UnreadBadgeStyle::for_row(context, badges.mention_or_reaction_muted);
    style.size_id = if badges.display_mention_badge {
        BadgeSize::Dialogs
    } else {
        BadgeSize::ReactionInDialogs
    };
    style.padding = 0;
    style.text_top = 0;
    let badge = paint_badge(surface, context, "", right, top, &style, 0);
    let icons = &context.theme.icons;
    let icon = if badges.display_mention_badge {
        &icons.mention
    } else {
        &icons.reaction
    };
    icon.paint_in_center(surface, badge, style.row_state());
    badge
}

/// Badges over the avatar's bottom-right corner in the narrow layout
pub fn paint_narrow_counter(surface: &mut dyn Surface, context: &PaintContext<'_>, badges: &RowBadges) {
    let st = context.st;
    let top = st.padding.top + st.photo_size - context.metrics.unread_height;
    let mut skip_before_mention = 0;
    if badges.shows_counter() {
        let allow_digits = if badges.shows_mention_or_reaction() { 1 } else { 3 };
        let style = UnreadBadgeStyle::for_row(context, badges.unread_muted);
        let badge = paint_badge(
            surface,
            context,
            &badges.counter_text(),
            st.padding.left + st.photo_size,
            top,
            &style,
            allow_digits,
        );
        skip_before_mention += badge.width + style.padding;
    }
    if badges.shows_mention_or_reaction() {
        let right = st.padding.left + st.photo_size - skip_before_mention;
        paint_mention_or_reaction(surface, context, badges, right, top);
    }
}

/// Counters at the right end of the text line; returns the width left for
/// the text.
pub fn paint_wide_counter(
    surface: &mut dyn Surface,
    context: &PaintContext<'_>,
    badges: &RowBadges,
    text_top: i32,
    available_width: i32,
) -> i32 {
    let fonts = &context.theme.fonts;
    let metrics = context.metrics;
    let right_edge = context.width - context.st.padding.right;
    let badge_top = text_top + fonts.text.ascent()
        - fonts.unread.ascent()
        - (metrics.unread_height - fonts.unread.height()) / 2;

    let initial = available_width;
    let mut available = available_width;
    if badges.shows_counter() {
        let style = UnreadBadgeStyle::for_row(context, badges.unread_muted);
        let badge = paint_badge(
            surface,
            context,
            &badges.counter_text(),
            right_edge,
            badge_top,
            &style,
            0,
        );
        available -= badge.width + style.padding;
    } else if badges.display_pinned_icon {
        available -= paint_pinned_icon(surface, context, text_top);
    }
    if badges.shows_mention_or_reaction() {
        let right = right_edge - (initial - available);
        let badge = paint_mention_or_reaction(surface, context, badges, right, badge_top);
        available -= badge.width + metrics.unread_padding;
    }
    available
}

/// Pinned icon at the right end of the text line; returns the width taken
pub fn paint_pinned_icon(surface: &mut dyn Surface, context: &PaintContext<'_>, text_top: i32) -> i32 {
    let icon = &context.theme.icons.pinned;
    icon.paint(
        surface,
        context.width - context.st.padding.right - icon.width(),
        text_top,
        context.state(),
    );
    icon.width() + context.metrics.unread_padding
}

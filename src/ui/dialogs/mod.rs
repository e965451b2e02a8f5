//! Chat-list row painting
//!
//! Every painter draws in row-local coordinates onto a [`Surface`] and
//! reads its geometry, colors and fonts from a [`PaintContext`]. The
//! only shared mutable state is the [`BadgeCache`].
//!
//! [`Surface`]: crate::surface::Surface
//! [`PaintContext`]: crate::ui::context::PaintContext

pub mod avatar;
pub mod badge;
pub mod collapsed;
pub mod content;
pub mod counters;
pub mod date;
pub mod ripple;
pub mod row;
pub mod typing;

pub use avatar::{paint_avatar, AvatarKind, AvatarSources, InitialsAvatar};
pub use badge::{
    count_badge_size, format_badge_text, paint_unread_badge, BadgeAlign, BadgeCache, BadgeSize,
    UnreadBadgeStyle, BADGE_STATES,
};
pub use collapsed::paint_collapsed_row;
pub use content::{select_content, show_send_action, ContentInputs, ContentKind};
pub use counters::RowBadges;
pub use date::{format_row_date, paint_row_date, paint_row_top_right};
pub use row::{paint_row, paint_search_row, send_action_animation_rect, send_state, SendState};
pub use typing::TypingIndicator;

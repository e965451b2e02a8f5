//! Theme: per-state colors, fonts, icons and UI strings
//!
//! Every row element has three color variants: normal, hovered ("over")
//! and active (the open chat). [`StateValue::resolve`] centralizes the
//! precedence rule (active beats over beats normal) so painters never
//! spell out `active ? x : selected ? y : z` themselves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::surface::Color;
use crate::text::{BlockFont, Font};
use crate::ui::dialogs::BadgeCache;
use crate::ui::icons::Icons;

// ============================================================================
// Row state and state-keyed values
// ============================================================================

/// Visual state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowState {
    Normal,
    Over,
    Active,
}

impl RowState {
    /// Active beats selected (hovered) beats normal
    pub fn from_flags(active: bool, selected: bool) -> Self {
        if active {
            RowState::Active
        } else if selected {
            RowState::Over
        } else {
            RowState::Normal
        }
    }
}

/// A value with normal/over/active variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateValue<T> {
    pub normal: T,
    pub over: T,
    pub active: T,
}

impl<T> StateValue<T> {
    pub const fn new(normal: T, over: T, active: T) -> Self {
        Self {
            normal,
            over,
            active,
        }
    }

    pub fn resolve(&self, state: RowState) -> &T {
        match state {
            RowState::Normal => &self.normal,
            RowState::Over => &self.over,
            RowState::Active => &self.active,
        }
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> StateValue<U> {
        StateValue {
            normal: f(&self.normal),
            over: f(&self.over),
            active: f(&self.active),
        }
    }
}

/// Colors for the three row states
pub type StateColors = StateValue<Color>;

impl StateColors {
    pub fn color(&self, state: RowState) -> Color {
        *self.resolve(state)
    }
}

const fn state_colors(normal: Color, over: Color, active: Color) -> StateColors {
    StateValue::new(normal, over, active)
}

// ============================================================================
// Palette
// ============================================================================

/// All colors used by the row painters.
///
/// Loaded from JSON (`"#rrggbb"` strings); missing keys fall back to the
/// default light palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub bg: StateColors,
    pub ripple_bg: StateColors,
    pub name_fg: StateColors,
    /// Names of entries that are not chats (folders)
    pub archive_fg: StateColors,
    pub date_fg: StateColors,
    pub text_fg: StateColors,
    /// Typing indicators and message sender prefixes
    pub text_fg_service: StateColors,
    /// "Draft:" label; also the reaction badge background
    pub draft_fg: StateColors,
    /// Support-mode "occupied" label
    pub taken_fg: StateColors,
    /// Folder list-entry text
    pub archive_text_fg: StateColors,
    pub unread_bg: StateColors,
    pub unread_bg_muted: StateColors,
    pub unread_fg: StateColors,
    /// Pinned and chat-type icons
    pub icon_fg: StateColors,
    /// Sent/received check marks
    pub send_state_fg: StateColors,
    /// Clock shown while sending
    pub sending_fg: StateColors,
    pub verified_bg: StateColors,
    pub verified_check: StateColors,
    pub premium_fg: StateColors,
    pub scam_fg: StateColors,
    pub online_dot: Color,
    pub saved_messages_bg: Color,
    pub replies_bg: Color,
    /// Folder and other non-chat entry avatars
    pub archive_userpic_bg: Color,
    pub placeholder_fg: Color,
    /// Background colors for generated avatars, picked by peer color index
    pub userpic_colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        let white = Color::WHITE;
        let accent = Color::rgb(0x41, 0x9f, 0xd9);
        let grey = Color::rgb(0x99, 0x99, 0x99);
        let service = Color::rgb(0x3a, 0x8e, 0xd0);
        Self {
            bg: state_colors(white, Color::rgb(0xf5, 0xf5, 0xf5), accent),
            ripple_bg: state_colors(
                Color::rgba(0x00, 0x00, 0x00, 0x14),
                Color::rgba(0x00, 0x00, 0x00, 0x14),
                Color::rgba(0x00, 0x00, 0x00, 0x1f),
            ),
            name_fg: state_colors(Color::BLACK, Color::BLACK, white),
            archive_fg: state_colors(
                Color::rgb(0x8d, 0x93, 0x9a),
                Color::rgb(0x80, 0x86, 0x8c),
                white,
            ),
            date_fg: state_colors(grey, grey, Color::rgb(0xdc, 0xe9, 0xf4)),
            text_fg: state_colors(
                Color::rgb(0x8a, 0x8a, 0x8a),
                Color::rgb(0x80, 0x80, 0x80),
                white,
            ),
            text_fg_service: state_colors(service, service, white),
            draft_fg: state_colors(
                Color::rgb(0xdd, 0x4b, 0x39),
                Color::rgb(0xdd, 0x4b, 0x39),
                white,
            ),
            taken_fg: state_colors(
                Color::rgb(0x4f, 0xa0, 0x4f),
                Color::rgb(0x4f, 0xa0, 0x4f),
                white,
            ),
            archive_text_fg: state_colors(
                Color::rgb(0x8d, 0x93, 0x9a),
                Color::rgb(0x80, 0x86, 0x8c),
                white,
            ),
            unread_bg: state_colors(Color::rgb(0x40, 0xa7, 0xe3), Color::rgb(0x40, 0xa7, 0xe3), white),
            unread_bg_muted: state_colors(
                Color::rgb(0xbb, 0xbb, 0xbb),
                Color::rgb(0xb3, 0xb3, 0xb3),
                Color::rgba(0xff, 0xff, 0xff, 0xb0),
            ),
            unread_fg: state_colors(white, white, accent),
            icon_fg: state_colors(Color::rgb(0xa2, 0xa6, 0xaa), Color::rgb(0xa2, 0xa6, 0xaa), white),
            send_state_fg: state_colors(
                Color::rgb(0x5d, 0xc4, 0x52),
                Color::rgb(0x5d, 0xc4, 0x52),
                white,
            ),
            sending_fg: state_colors(grey, grey, white),
            verified_bg: state_colors(service, service, white),
            verified_check: state_colors(white, white, accent),
            premium_fg: state_colors(
                Color::rgb(0x8e, 0x6e, 0xf0),
                Color::rgb(0x8e, 0x6e, 0xf0),
                white,
            ),
            scam_fg: state_colors(
                Color::rgb(0xe7, 0x4c, 0x3c),
                Color::rgb(0xe7, 0x4c, 0x3c),
                white,
            ),
            online_dot: Color::rgb(0x4b, 0xb3, 0x4b),
            saved_messages_bg: Color::rgb(0x5f, 0xb8, 0xf5),
            replies_bg: Color::rgb(0x4f, 0xc3, 0xe7),
            archive_userpic_bg: Color::rgb(0x9d, 0xa3, 0xaa),
            placeholder_fg: white,
            userpic_colors: vec![
                Color::rgb(0xe1, 0x70, 0x76),
                Color::rgb(0xfa, 0xa7, 0x74),
                Color::rgb(0xa6, 0x95, 0xe7),
                Color::rgb(0x7b, 0xc8, 0x62),
                Color::rgb(0x6e, 0xc9, 0xcb),
                Color::rgb(0x65, 0xaa, 0xdd),
                Color::rgb(0xee, 0x7a, 0xae),
            ],
        }
    }
}

impl Palette {
    /// Generated-avatar background for a peer color index
    pub fn userpic_color(&self, index: u8) -> Color {
        if self.userpic_colors.is_empty() {
            return self.saved_messages_bg;
        }
        self.userpic_colors[index as usize % self.userpic_colors.len()]
    }
}

// ============================================================================
// Fonts
// ============================================================================

/// Fonts used by the row painters
pub struct Fonts {
    /// Chat names
    pub semibold: Box<dyn Font>,
    /// Message previews, drafts, typing indicators
    pub text: Box<dyn Font>,
    /// Right-aligned dates and promotion labels
    pub date: Box<dyn Font>,
    /// Badge counters
    pub unread: Box<dyn Font>,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            semibold: Box::new(BlockFont::new(8, 18, 14)),
            text: Box::new(BlockFont::new(7, 18, 14)),
            date: Box::new(BlockFont::new(6, 16, 12)),
            unread: Box::new(BlockFont::new(6, 14, 11)),
        }
    }
}

// ============================================================================
// Strings
// ============================================================================

/// Localized UI strings and date formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub saved_messages: String,
    pub replies_messages: String,
    pub draft: String,
    pub proxy_sponsor: String,
    pub psa_default: String,
    /// Custom PSA labels keyed by promotion type
    pub psa_badges: HashMap<String, String>,
    pub scam: String,
    pub fake: String,
    /// Short weekday names, Monday first
    pub weekdays: [String; 7],
    /// `chrono` format for same-day dates
    pub time_format: String,
    /// `chrono` format for dates older than a week
    pub date_format: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            saved_messages: "Saved Messages".to_string(),
            replies_messages: "Replies".to_string(),
            draft: "Draft".to_string(),
            proxy_sponsor: "Proxy sponsor".to_string(),
            psa_default: "PSA".to_string(),
            psa_badges: HashMap::new(),
            scam: "SCAM".to_string(),
            fake: "FAKE".to_string(),
            weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
            time_format: "%H:%M".to_string(),
            date_format: "%d.%m.%y".to_string(),
        }
    }
}

impl Strings {
    /// Label shown top-right on promoted rows
    pub fn promotion_label(&self, promotion_type: &str) -> String {
        if promotion_type.is_empty() {
            return self.proxy_sponsor.clone();
        }
        match self.psa_badges.get(promotion_type) {
            Some(custom) if !custom.is_empty() => custom.clone(),
            _ => self.psa_default.clone(),
        }
    }

    /// "Draft:" prefix of draft previews
    pub fn draft_prefix(&self) -> String {
        format!("{}:", self.draft)
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Everything visual the painters read: palette, fonts, icons, strings.
pub struct Theme {
    pub palette: Palette,
    pub fonts: Fonts,
    pub icons: Icons,
    pub strings: Strings,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), Fonts::default(), Strings::default())
    }
}

impl Theme {
    pub fn new(palette: Palette, fonts: Fonts, strings: Strings) -> Self {
        let icons = Icons::build(&palette);
        Self {
            palette,
            fonts,
            icons,
            strings,
        }
    }

    /// Switch palettes: recolor icons and drop cached badge pixmaps.
    pub fn set_palette(&mut self, palette: Palette, badges: &BadgeCache) {
        self.icons = Icons::build(&palette);
        self.palette = palette;
        badges.palette_changed(&self.palette);
    }
}

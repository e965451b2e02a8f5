//! Row metrics
//!
//! [`DialogRowStyle`] holds the per-variant metrics of a chat row (avatar
//! size, paddings, baselines, row height); [`DialogMetrics`] holds the
//! sizes shared by all variants (badge height, skips between elements).

use serde::{Deserialize, Serialize};

use crate::geometry::Margins;

/// Metrics of one row-height variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRowStyle {
    /// Full row height
    pub height: i32,
    /// Avatar offset from the row edges
    pub padding: Margins,
    /// Avatar diameter
    pub photo_size: i32,
    /// Left edge of the name and text lines
    pub name_left: i32,
    /// Top of the name line
    pub name_top: i32,
    /// Top of the message/preview line
    pub text_top: i32,
}

impl DialogRowStyle {
    /// Standard two-line row
    pub const fn standard() -> Self {
        Self {
            height: 62,
            padding: Margins::new(10, 8, 10, 8),
            photo_size: 46,
            name_left: 68,
            name_top: 10,
            text_top: 34,
        }
    }

    /// Denser variant used when the list shows more rows
    pub const fn compact() -> Self {
        Self {
            height: 52,
            padding: Margins::new(10, 6, 10, 6),
            photo_size: 40,
            name_left: 62,
            name_top: 6,
            text_top: 28,
        }
    }
}

impl Default for DialogRowStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Sizes shared by every row variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMetrics {
    /// Height of unread/mention/reaction badges
    pub unread_height: i32,
    /// Horizontal padding inside a badge and between badges
    pub unread_padding: i32,
    /// Gap between the name and the right-aligned date
    pub date_skip: i32,
    /// Width reserved for the sending/sent/received icon
    pub send_state_skip: i32,
    /// Shift of the name when a chat-type icon precedes it
    pub chat_type_skip: i32,
    /// Height of collapsed (folder summary) rows
    pub important_bar_height: i32,
    /// Diameter of the online dot on avatars
    pub online_dot_size: i32,
    /// Ring drawn around the online dot in the row background color
    pub online_dot_stroke: i32,
    /// Gap between a name and its verified/premium/scam decoration
    pub peer_badge_skip: i32,
}

impl Default for DialogMetrics {
    fn default() -> Self {
        Self {
            unread_height: 20,
            unread_padding: 5,
            date_skip: 5,
            send_state_skip: 20,
            chat_type_skip: 20,
            important_bar_height: 37,
            online_dot_size: 14,
            online_dot_stroke: 2,
            peer_badge_skip: 4,
        }
    }
}

/// Which row variant to lay out with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowVariant {
    #[default]
    Standard,
    Compact,
}

/// All metrics consumed by the row painters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub standard: DialogRowStyle,
    pub compact: DialogRowStyle,
    pub metrics: DialogMetrics,
}

impl StyleTable {
    pub fn row(&self, variant: RowVariant) -> &DialogRowStyle {
        match variant {
            RowVariant::Standard => &self.standard,
            RowVariant::Compact => &self.compact,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            standard: DialogRowStyle::standard(),
            compact: DialogRowStyle::compact(),
            metrics: DialogMetrics::default(),
        }
    }
}

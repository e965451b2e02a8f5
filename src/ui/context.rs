//! Paint context for row rendering
//!
//! Per-frame configuration shared by every painter. All paint functions
//! receive an immutable reference; nothing below the list mutates it.

use chrono::NaiveDateTime;

use crate::models::FilterId;
use crate::surface::Color;
use crate::ui::dialogs::BadgeCache;
use crate::ui::style::{DialogMetrics, DialogRowStyle};
use crate::ui::theme::{RowState, StateColors, Theme};

/// Immutable per-frame paint configuration.
#[derive(Clone, Copy)]
pub struct PaintContext<'a> {
    /// Metrics of the current row-height variant
    pub st: &'a DialogRowStyle,
    pub metrics: &'a DialogMetrics,
    pub theme: &'a Theme,
    pub badges: &'a BadgeCache,
    /// Row width in pixels
    pub width: i32,
    /// The row is the open chat
    pub active: bool,
    /// The row is hovered
    pub selected: bool,
    /// Icon-only list layout
    pub narrow: bool,
    /// Rows are search results
    pub search: bool,
    /// Search rows show counters
    pub display_unread_info: bool,
    /// Support-agent session: drafts give way to occupancy markers
    pub support_mode: bool,
    /// Animations are frozen
    pub paused: bool,
    /// Wall clock for date formatting
    pub now: NaiveDateTime,
    /// Animation clock in milliseconds
    pub frame_time: i64,
    /// Filter tab the list is showing
    pub filter: Option<FilterId>,
}

impl<'a> PaintContext<'a> {
    pub fn new(
        st: &'a DialogRowStyle,
        metrics: &'a DialogMetrics,
        theme: &'a Theme,
        badges: &'a BadgeCache,
        width: i32,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            st,
            metrics,
            theme,
            badges,
            width,
            active: false,
            selected: false,
            narrow: false,
            search: false,
            display_unread_info: false,
            support_mode: false,
            paused: false,
            now,
            frame_time: 0,
            filter: None,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn with_search(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    pub fn with_display_unread_info(mut self, display: bool) -> Self {
        self.display_unread_info = display;
        self
    }

    pub fn with_support_mode(mut self, support_mode: bool) -> Self {
        self.support_mode = support_mode;
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_frame_time(mut self, frame_time: i64) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn with_filter(mut self, filter: Option<FilterId>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn state(&self) -> RowState {
        RowState::from_flags(self.active, self.selected)
    }

    /// Resolve a state-keyed color for this row
    pub fn color(&self, colors: &StateColors) -> Color {
        colors.color(self.state())
    }

    /// Unix seconds of `now`, for online checks
    pub fn unix_now(&self) -> i64 {
        self.now.and_utc().timestamp()
    }
}

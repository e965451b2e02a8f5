//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let harness = Harness::new();
//! let context = harness.context(400);
//! let surface = record_row(&Row::new(&chat("Alice", PeerKind::User)), &context);
//! ```

#![allow(dead_code)]

use chatrow::models::{Entry, Message, Peer, PeerKind, Row};
use chatrow::surface::RecordingSurface;
use chatrow::ui::{paint_row, BadgeCache, DialogMetrics, DialogRowStyle, PaintContext, Theme};
use chrono::{NaiveDate, NaiveDateTime};

/// Fixed reference time: Saturday 2024-06-15 10:00
pub fn now() -> NaiveDateTime {
    at(15, 10, 0)
}

/// A June 2024 timestamp
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Chat entry with one incoming message sent an hour before [`now`]
pub fn chat(name: &str, kind: PeerKind) -> Entry {
    let mut entry = Entry::chat(Peer::new(1, name, kind));
    entry.last_message = Some(Message::new(at(15, 9, 0), "hello there"));
    entry
}

/// Everything a paint context borrows
pub struct Harness {
    pub theme: Theme,
    pub badges: BadgeCache,
    pub st: DialogRowStyle,
    pub metrics: DialogMetrics,
}

impl Harness {
    pub fn new() -> Self {
        let theme = Theme::default();
        let badges = BadgeCache::new(&theme.palette);
        Self {
            theme,
            badges,
            st: DialogRowStyle::standard(),
            metrics: DialogMetrics::default(),
        }
    }

    pub fn context(&self, width: i32) -> PaintContext<'_> {
        PaintContext::new(&self.st, &self.metrics, &self.theme, &self.badges, width, now())
    }
}

/// Paint `row` onto a recording surface the size of one row
pub fn record_row(row: &Row<'_>, context: &PaintContext<'_>) -> RecordingSurface {
    let mut surface = RecordingSurface::new(context.width, context.st.height);
    paint_row(&mut surface, row, context);
    surface
}

//! JSON description of a chat list to render
//!
//! ```json
//! {
//!   "now": "2024-06-15T10:00:00",
//!   "collapsed": { "text": "Archived chats", "unread": 3 },
//!   "active": 1,
//!   "typing": [{ "row": 2, "label": "Bob is typing" }],
//!   "entries": [{ "name": "Alice", "peer": { "id": 1, "name": "Alice" } }]
//! }
//! ```

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RenderError, RenderResult, ResultExt};
use crate::models::{
    Draft, Entry, FolderChat, FolderInfo, Message, Peer, PeerBadge, PeerKind, Promotion, Row,
};
use crate::text::Font;
use crate::ui::dialogs::TypingIndicator;
use crate::ui::list::{CollapsedBar, ListFrame};

/// Collapsed folder bar above the list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapsedFixture {
    pub text: String,
    pub unread: u32,
    pub folder: Option<FolderInfo>,
}

/// Typing indicator attached to the row at `row`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingFixture {
    pub row: usize,
    pub label: String,
}

/// A complete list frame
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFixture {
    /// Reference time for dates and online status; the local clock when absent
    pub now: Option<NaiveDateTime>,
    pub collapsed: Option<CollapsedFixture>,
    pub entries: Vec<Entry>,
    pub typing: Vec<TypingFixture>,
    pub active: Option<usize>,
    pub selected: Option<usize>,
    /// Animation clock in milliseconds
    pub frame_time: i64,
}

impl ListFixture {
    /// Parse and validate a fixture
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let fixture: Self = serde_json::from_str(json).map_err(|e| RenderError::json("fixture", e))?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load(path: &Path) -> RenderResult<Self> {
        let json = std::fs::read_to_string(path).with_path(path)?;
        let fixture = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = fixture.entries.len(), "Loaded fixture");
        Ok(fixture)
    }

    /// Check that every row index points at an entry
    pub fn validate(&self) -> RenderResult<()> {
        let len = self.entries.len();
        let check = |what: &str, index: Option<usize>| match index {
            Some(i) if i >= len => Err(RenderError::InvalidFixture(format!(
                "{} row {} is out of range for {} entries",
                what, i, len
            ))),
            _ => Ok(()),
        };
        check("active", self.active)?;
        check("selected", self.selected)?;
        for typing in &self.typing {
            check("typing", Some(typing.row))?;
        }
        Ok(())
    }

    /// `now`, or the local clock
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    /// Typing painters for the rows that have one
    pub fn typing_indicators<'f>(&self, font: &'f dyn Font) -> Vec<(usize, TypingIndicator<'f>)> {
        self.typing
            .iter()
            .map(|typing| (typing.row, TypingIndicator::new(typing.label.clone(), font)))
            .collect()
    }

    /// Borrow the fixture as a paintable frame
    pub fn frame<'a>(&'a self, typing: &'a [(usize, TypingIndicator<'a>)]) -> ListFrame<'a> {
        let rows = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let row = Row::new(entry);
                match typing.iter().find(|(i, _)| *i == index) {
                    Some((_, indicator)) => row.with_send_action(indicator),
                    None => row,
                }
            })
            .collect();
        ListFrame {
            collapsed: self.collapsed.as_ref().map(|bar| CollapsedBar {
                text: &bar.text,
                unread: bar.unread,
                folder: bar.folder.as_ref(),
            }),
            rows,
            active: self.active,
            selected: self.selected,
        }
    }

    /// Built-in list showing most row features
    pub fn sample() -> Self {
        let at = |day: u32, hour: u32, minute: u32| {
            NaiveDate::from_ymd_opt(2024, 6, day)
                .and_then(|d| d.and_hms_opt(hour, minute, 0))
                .unwrap_or_default()
        };
        let now = at(15, 10, 0);

        let mut saved = Peer::new(1, "Me", PeerKind::User);
        saved.is_self = true;
        let mut saved = Entry::chat(saved);
        saved.last_message = Some(Message::new(at(15, 9, 12), "Shopping list: milk, bread"));
        saved.pinned.in_main = true;

        let mut alice = Peer::new(2, "Alice Cooper", PeerKind::User);
        alice.online_till = now.and_utc().timestamp() + 300;
        alice.badge = PeerBadge::Verified;
        alice.color_index = 1;
        let mut alice = Entry::chat(alice);
        alice.last_message = Some(Message::new(at(15, 9, 41), "Are we still on for lunch?"));
        alice.unread_count = 2;

        let mut team = Entry::chat(Peer::new(3, "Rendering Team", PeerKind::Megagroup));
        let mut standup = Message::new(at(14, 17, 5), "standup moved to 11");
        standup.sender = Some("Carol".to_string());
        team.last_message = Some(standup);
        team.unread_count = 128;
        team.unread_mentions = true;
        team.muted = true;

        let mut news = Entry::chat(Peer::new(4, "Release Notes", PeerKind::Channel));
        let mut post = Message::new(at(12, 8, 0), "");
        post.media = Some("Photo".to_string());
        news.last_message = Some(post);
        news.cloud_draft = Some(Draft {
            text: "Share with the team".to_string(),
            date: at(13, 19, 30),
            saving: false,
        });

        let mut sponsor = Entry::chat(Peer::new(5, "Proxy Channel", PeerKind::Channel));
        sponsor.promotion = Some(Promotion {
            psa_type: String::new(),
            message: "Fast and private connection".to_string(),
        });
        sponsor.last_message = Some(Message::new(at(1, 12, 0), "welcome"));

        let mut bob = Entry::chat(Peer::new(6, "Bob", PeerKind::User));
        let mut sent = Message::new(at(3, 18, 20), "See you on Monday");
        sent.outgoing = true;
        bob.last_message = Some(sent);

        let archive = Entry::folder(
            "Archived Chats",
            FolderInfo {
                chats: vec![
                    FolderChat {
                        name: "Old Friends".to_string(),
                        unread: true,
                    },
                    FolderChat {
                        name: "Travel 2019".to_string(),
                        unread: false,
                    },
                ],
            },
        );

        Self {
            now: Some(now),
            collapsed: Some(CollapsedFixture {
                text: "Archived chats".to_string(),
                unread: 3,
                folder: None,
            }),
            entries: vec![saved, alice, team, news, sponsor, bob, archive],
            typing: vec![TypingFixture {
                row: 2,
                label: "Dave is typing".to_string(),
            }],
            active: Some(1),
            selected: None,
            frame_time: 800,
        }
    }
}

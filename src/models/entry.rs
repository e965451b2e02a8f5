use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::message::Message;
use super::peer::Peer;

/// Identifier of a chat-list filter (a user-defined folder tab)
pub type FilterId = u32;

/// Unsent text kept for a chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub text: String,
    pub date: NaiveDateTime,
    /// A save request to the cloud is in flight
    #[serde(default)]
    pub saving: bool,
}

impl Draft {
    pub fn is_null(&self) -> bool {
        self.text.is_empty()
    }
}

/// Sponsored proxy channel or public service announcement pinned on top
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Promotion {
    /// Empty for proxy sponsors, otherwise the PSA type
    pub psa_type: String,
    pub message: String,
}

/// One chat inside a folder summary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderChat {
    pub name: String,
    pub unread: bool,
}

/// Archive-like folder shown as a single row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderInfo {
    pub chats: Vec<FolderChat>,
}

/// Where an entry is pinned
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PinState {
    pub in_main: bool,
    pub in_filters: Vec<FilterId>,
    /// Held at the top of the main list regardless of pinning (promotions)
    pub fixed_on_top: bool,
}

/// A chat-list entry: a chat with its counters, or a folder
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Display name of non-chat entries
    pub name: String,
    /// The chat's peer; `None` for folders
    pub peer: Option<Peer>,
    pub folder: Option<FolderInfo>,
    pub unread_count: u32,
    pub unread_mark: bool,
    pub muted: bool,
    pub unread_mentions: bool,
    pub unread_reactions: bool,
    pub pinned: PinState,
    /// Lives inside a folder
    pub in_folder: bool,
    pub last_message: Option<Message>,
    pub cloud_draft: Option<Draft>,
    pub promotion: Option<Promotion>,
    /// Support-mode marker: name of the agent handling the chat
    pub occupied_by: Option<String>,
}

impl Entry {
    pub fn chat(peer: Peer) -> Self {
        Self {
            name: peer.name.clone(),
            peer: Some(peer),
            ..Default::default()
        }
    }

    pub fn folder(name: impl Into<String>, folder: FolderInfo) -> Self {
        Self {
            name: name.into(),
            folder: Some(folder),
            ..Default::default()
        }
    }

    /// Chats carry a thread; folders do not
    pub fn has_thread(&self) -> bool {
        self.peer.is_some()
    }

    /// Pinned in the list being shown and not held on top for other reasons
    pub fn shows_pinned(&self, filter: Option<FilterId>) -> bool {
        let pinned = match filter {
            Some(id) => self.pinned.in_filters.contains(&id),
            None => self.pinned.in_main,
        };
        pinned && (filter.is_some() || !self.pinned.fixed_on_top)
    }

    /// Draft to show instead of the last message.
    ///
    /// A cloud draft is hidden while the chat has an item with unread
    /// messages.
    pub fn visible_draft(&self) -> Option<&Draft> {
        if !self.has_thread() {
            return None;
        }
        let unread = self.unread_count > 0 || self.unread_mark;
        if self.last_message.is_some() && unread {
            return None;
        }
        self.cloud_draft.as_ref().filter(|draft| !draft.is_null())
    }

    /// Date shown top-right: the later of the last message and the draft
    pub fn display_date(&self, draft: Option<&Draft>) -> Option<NaiveDateTime> {
        match (&self.last_message, draft) {
            (Some(item), Some(draft)) => Some(item.date.max(draft.date)),
            (Some(item), None) => Some(item.date),
            (None, Some(draft)) => Some(draft.date),
            (None, None) => None,
        }
    }

    /// Promotion banner applies (promotion present, not in a search)
    pub fn uses_top_promotion(&self) -> bool {
        self.has_thread() && self.promotion.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeerKind;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn chat() -> Entry {
        Entry::chat(Peer::new(7, "Alice", PeerKind::User))
    }

    fn draft(hour: u32) -> Draft {
        Draft {
            text: "later".to_string(),
            date: at(hour),
            saving: false,
        }
    }

    // ========================================================================
    // Pinning Tests
    // ========================================================================

    #[test]
    fn test_shows_pinned_main_list() {
        let mut entry = chat();
        entry.pinned.in_main = true;
        assert!(entry.shows_pinned(None));
        entry.pinned.fixed_on_top = true;
        assert!(!entry.shows_pinned(None));
    }

    #[test]
    fn test_shows_pinned_in_filter_ignores_fixed() {
        let mut entry = chat();
        entry.pinned.in_filters = vec![3];
        entry.pinned.fixed_on_top = true;
        assert!(entry.shows_pinned(Some(3)));
        assert!(!entry.shows_pinned(Some(4)));
        assert!(!entry.shows_pinned(None));
    }

    // ========================================================================
    // Draft Tests
    // ========================================================================

    #[test]
    fn test_draft_hidden_behind_unread_item() {
        let mut entry = chat();
        entry.cloud_draft = Some(draft(10));
        entry.last_message = Some(Message::new(at(9), "hi"));
        assert!(entry.visible_draft().is_some());
        entry.unread_count = 2;
        assert!(entry.visible_draft().is_none());
        entry.last_message = None;
        assert!(entry.visible_draft().is_some());
    }

    #[test]
    fn test_empty_draft_is_null() {
        let mut entry = chat();
        entry.cloud_draft = Some(Draft {
            text: String::new(),
            date: at(10),
            saving: false,
        });
        assert!(entry.visible_draft().is_none());
    }

    #[test]
    fn test_whitespace_draft_is_visible() {
        let mut entry = chat();
        entry.cloud_draft = Some(Draft {
            text: "  ".to_string(),
            date: at(10),
            saving: false,
        });
        assert!(entry.visible_draft().is_some());
    }

    #[test]
    fn test_folder_has_no_draft() {
        let mut entry = Entry::folder("Archive", FolderInfo::default());
        entry.cloud_draft = Some(draft(10));
        assert!(entry.visible_draft().is_none());
    }

    #[test]
    fn test_display_date_takes_later() {
        let mut entry = chat();
        assert_eq!(entry.display_date(None), None);
        entry.last_message = Some(Message::new(at(9), "hi"));
        let d = draft(11);
        assert_eq!(entry.display_date(Some(&d)), Some(at(11)));
        let d = draft(8);
        assert_eq!(entry.display_date(Some(&d)), Some(at(9)));
    }
}

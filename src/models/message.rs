use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::peer::{HiddenSender, Peer};
use crate::text::preview_line;

/// Forwarding info of a message
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forwarded {
    /// Set when the original author hides their account
    pub hidden_sender: Option<HiddenSender>,
    /// Imported from another messenger
    pub imported: bool,
}

/// The last message of a chat, or a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub date: NaiveDateTime,
    #[serde(default)]
    pub text: String,
    /// Attachment label shown before the text ("Photo", "Sticker")
    #[serde(default)]
    pub media: Option<String>,
    /// Sender label in group previews ("You", a member name)
    #[serde(default)]
    pub sender: Option<String>,
    /// Sender peer, used when a search is scoped to one chat
    #[serde(default)]
    pub from: Option<Peer>,
    #[serde(default)]
    pub forwarded: Option<Forwarded>,
    /// Outgoing message that gets sent/read check marks
    #[serde(default)]
    pub outgoing: bool,
    #[serde(default)]
    pub sending: bool,
    #[serde(default)]
    pub failed: bool,
    /// Not yet read by the other side
    #[serde(default)]
    pub unread_by_peer: bool,
    /// Incoming unread message mentioning the current user
    #[serde(default)]
    pub unread_mention: bool,
}

impl Message {
    pub fn new(date: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
            media: None,
            sender: None,
            from: None,
            forwarded: None,
            outgoing: false,
            sending: false,
            failed: false,
            unread_by_peer: false,
            unread_mention: false,
        }
    }

    /// No text and no attachment: a service placeholder
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.media.is_none()
    }

    pub fn needs_check(&self) -> bool {
        self.outgoing
    }

    /// Single-line body of the preview, without the sender part
    pub fn preview_body(&self) -> String {
        let text = preview_line(&self.text);
        match &self.media {
            Some(media) if text.is_empty() => media.clone(),
            Some(media) => format!("{}, {}", media, text),
            None => text,
        }
    }

    pub fn hidden_sender(&self) -> Option<&HiddenSender> {
        self.forwarded.as_ref()?.hidden_sender.as_ref()
    }
}

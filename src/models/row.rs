use super::entry::Entry;
use super::message::Message;
use super::peer::Peer;
use crate::geometry::Point;
use crate::traits::{AvatarPainter, SendActionPainter, VideoUserpic};

/// Press feedback: an expanding circle clipped to the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    /// Press point in row coordinates
    pub center: Point,
    pub radius: i32,
    /// Fade-out progress applied to the ripple color, 255 = opaque
    pub opacity: u8,
}

/// A request to paint one chat-list entry.
///
/// Built per paint call; collaborators are borrowed, never owned.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    pub entry: &'a Entry,
    pub ripple: Option<Ripple>,
    /// Static userpic; a generated initials avatar is used when absent
    pub userpic: Option<&'a dyn AvatarPainter>,
    pub video_userpic: Option<&'a dyn VideoUserpic>,
    pub send_action: Option<&'a dyn SendActionPainter>,
}

impl<'a> Row<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self {
            entry,
            ripple: None,
            userpic: None,
            video_userpic: None,
            send_action: None,
        }
    }

    pub fn with_ripple(mut self, ripple: Ripple) -> Self {
        self.ripple = Some(ripple);
        self
    }

    pub fn with_userpic(mut self, userpic: &'a dyn AvatarPainter) -> Self {
        self.userpic = Some(userpic);
        self
    }

    pub fn with_video_userpic(mut self, video: &'a dyn VideoUserpic) -> Self {
        self.video_userpic = Some(video);
        self
    }

    pub fn with_send_action(mut self, painter: &'a dyn SendActionPainter) -> Self {
        self.send_action = Some(painter);
        self
    }
}

/// A message search result shown as a chat row
#[derive(Clone, Copy)]
pub struct SearchRow<'a> {
    pub message: &'a Message,
    /// Chat the message belongs to
    pub history: &'a Entry,
    /// Set when the search is scoped to a single chat
    pub search_in_chat: Option<&'a Peer>,
    pub ripple: Option<Ripple>,
}

impl<'a> SearchRow<'a> {
    pub fn new(message: &'a Message, history: &'a Entry) -> Self {
        Self {
            message,
            history,
            search_in_chat: None,
            ripple: None,
        }
    }

    pub fn in_chat(mut self, peer: &'a Peer) -> Self {
        self.search_in_chat = Some(peer);
        self
    }

    pub fn with_ripple(mut self, ripple: Ripple) -> Self {
        self.ripple = Some(ripple);
        self
    }
}

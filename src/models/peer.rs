use serde::{Deserialize, Serialize};

/// What kind of conversation a peer is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerKind {
    #[default]
    User,
    Bot,
    /// Basic group
    Chat,
    Megagroup,
    /// Broadcast channel
    Channel,
}

/// Decoration drawn after a peer's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerBadge {
    #[default]
    None,
    Verified,
    Premium,
    Scam,
    Fake,
}

/// A user, group or channel as the chat list sees it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub id: u64,
    pub name: String,
    pub kind: PeerKind,
    /// The current account's own chat ("Saved Messages")
    pub is_self: bool,
    /// The service chat collecting channel comment replies
    pub replies_chat: bool,
    /// Official support account
    pub support: bool,
    /// Unix time until which the user counts as online; zero when hidden
    pub online_till: i64,
    pub badge: PeerBadge,
    /// Index into the generated-avatar palette
    pub color_index: u8,
    /// Supergroup this group was upgraded to
    pub migrate_to: Option<Box<Peer>>,
}

impl Peer {
    pub fn new(id: u64, name: impl Into<String>, kind: PeerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.kind, PeerKind::User | PeerKind::Bot)
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PeerKind::Bot
    }

    /// Basic group or supergroup
    pub fn is_group(&self) -> bool {
        matches!(self.kind, PeerKind::Chat | PeerKind::Megagroup)
    }

    pub fn is_broadcast(&self) -> bool {
        self.kind == PeerKind::Channel
    }

    /// Bots get a chat-type icon unless they are support or replies accounts
    pub fn shows_bot_icon(&self) -> bool {
        self.is_bot() && !self.support && !self.replies_chat
    }

    /// Follow a group-to-supergroup migration
    pub fn resolved(&self) -> &Peer {
        self.migrate_to.as_deref().unwrap_or(self)
    }

    /// Online at unix time `now`
    pub fn is_online(&self, now: i64) -> bool {
        self.is_user() && self.online_till > now
    }

    /// Up to two initials for generated avatars
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Author of a forwarded message who hides their account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenSender {
    pub name: String,
    pub color_index: u8,
}

pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

//! Read-only chat-list data consumed by the row painters

mod entry;
mod message;
mod peer;
mod row;

pub use entry::{Draft, Entry, FilterId, FolderChat, FolderInfo, PinState, Promotion};
pub use message::{Forwarded, Message};
pub use peer::{HiddenSender, Peer, PeerBadge, PeerKind};
pub use row::{Ripple, Row, SearchRow};

pub(crate) use peer::initials;

//! Collaborator seams of the row painters.
//!
//! Avatars, video userpics and typing indicators are owned by the data
//! layer; painters only call into them through these traits.
//!
//! # Traits
//!
//! - [`AvatarPainter`] - Static userpic of a peer or entry
//! - [`VideoUserpic`] - Animated userpic with a fallback to the static one
//! - [`SendActionPainter`] - Typing/recording indicator animation

pub mod avatar;
pub mod send_action;

pub use avatar::{AvatarPainter, VideoUserpic};
pub use send_action::SendActionPainter;

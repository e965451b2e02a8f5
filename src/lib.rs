//! chatrow - chat-list row renderer
//!
//! Paints the rows of a messenger chat list (avatar, name, date, preview,
//! unread badges, folder bar) onto any [`surface::Surface`].
//!
//! This library exposes modules for use in integration tests and benches.

pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod geometry;
pub mod models;
pub mod surface;
pub mod text;
pub mod traits;
pub mod ui;

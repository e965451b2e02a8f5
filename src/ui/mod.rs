//! Chat-list rendering
//!
//! - [`theme`]: palette, fonts, icons and strings
//! - [`style`]: row metrics for the standard and compact variants
//! - [`context`]: the per-frame [`PaintContext`]
//! - [`dialogs`]: the row painters themselves
//! - [`list`]: stacks rows into one image

pub mod context;
pub mod dialogs;
pub mod icons;
pub mod list;
pub mod style;
pub mod theme;

pub use context::PaintContext;
pub use dialogs::{paint_collapsed_row, paint_row, paint_search_row, BadgeCache};
pub use icons::{Icon, Icons};
pub use list::{render_list, CollapsedBar, ListFrame};
pub use style::{DialogMetrics, DialogRowStyle, RowVariant, StyleTable};
pub use theme::{Fonts, Palette, RowState, StateColors, StateValue, Strings, Theme};

//! Stacks rows into one list image

use tracing::debug;

use crate::models::{FolderInfo, Row};
use crate::surface::{Canvas, Translated};
use crate::ui::context::PaintContext;
use crate::ui::dialogs::{paint_collapsed_row, paint_row};

/// Collapsed folder bar drawn above the rows
#[derive(Debug, Clone, Copy)]
pub struct CollapsedBar<'a> {
    pub text: &'a str,
    pub unread: u32,
    pub folder: Option<&'a FolderInfo>,
}

/// One frame of the chat list
#[derive(Clone, Default)]
pub struct ListFrame<'a> {
    pub collapsed: Option<CollapsedBar<'a>>,
    pub rows: Vec<Row<'a>>,
    /// Index of the open chat
    pub active: Option<usize>,
    /// Index of the hovered row
    pub selected: Option<usize>,
}

impl ListFrame<'_> {
    /// Total pixel height of the frame for `context`
    pub fn height(&self, context: &PaintContext<'_>) -> i32 {
        let bar = if self.collapsed.is_some() {
            context.metrics.important_bar_height
        } else {
            0
        };
        bar + self.rows.len() as i32 * context.st.height
    }
}

/// Paint `frame` onto a new canvas as wide as `context.width`.
///
/// Each row gets its own copy of `context` with the active and selected
/// flags set from the frame.
pub fn render_list(frame: &ListFrame<'_>, context: &PaintContext<'_>) -> Canvas {
    let width = context.width.max(0) as u32;
    let height = frame.height(context).max(0) as u32;
    let mut canvas = Canvas::filled(width, height, context.theme.palette.bg.normal);
    debug!(rows = frame.rows.len(), width, height, "Rendering list");

    let mut top = 0;
    if let Some(bar) = &frame.collapsed {
        let mut surface = Translated::new(&mut canvas, 0, top);
        paint_collapsed_row(&mut surface, None, bar.folder, bar.text, bar.unread, context);
        top += context.metrics.important_bar_height;
    }
    for (index, row) in frame.rows.iter().enumerate() {
        let row_context = context
            .with_active(frame.active == Some(index))
            .with_selected(frame.selected == Some(index));
        let mut surface = Translated::new(&mut canvas, 0, top);
        paint_row(&mut surface, row, &row_context);
        top += context.st.height;
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, Peer, PeerKind};
    use crate::ui::dialogs::BadgeCache;
    use crate::ui::style::{DialogMetrics, DialogRowStyle};
    use crate::ui::theme::Theme;
    use chrono::NaiveDate;

    fn with_context<R>(f: impl FnOnce(&PaintContext<'_>) -> R) -> R {
        let theme = Theme::default();
        let badges = BadgeCache::new(&theme.palette);
        let st = DialogRowStyle::standard();
        let metrics = DialogMetrics::default();
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let context = PaintContext::new(&st, &metrics, &theme, &badges, 300, now);
        f(&context)
    }

    #[test]
    fn test_list_height() {
        with_context(|context| {
            let alice = Entry::chat(Peer::new(1, "Alice", PeerKind::User));
            let bob = Entry::chat(Peer::new(2, "Bob", PeerKind::User));
            let mut frame = ListFrame {
                rows: vec![Row::new(&alice), Row::new(&bob)],
                ..Default::default()
            };
            assert_eq!(frame.height(context), 124);
            frame.collapsed = Some(CollapsedBar {
                text: "Archived chats",
                unread: 0,
                folder: None,
            });
            assert_eq!(frame.height(context), 161);
            let canvas = render_list(&frame, context);
            assert_eq!(canvas.image().dimensions(), (300, 161));
        });
    }

    #[test]
    fn test_active_row_background() {
        with_context(|context| {
            let alice = Entry::chat(Peer::new(1, "Alice", PeerKind::User));
            let bob = Entry::chat(Peer::new(2, "Bob", PeerKind::User));
            let frame = ListFrame {
                rows: vec![Row::new(&alice), Row::new(&bob)],
                active: Some(1),
                ..Default::default()
            };
            let canvas = render_list(&frame, context);
            let palette = &context.theme.palette;
            // far right of each row is plain background
            assert_eq!(canvas.pixel(299, 1), palette.bg.normal);
            assert_eq!(canvas.pixel(299, 63), palette.bg.active);
        });
    }
}

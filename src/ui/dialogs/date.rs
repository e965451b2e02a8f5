//! Row date formatting and the top-right text slot

use chrono::{Datelike, NaiveDateTime};

use crate::geometry::Rect;
use crate::surface::Surface;
use crate::ui::context::PaintContext;
use crate::ui::theme::Strings;

/// Dates within this many seconds of now always show as a time of day
pub const RECENTLY_IN_SECONDS: i64 = 20 * 3600;

/// Pick the date representation for a row.
///
/// Same day or within the last twenty hours: time of day. Same ISO week of
/// the same year: weekday name. Anything else: full date.
pub fn format_row_date(date: NaiveDateTime, now: NaiveDateTime, strings: &Strings) -> String {
    let same_day = date.date() == now.date();
    let recently = (now - date).num_seconds().abs() < RECENTLY_IN_SECONDS;
    if same_day || recently {
        date.format(&strings.time_format).to_string()
    } else if date.year() == now.year() && date.iso_week().week() == now.iso_week().week() {
        let weekday = date.weekday().num_days_from_monday() as usize;
        strings.weekdays[weekday].clone()
    } else {
        date.format(&strings.date_format).to_string()
    }
}

/// Draw `text` right-aligned in the name line, shrinking `rect_for_name`.
pub fn paint_row_top_right(
    surface: &mut dyn Surface,
    text: &str,
    rect_for_name: &mut Rect,
    context: &PaintContext<'_>,
) {
    let fonts = &context.theme.fonts;
    let skip = context.metrics.date_skip;
    let width = fonts.date.width(text);
    rect_for_name.set_width(rect_for_name.width - width - skip);
    surface.draw_text(
        rect_for_name.left() + rect_for_name.width + skip,
        rect_for_name.top() + fonts.semibold.height() - fonts.text.descent(),
        text,
        fonts.date.as_ref(),
        context.color(&context.theme.palette.date_fg),
    );
}

/// Format `date` against the context clock and draw it top-right
pub fn paint_row_date(
    surface: &mut dyn Surface,
    date: NaiveDateTime,
    rect_for_name: &mut Rect,
    context: &PaintContext<'_>,
) {
    let text = format_row_date(date, context.now, &context.theme.strings);
    paint_row_top_right(surface, &text, rect_for_name, context);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::ui::dialogs::BadgeCache;
    use crate::ui::style::{DialogMetrics, DialogRowStyle};
    use crate::ui::theme::Theme;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn now() -> NaiveDateTime {
        // Saturday
        at(2024, 6, 15, 10)
    }

    // ========================================================================
    // format_row_date Tests
    // ========================================================================

    #[test]
    fn test_same_day_shows_time() {
        let text = format_row_date(at(2024, 6, 15, 9), now(), &Strings::default());
        assert_eq!(text, "09:00");
    }

    #[test]
    fn test_recent_previous_day_shows_time() {
        // 14 hours ago, yesterday
        let text = format_row_date(at(2024, 6, 14, 20), now(), &Strings::default());
        assert_eq!(text, "20:00");
    }

    #[test]
    fn test_same_week_shows_weekday() {
        // Tuesday of the same ISO week
        let text = format_row_date(at(2024, 6, 11, 9), now(), &Strings::default());
        assert_eq!(text, "Tue");
    }

    #[test]
    fn test_previous_week_shows_full_date() {
        // Saturday of the previous ISO week
        let text = format_row_date(at(2024, 6, 8, 9), now(), &Strings::default());
        assert_eq!(text, "08.06.24");
    }

    #[test]
    fn test_previous_year_shows_full_date() {
        let text = format_row_date(at(2023, 6, 15, 9), now(), &Strings::default());
        assert_eq!(text, "15.06.23");
    }

    #[test]
    fn test_same_week_number_other_year_shows_full_date() {
        // ISO week 24 of 2023
        let text = format_row_date(at(2023, 6, 13, 9), now(), &Strings::default());
        assert_eq!(text, "13.06.23");
    }

    #[test]
    fn test_future_within_window_shows_time() {
        let text = format_row_date(at(2024, 6, 16, 1), now(), &Strings::default());
        assert_eq!(text, "01:00");
    }

    #[test]
    fn test_custom_formats() {
        let strings = Strings {
            time_format: "%I:%M %p".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            ..Strings::default()
        };
        assert_eq!(format_row_date(at(2024, 6, 15, 9), now(), &strings), "09:00 AM");
        assert_eq!(format_row_date(at(2023, 1, 2, 9), now(), &strings), "2023-01-02");
    }

    #[test]
    fn test_deterministic() {
        let strings = Strings::default();
        let a = format_row_date(at(2024, 6, 11, 9), now(), &strings);
        let b = format_row_date(at(2024, 6, 11, 9), now(), &strings);
        assert_eq!(a, b);
    }

    // ========================================================================
    // paint_row_top_right Tests
    // ========================================================================

    #[test]
    fn test_top_right_shrinks_name_rect() {
        let theme = Theme::default();
        let badges = BadgeCache::new(&theme.palette);
        let st = DialogRowStyle::standard();
        let metrics = DialogMetrics::default();
        let context = PaintContext::new(&st, &metrics, &theme, &badges, 400, now());

        let mut rect = Rect::new(68, 10, 322, 18);
        let mut surface = RecordingSurface::new(400, 62);
        paint_row_top_right(&mut surface, "09:00", &mut rect, &context);

        let text_width = theme.fonts.date.width("09:00");
        assert_eq!(rect.width, 322 - text_width - metrics.date_skip);
        match surface.find_text("09:00") {
            Some(DrawOp::Text { x, baseline, color, .. }) => {
                assert_eq!(*x + text_width, 390);
                assert_eq!(
                    *baseline,
                    10 + theme.fonts.semibold.height() - theme.fonts.text.descent()
                );
                assert_eq!(*color, theme.palette.date_fg.normal);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }
}

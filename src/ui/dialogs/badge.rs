//! Unread badge geometry and painting
//!
//! A badge is a pill: a left cap, an optional solid bar and a right cap.
//! The caps are halves of one anti-aliased circle, colorized per visual
//! state and cached as pixmaps in [`BadgeCache`].

use std::cell::RefCell;

use image::GrayImage;
use tracing::debug;

use crate::geometry::{Rect, Size};
use crate::surface::raster::{circle_mask, colorize};
use crate::surface::{Color, Pixmap, Surface};
use crate::text::Font;
use crate::ui::context::PaintContext;
use crate::ui::style::DialogMetrics;
use crate::ui::theme::{Palette, RowState, StateColors};

/// Number of cached visual states: muted x (normal, over, active)
pub const BADGE_STATES: usize = 6;

/// Badge size class; each has its own cache and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    #[default]
    Dialogs,
    ReactionInDialogs,
}

impl BadgeSize {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            BadgeSize::Dialogs => 0,
            BadgeSize::ReactionInDialogs => 1,
        }
    }
}

/// Horizontal placement of a badge relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeAlign {
    /// Badge starts at x
    Left,
    /// Badge centered in [0, x)
    Center,
    /// Badge ends at x
    #[default]
    Right,
}

/// Rendering parameters of one badge
#[derive(Clone, Copy)]
pub struct UnreadBadgeStyle<'a> {
    pub align: BadgeAlign,
    pub active: bool,
    pub selected: bool,
    pub muted: bool,
    /// Text top inside the badge; zero centers the text vertically
    pub text_top: i32,
    pub size: i32,
    pub padding: i32,
    pub size_id: BadgeSize,
    pub font: &'a dyn Font,
}

impl<'a> UnreadBadgeStyle<'a> {
    pub fn new(metrics: &DialogMetrics, font: &'a dyn Font) -> Self {
        Self {
            align: BadgeAlign::Right,
            active: false,
            selected: false,
            muted: false,
            text_top: 0,
            size: metrics.unread_height,
            padding: metrics.unread_padding,
            size_id: BadgeSize::Dialogs,
            font,
        }
    }

    /// Dialog badge for a row: active/selected flags taken from `context`
    pub fn for_row(context: &PaintContext<'a>, muted: bool) -> Self {
        let mut style = Self::new(context.metrics, context.theme.fonts.unread.as_ref());
        style.active = context.active;
        style.selected = context.selected;
        style.muted = muted;
        style
    }

    /// Cache slot: muted adds 3, then active 2 or selected 1
    pub fn state_index(&self) -> usize {
        let muted = if self.muted { 3 } else { 0 };
        let state = if self.active {
            2
        } else if self.selected {
            1
        } else {
            0
        };
        muted + state
    }

    pub fn row_state(&self) -> RowState {
        RowState::from_flags(self.active, self.selected)
    }
}

/// Shorten a counter to `".."` plus its last `allow_digits` characters.
///
/// Zero `allow_digits` means unlimited.
pub fn format_badge_text(count: &str, allow_digits: usize) -> String {
    let len = count.chars().count();
    if allow_digits > 0 && len > allow_digits + 1 {
        let tail: String = count.chars().skip(len - allow_digits).collect();
        format!("..{}", tail)
    } else {
        count.to_string()
    }
}

/// Size of the badge for `count`; never narrower than it is tall
pub fn count_badge_size(count: &str, style: &UnreadBadgeStyle<'_>, allow_digits: usize) -> Size {
    let text = format_badge_text(count, allow_digits);
    let width = style.font.width(&text);
    Size::new((width + 2 * style.padding).max(style.size), style.size)
}

/// Paint a badge with `count` centered in it and return the occupied rect.
#[allow(clippy::too_many_arguments)]
pub fn paint_unread_badge(
    surface: &mut dyn Surface,
    cache: &BadgeCache,
    fg: &StateColors,
    count: &str,
    x: i32,
    y: i32,
    style: &UnreadBadgeStyle<'_>,
    allow_digits: usize,
) -> Rect {
    let text = format_badge_text(count, allow_digits);
    let height = style.size;
    let text_width = style.font.width(&text);
    let width = (text_width + 2 * style.padding).max(height);

    let left = match style.align {
        BadgeAlign::Center => (x - width) / 2,
        BadgeAlign::Right => x - width,
        BadgeAlign::Left => x,
    };
    let badge = Rect::new(left, y, width, height);
    paint_badge_body(surface, cache, badge, style);

    if !text.is_empty() {
        let text_top = if style.text_top != 0 {
            style.text_top
        } else {
            (height - style.font.height()) / 2
        };
        surface.draw_text(
            left + (width - text_width) / 2,
            y + text_top + style.font.ascent(),
            &text,
            style.font,
            fg.color(style.row_state()),
        );
    }
    badge
}

/// Composite the pill background into `rect`.
///
/// # Panics
///
/// If `rect.height` differs from `style.size`.
pub fn paint_badge_body(
    surface: &mut dyn Surface,
    cache: &BadgeCache,
    rect: Rect,
    style: &UnreadBadgeStyle<'_>,
) {
    assert_eq!(rect.height, style.size, "badge rect must match badge size");

    let index = style.state_index();
    let size = style.size;
    let half = size / 2;
    let (left, right, bg) = cache.halves(style.size_id, index, size);

    let bar = rect.width - 2 * half;
    surface.draw_pixmap(rect.x, rect.y, &left);
    if bar > 0 {
        surface.fill_rect(Rect::new(rect.x + half, rect.y, bar, rect.height), bg);
    }
    surface.draw_pixmap(rect.x + half + bar, rect.y, &right);
}

// ============================================================================
// Cache
// ============================================================================

#[derive(Default)]
struct SizeData {
    circle: Option<(i32, GrayImage)>,
    left: [Option<Pixmap>; BADGE_STATES],
    right: [Option<Pixmap>; BADGE_STATES],
}

impl SizeData {
    fn clear_pixmaps(&mut self) {
        self.left = Default::default();
        self.right = Default::default();
    }
}

struct Backgrounds {
    dialogs: [Color; BADGE_STATES],
    reaction: [Color; BADGE_STATES],
}

impl Backgrounds {
    fn from_palette(palette: &Palette) -> Self {
        let muted = palette.unread_bg_muted;
        Self {
            dialogs: [
                palette.unread_bg.normal,
                palette.unread_bg.over,
                palette.unread_bg.active,
                muted.normal,
                muted.over,
                muted.active,
            ],
            reaction: [
                palette.draft_fg.normal,
                palette.draft_fg.over,
                palette.draft_fg.active,
                muted.normal,
                muted.over,
                muted.active,
            ],
        }
    }

    fn get(&self, size_id: BadgeSize, index: usize) -> Color {
        match size_id {
            BadgeSize::Dialogs => self.dialogs[index],
            BadgeSize::ReactionInDialogs => self.reaction[index],
        }
    }
}

/// Colorized badge caps, built lazily per size class and state.
///
/// Owned by whoever owns the palette; call [`BadgeCache::palette_changed`]
/// when the palette changes. Cleared entries are rebuilt on next paint.
pub struct BadgeCache {
    sizes: RefCell<[SizeData; BadgeSize::COUNT]>,
    backgrounds: RefCell<Backgrounds>,
}

impl BadgeCache {
    pub fn new(palette: &Palette) -> Self {
        Self {
            sizes: RefCell::new(Default::default()),
            backgrounds: RefCell::new(Backgrounds::from_palette(palette)),
        }
    }

    /// Drop every cached cap and adopt the new background colors.
    pub fn palette_changed(&self, palette: &Palette) {
        for data in self.sizes.borrow_mut().iter_mut() {
            data.clear_pixmaps();
        }
        *self.backgrounds.borrow_mut() = Backgrounds::from_palette(palette);
        debug!("Badge cache invalidated after palette change");
    }

    /// Background color of a state slot
    pub fn background(&self, size_id: BadgeSize, index: usize) -> Color {
        self.backgrounds.borrow().get(size_id, index)
    }

    /// Cache keys of the (left, right) caps per state; `None` when not built
    pub fn cached_keys(&self, size_id: BadgeSize) -> [Option<(u64, u64)>; BADGE_STATES] {
        let sizes = self.sizes.borrow();
        let data = &sizes[size_id.index()];
        std::array::from_fn(|i| match (&data.left[i], &data.right[i]) {
            (Some(left), Some(right)) => Some((left.cache_key(), right.cache_key())),
            _ => None,
        })
    }

    /// Left cap, right cap and bar color for a state, building them if needed
    fn halves(&self, size_id: BadgeSize, index: usize, size: i32) -> (Pixmap, Pixmap, Color) {
        assert!(index < BADGE_STATES, "badge state index out of range");
        let bg = self.background(size_id, index);
        let mut sizes = self.sizes.borrow_mut();
        let data = &mut sizes[size_id.index()];

        if !matches!(&data.circle, Some((built, _)) if *built == size) {
            data.circle = None;
            data.clear_pixmaps();
        }
        if let (Some(left), Some(right)) = (&data.left[index], &data.right[index]) {
            return (left.clone(), right.clone(), bg);
        }

        let half = size / 2;
        let (_, circle) = data
            .circle
            .get_or_insert_with(|| (size, circle_mask(size.max(0) as u32)));
        let left = Pixmap::new(colorize(circle, bg, Rect::new(0, 0, half, size)));
        let right = Pixmap::new(colorize(circle, bg, Rect::new(size - half, 0, half, size)));
        debug!(?size_id, index, size, "Built badge caps");
        data.left[index] = Some(left.clone());
        data.right[index] = Some(right.clone());
        (left, right, bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::text::BlockFont;
    use crate::ui::theme::StateValue;

    const FONT: BlockFont = BlockFont::new(6, 14, 11);

    fn style() -> UnreadBadgeStyle<'static> {
        UnreadBadgeStyle::new(&DialogMetrics::default(), &FONT)
    }

    fn fg() -> StateColors {
        StateValue::new(Color::WHITE, Color::WHITE, Color::BLACK)
    }

    // ========================================================================
    // format_badge_text Tests
    // ========================================================================

    #[test]
    fn test_format_badge_text_truncates() {
        assert_eq!(format_badge_text("12345", 3), "..345");
    }

    #[test]
    fn test_format_badge_text_keeps_short() {
        assert_eq!(format_badge_text("123", 3), "123");
        // one extra digit still fits
        assert_eq!(format_badge_text("1234", 3), "1234");
        assert_eq!(format_badge_text("99999", 0), "99999");
    }

    #[test]
    fn test_format_badge_text_length_bound() {
        for d in 1..6usize {
            for n in [0u64, 7, 42, 999, 1000, 123_456, 9_876_543_210] {
                let text = format_badge_text(&n.to_string(), d);
                assert!(text.chars().count() <= d + 2, "{} with {} -> {}", n, d, text);
            }
        }
    }

    // ========================================================================
    // Geometry Tests
    // ========================================================================

    #[test]
    fn test_badge_width_never_below_height() {
        let style = style();
        for text in ["", "1", "12", "12345"] {
            let size = count_badge_size(text, &style, 0);
            assert!(size.width >= size.height);
            assert_eq!(size.height, style.size);
        }
        assert_eq!(count_badge_size("", &style, 0).width, style.size);
    }

    #[test]
    fn test_badge_width_grows_with_text() {
        let style = style();
        // 5 cells * 6 + 2 * 5 padding
        assert_eq!(count_badge_size("12345", &style, 0).width, 40);
        // "..345" is also five cells
        assert_eq!(count_badge_size("1234567", &style, 3).width, 40);
    }

    #[test]
    fn test_alignment() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(200, 40);
        let mut st = style();

        st.align = BadgeAlign::Right;
        let rect = paint_unread_badge(&mut surface, &cache, &fg(), "1", 100, 0, &st, 0);
        assert_eq!(rect, Rect::new(80, 0, 20, 20));

        st.align = BadgeAlign::Left;
        let rect = paint_unread_badge(&mut surface, &cache, &fg(), "1", 100, 0, &st, 0);
        assert_eq!(rect, Rect::new(100, 0, 20, 20));

        st.align = BadgeAlign::Center;
        let rect = paint_unread_badge(&mut surface, &cache, &fg(), "1", 100, 0, &st, 0);
        assert_eq!(rect, Rect::new(40, 0, 20, 20));
    }

    #[test]
    fn test_text_is_centered() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(200, 40);
        let st = style();
        paint_unread_badge(&mut surface, &cache, &fg(), "12345", 100, 10, &st, 0);
        match surface.find_text("12345") {
            Some(DrawOp::Text { x, baseline, .. }) => {
                assert_eq!(*x, 65);
                // (20 - 14) / 2 + ascent
                assert_eq!(*baseline, 10 + 3 + 11);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_draws_no_text() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(200, 40);
        paint_unread_badge(&mut surface, &cache, &fg(), "", 100, 0, &style(), 0);
        assert!(surface.texts().is_empty());
    }

    // ========================================================================
    // Body Tests
    // ========================================================================

    #[test]
    fn test_body_without_bar() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(100, 40);
        paint_badge_body(&mut surface, &cache, Rect::new(0, 0, 20, 20), &style());
        let pixmaps = surface.pixmaps();
        assert_eq!(pixmaps.len(), 2);
        assert_eq!(pixmaps[0].0, Rect::new(0, 0, 10, 20));
        assert_eq!(pixmaps[1].0, Rect::new(10, 0, 10, 20));
        assert!(!surface
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::FillRect { .. })));
    }

    #[test]
    fn test_body_with_bar() {
        let palette = Palette::default();
        let cache = BadgeCache::new(&palette);
        let mut surface = RecordingSurface::new(100, 40);
        paint_badge_body(&mut surface, &cache, Rect::new(5, 0, 50, 20), &style());
        assert_eq!(
            surface.ops()[1],
            DrawOp::FillRect {
                rect: Rect::new(15, 0, 30, 20),
                color: palette.unread_bg.normal
            }
        );
        assert_eq!(surface.pixmaps()[1].0, Rect::new(45, 0, 10, 20));
    }

    #[test]
    #[should_panic(expected = "badge rect must match badge size")]
    fn test_body_height_mismatch_panics() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(100, 40);
        paint_badge_body(&mut surface, &cache, Rect::new(0, 0, 20, 18), &style());
    }

    // ========================================================================
    // State and Cache Tests
    // ========================================================================

    #[test]
    fn test_state_index_range() {
        let mut st = style();
        let mut seen = Vec::new();
        for muted in [false, true] {
            for active in [false, true] {
                for selected in [false, true] {
                    st.muted = muted;
                    st.active = active;
                    st.selected = selected;
                    seen.push(st.state_index());
                }
            }
        }
        assert!(seen.iter().all(|&i| i < BADGE_STATES));
        // active ignores selected
        st.muted = false;
        st.active = true;
        st.selected = true;
        assert_eq!(st.state_index(), 2);
        st.muted = true;
        st.active = false;
        st.selected = true;
        assert_eq!(st.state_index(), 4);
    }

    #[test]
    fn test_reaction_uses_draft_colors() {
        let palette = Palette::default();
        let cache = BadgeCache::new(&palette);
        assert_eq!(
            cache.background(BadgeSize::ReactionInDialogs, 0),
            palette.draft_fg.normal
        );
        assert_eq!(
            cache.background(BadgeSize::ReactionInDialogs, 5),
            palette.unread_bg_muted.active
        );
        assert_eq!(cache.background(BadgeSize::Dialogs, 1), palette.unread_bg.over);
    }

    #[test]
    fn test_cache_reuses_pixmaps() {
        let cache = BadgeCache::new(&Palette::default());
        let mut surface = RecordingSurface::new(100, 40);
        let rect = Rect::new(0, 0, 20, 20);
        paint_badge_body(&mut surface, &cache, rect, &style());
        paint_badge_body(&mut surface, &cache, rect, &style());
        let keys: Vec<u64> = surface.pixmaps().iter().map(|(_, k)| *k).collect();
        assert_eq!(keys[0], keys[2]);
        assert_eq!(keys[1], keys[3]);
        assert!(cache.cached_keys(BadgeSize::Dialogs)[0].is_some());
        assert!(cache.cached_keys(BadgeSize::ReactionInDialogs)[0].is_none());
    }

    fn paint_all_states(cache: &BadgeCache, surface: &mut RecordingSurface) {
        let mut st = style();
        for index in 0..BADGE_STATES {
            st.muted = index >= 3;
            st.active = index % 3 == 2;
            st.selected = index % 3 == 1;
            paint_badge_body(surface, cache, Rect::new(0, 0, 20, 20), &st);
        }
    }

    #[test]
    fn test_palette_change_clears_and_rebuilds() {
        let palette = Palette::default();
        let cache = BadgeCache::new(&palette);
        let mut surface = RecordingSurface::new(100, 40);

        paint_all_states(&cache, &mut surface);
        let before = cache.cached_keys(BadgeSize::Dialogs);
        assert!(before.iter().all(Option::is_some));

        let mut dark = palette.clone();
        dark.unread_bg.normal = Color::rgb(1, 2, 3);
        cache.palette_changed(&dark);
        assert!(cache
            .cached_keys(BadgeSize::Dialogs)
            .iter()
            .all(Option::is_none));
        assert_eq!(cache.background(BadgeSize::Dialogs, 0), Color::rgb(1, 2, 3));

        paint_all_states(&cache, &mut surface);
        let after = cache.cached_keys(BadgeSize::Dialogs);
        for (old, new) in before.iter().zip(after.iter()) {
            assert!(new.is_some());
            assert_ne!(old, new);
        }
    }
}

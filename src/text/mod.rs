//! Text engine seam
//!
//! Shaping and glyph rendering live outside this crate; painters only need
//! metrics, single-line elision and a coverage mask for a run of text. The
//! [`Font`] trait captures exactly that. [`BlockFont`] is a deterministic
//! fixed-grid implementation used by the CLI and tests.

mod block_font;

use image::GrayImage;

pub use block_font::BlockFont;

/// Single-character ellipsis appended by [`Font::elided`]
pub const ELLIPSIS: &str = "\u{2026}";

/// A shaped font at one size.
pub trait Font {
    /// Line height in pixels
    fn height(&self) -> i32;

    /// Distance from the top of the line to the baseline
    fn ascent(&self) -> i32;

    /// Distance from the baseline to the bottom of the line
    fn descent(&self) -> i32 {
        self.height() - self.ascent()
    }

    /// Advance width of `text` in pixels
    fn width(&self, text: &str) -> i32;

    /// Coverage mask of `text`, `width(text)` wide and `height()` tall
    fn rasterize(&self, text: &str) -> GrayImage;

    /// Truncate `text` at a character boundary so that it, plus an ellipsis,
    /// fits into `max_width`. Text that already fits is returned unchanged.
    fn elided(&self, text: &str, max_width: i32) -> String {
        if self.width(text) <= max_width {
            return text.to_string();
        }
        let mut fitted = 0;
        for (index, ch) in text.char_indices() {
            let end = index + ch.len_utf8();
            let candidate = format!("{}{}", text[..end].trim_end(), ELLIPSIS);
            if self.width(&candidate) > max_width {
                break;
            }
            fitted = end;
        }
        if fitted == 0 {
            return if self.width(ELLIPSIS) <= max_width {
                ELLIPSIS.to_string()
            } else {
                String::new()
            };
        }
        format!("{}{}", text[..fitted].trim_end(), ELLIPSIS)
    }
}

/// Collapse a message text into a single preview line.
///
/// Newlines and runs of whitespace become one space; leading and trailing
/// whitespace is dropped.
pub fn preview_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> BlockFont {
        BlockFont::new(10, 16, 12)
    }

    // ========================================================================
    // elided Tests
    // ========================================================================

    #[test]
    fn test_elided_fits_unchanged() {
        assert_eq!(font().elided("hello", 50), "hello");
    }

    #[test]
    fn test_elided_truncates_with_ellipsis() {
        // 4 cells available: three characters plus the ellipsis
        assert_eq!(font().elided("hello world", 40), "hel\u{2026}");
    }

    #[test]
    fn test_elided_never_exceeds_width() {
        let f = font();
        for width in 0..120 {
            let result = f.elided("a rather long chat title", width);
            assert!(f.width(&result) <= width, "width {} gave {:?}", width, result);
        }
    }

    #[test]
    fn test_elided_trims_trailing_space_before_ellipsis() {
        assert_eq!(font().elided("ab cdef", 40), "ab\u{2026}");
    }

    #[test]
    fn test_elided_respects_char_boundaries() {
        let result = font().elided("日本語テスト", 50);
        assert_eq!(result, "日本\u{2026}");
    }

    #[test]
    fn test_elided_too_narrow_for_ellipsis() {
        assert_eq!(font().elided("hello", 5), "");
    }

    // ========================================================================
    // preview_line Tests
    // ========================================================================

    #[test]
    fn test_preview_line_collapses_whitespace() {
        assert_eq!(preview_line("  hello\n\nworld\t again "), "hello world again");
    }

    #[test]
    fn test_preview_line_empty() {
        assert_eq!(preview_line("\n \n"), "");
    }
}

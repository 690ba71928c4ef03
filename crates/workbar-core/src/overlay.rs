//! What the overlay shows and how clicks on it are interpreted.

use crate::desktop::{DesktopIndicator, DesktopStep};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayView {
    pub indicator: DesktopIndicator,
    /// Title of the foreground window, already truncated.
    pub title: String,
    pub hovered: bool,
}

impl OverlayView {
    /// Stores a new indicator. Returns whether anything changed.
    pub fn set_indicator(&mut self, indicator: DesktopIndicator) -> bool {
        if self.indicator == indicator {
            return false;
        }
        self.indicator = indicator;
        true
    }

    /// Stores a new title. Returns whether anything changed.
    pub fn set_title(&mut self, title: String) -> bool {
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }
}

/// Maps a click to the previous/next button it landed on.
///
/// The previous button spans `[0, button)` and the next button spans
/// `[width - button, width)`.
pub fn hit_test(x: i32, width: i32, button: i32) -> Option<DesktopStep> {
    if x < 0 || x >= width || button <= 0 {
        return None;
    }
    if x < button {
        Some(DesktopStep::Prev)
    } else if x >= width - button {
        Some(DesktopStep::Next)
    } else {
        None
    }
}

/// Shortens a title to at most `max_chars` characters, ending in `…`.
///
/// A limit of 0 disables truncation.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let title = title.trim();
    if max_chars == 0 || title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut short: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_buttons_at_each_end() {
        assert_eq!(hit_test(0, 240, 24), Some(DesktopStep::Prev));
        assert_eq!(hit_test(23, 240, 24), Some(DesktopStep::Prev));
        assert_eq!(hit_test(24, 240, 24), None);
        assert_eq!(hit_test(215, 240, 24), None);
        assert_eq!(hit_test(216, 240, 24), Some(DesktopStep::Next));
        assert_eq!(hit_test(239, 240, 24), Some(DesktopStep::Next));
    }

    #[test]
    fn hit_test_outside_overlay_is_nothing() {
        assert_eq!(hit_test(-1, 240, 24), None);
        assert_eq!(hit_test(240, 240, 24), None);
        assert_eq!(hit_test(10, 240, 0), None);
    }

    #[test]
    fn short_titles_are_kept() {
        assert_eq!(truncate_title("  Notepad ", 20), "Notepad");
        assert_eq!(truncate_title("", 20), "");
    }

    #[test]
    fn long_titles_end_with_ellipsis() {
        // Act
        let title = truncate_title("Document1 - Microsoft Word", 10);

        // Assert
        assert_eq!(title, "Document1…");
        assert_eq!(title.chars().count(), 10);
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        assert_eq!(truncate_title("ÄÖÜäöüß", 4), "ÄÖÜ…");
    }

    #[test]
    fn setters_report_changes() {
        let mut view = OverlayView::default();

        assert!(view.set_title("Explorer".into()));
        assert!(!view.set_title("Explorer".into()));
        assert!(view.set_hovered(true));
        assert!(!view.set_hovered(true));
        assert!(!view.set_indicator(DesktopIndicator::default()));
    }
}

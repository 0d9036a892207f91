//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], a string buffer of ANSI output, so a
//! whole frame can be built, inspected in tests and written to the terminal
//! in one go.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **Selection Awareness**: Adjusts highlighting based on selection state
//! - **UTF-8 Safe**: Operates on character indices, not byte indices

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// ANSI output buffer for one frame.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`/`col` (both 1-indexed) with `\u{1b}[{row};{col}H`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `n` spaces.
    pub fn pad(&mut self, n: usize) {
        self.buf.extend(std::iter::repeat(' ').take(n));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of characters in `text`, which is what padding is computed from.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if visual_len(text) <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Character ranges of `query` inside `text`, coalesced into runs.
///
/// Uses the Skim matcher's indices and merges consecutive positions, so a
/// substring hit becomes a single `(start, end)` range (exclusive end).
#[must_use]
pub fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query.trim()) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Renders text with highlighted character ranges.
///
/// Highlighting is skipped for selected rows so the selection colors win.
/// Ranges use character indices `(start, end)` with an exclusive end.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            canvas.push(&normal_section);
        }

        canvas.push(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.push(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end].iter().collect();
        canvas.push(&highlighted_section);
        canvas.push(Theme::reset());
        canvas.push(&Theme::fg(&theme.colors.text_normal));

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.push(&remaining);
    }
}

/// Strips ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_becomes_one_range() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(highlight_ranges("SUPERMAN", "man", &matcher), vec![(5, 8)]);
        assert!(highlight_ranges("THOR", "xyz", &matcher).is_empty());
        assert!(highlight_ranges("THOR", "  ", &matcher).is_empty());
    }

    #[test]
    fn highlighted_text_keeps_visible_characters() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "BATMAN", &[(0, 3)], &theme, false);
        assert_eq!(strip_ansi(canvas.as_str()), "BATMAN");
        assert!(canvas.as_str().contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "BATMAN", &[(0, 3)], &theme, true);
        assert_eq!(canvas.as_str(), "BATMAN");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("CAPTAIN AMERICA", 10), "CAPTAIN...");
        assert_eq!(truncate("THOR", 10), "THOR");
    }
}

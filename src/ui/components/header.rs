//! Header component renderer.
//!
//! Renders the title bar: the centered title with the page indicator
//! right-aligned, theme-aware colors and optional background styling.

use crate::ui::helpers::{visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Parameters
///
/// * `canvas` - Frame buffer
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Title and page label
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding] page 1/2
/// ```
///
/// The page label is dropped when the terminal is too narrow for both.
pub fn render_header(
    canvas: &mut Canvas,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title_len = visual_len(&header.title);
    let page = format!("page {} ", header.page);
    let page_len = visual_len(&page);
    let padding = (cols.saturating_sub(title_len)) / 2;
    let show_page = padding + title_len + page_len < cols;

    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.push(&header.title);
    if show_page {
        canvas.pad(cols - padding - title_len - page_len);
        canvas.push(Theme::reset());
        canvas.push(&Theme::fg(&theme.colors.text_dim));
        canvas.push(&page);
    } else {
        canvas.pad(cols.saturating_sub(padding + title_len));
    }

    canvas.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn title_is_centered_with_page_on_the_right() {
        let header = HeaderInfo { title: " Heroes (10) ".into(), page: "1/2".into() };
        let mut canvas = Canvas::new();
        let next = render_header(&mut canvas, 2, &header, &Theme::default(), 40);
        assert_eq!(next, 3);

        let visible = strip_ansi(canvas.as_str());
        assert_eq!(visible.chars().count(), 40);
        assert!(visible.contains(" Heroes (10) "));
        assert!(visible.ends_with("page 1/2 "));
    }

    #[test]
    fn narrow_terminal_drops_page_label() {
        let header = HeaderInfo { title: " Heroes (10) ".into(), page: "1/2".into() };
        let mut canvas = Canvas::new();
        render_header(&mut canvas, 1, &header, &Theme::default(), 16);
        assert!(!strip_ansi(canvas.as_str()).contains("page"));
    }
}

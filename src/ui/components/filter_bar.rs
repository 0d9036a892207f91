//! Filter bar and banner line renderers.

use crate::ui::helpers::{truncate, visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Banner, BannerKind, FilterBarInfo};

/// Renders the active filters on one line.
///
/// ```text
///  Name: man   ID: 8 (searching...)
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(
    canvas: &mut Canvas,
    row: usize,
    filters: &FilterBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut text = String::new();
    if !filters.name_query.is_empty() {
        text.push_str(&format!(" Name: {}", filters.name_query));
    }
    if let Some(id) = &filters.id_query {
        text.push_str(&format!("   ID: {id}"));
        if filters.searching {
            text.push_str(" (searching...)");
        }
    }
    render_line(canvas, row, &text, &theme.colors.filter_bar_fg, cols)
}

/// Renders an error or status banner.
pub fn render_banner(
    canvas: &mut Canvas,
    row: usize,
    banner: &Banner,
    theme: &Theme,
    cols: usize,
) -> usize {
    let (color, text) = match banner.kind {
        BannerKind::Error => (&theme.colors.error_fg, format!(" ! {}", banner.text)),
        BannerKind::Info => (&theme.colors.info_fg, format!(" {}", banner.text)),
    };
    render_line(canvas, row, &text, color, cols)
}

fn render_line(canvas: &mut Canvas, row: usize, text: &str, color: &str, cols: usize) -> usize {
    let text = truncate(text, cols);
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&text);
    canvas.pad(cols.saturating_sub(visual_len(&text)));
    canvas.push(Theme::reset());
    row + 1
}

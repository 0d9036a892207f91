//! Key hint line at the bottom of the screen.

use crate::ui::helpers::{truncate, visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the key hints centered in dim text across the full width.
///
/// Hints wider than the terminal are cut with `...`. Returns `row + 1`.
pub fn render_footer(
    canvas: &mut Canvas,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = visual_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(padding);
    canvas.push(&help_text);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.push(Theme::reset());
    row + 1
}

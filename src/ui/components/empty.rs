//! Empty state component renderer.
//!
//! Rendered in place of the table when the current view has no rows: no
//! heroes loaded, a name filter without matches, or an id search miss.

use crate::ui::helpers::{visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// Both lines are horizontally centered. The message uses the
/// `empty_state_fg` theme color, and the subtitle uses `text_dim` with dim
/// styling. One blank line is left above the message.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_empty_state(
    canvas: &mut Canvas,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> usize {
    let msg_len = visual_len(&empty.message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    canvas.position_cursor(row + 1, 1);
    canvas.push(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.pad(msg_padding);
    canvas.push(&empty.message);
    canvas.pad(cols.saturating_sub(msg_padding + msg_len));
    canvas.push(Theme::reset());

    let sub_len = visual_len(&empty.subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    canvas.position_cursor(row + 2, 1);
    canvas.push(Theme::dim());
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(sub_padding);
    canvas.push(&empty.subtitle);
    canvas.pad(cols.saturating_sub(sub_padding + sub_len));
    canvas.push(Theme::reset());

    row + 3
}

//! Composable UI component renderers.
//!
//! Each component draws one part of the list screen into a [`Canvas`] and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the page indicator
//! - [`filter_bar`]: Active filter summary and the error/status banner
//! - [`table`]: Hero rows (ID, NAME, REAL NAME, UNIVERSE)
//! - [`empty`]: Empty state message when there are no rows
//! - [`dialog`]: Delete confirmation box
//! - [`footer`]: Command hints

mod dialog;
mod empty;
mod filter_bar;
mod footer;
mod header;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use empty::render_empty_state;
use filter_bar::{render_banner, render_filter_bar};
use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Renders the list screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter bar]          (when a filter is active)
/// [Banner]              (error or status)
/// [Table Headers]       or [Empty state]
/// [Table Rows]
/// [Dialog - 5 lines]    (when confirming a delete)
/// [Border]
/// [Footer]
/// ```
///
/// The border and footer always occupy the last two rows.
pub fn render_list_view(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    if let Some(filters) = &vm.filter_bar {
        current_row = render_filter_bar(canvas, current_row, filters, theme, cols);
    }
    if let Some(banner) = &vm.banner {
        current_row = render_banner(canvas, current_row, banner, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(canvas, current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(canvas, current_row, theme);
        current_row = render_table_rows(canvas, current_row, &vm.rows, theme, cols);
    }

    if let Some(dialog) = &vm.dialog {
        render_dialog(canvas, current_row + 1, dialog, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_start, &vm.footer, theme, cols);
}

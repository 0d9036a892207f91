//! Confirmation dialog renderer.

use crate::ui::helpers::{truncate, visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

/// Horizontal margin for the dialog box (spaces on left and right).
const DIALOG_MARGIN: usize = 5;

/// Renders the bordered confirmation box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 5, the box is five lines tall)
///
/// # Layout
///
/// ```text
/// [margin] ┌─ Confirm Action ───────────┐ [margin]
/// [margin] │ Delete hero BATMAN?        │ [margin]
/// [margin] │                            │ [margin]
/// [margin] │ y: Delete   n: Cancel      │ [margin]
/// [margin] └────────────────────────────┘ [margin]
/// ```
pub fn render_dialog(
    canvas: &mut Canvas,
    row: usize,
    dialog: &DialogInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(DIALOG_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.dialog_border);

    let title = truncate(&format!("─ {} ", dialog.title), inner_width);
    canvas.position_cursor(row, 1);
    canvas.pad(DIALOG_MARGIN);
    canvas.push(&border);
    canvas.push(Theme::bold());
    canvas.push(&format!(
        "┌{title}{}┐",
        "─".repeat(inner_width.saturating_sub(visual_len(&title)))
    ));
    canvas.push(Theme::reset());

    let answers = format!(
        " y: {}   n: {}",
        dialog.confirm_label, dialog.cancel_label
    );
    let body = [format!(" {}", dialog.message), String::new(), answers];
    for (offset, line) in body.iter().enumerate() {
        let line = truncate(line, inner_width);
        canvas.position_cursor(row + 1 + offset, 1);
        canvas.pad(DIALOG_MARGIN);
        canvas.push(&border);
        canvas.push("│");
        canvas.push(&Theme::fg(&theme.colors.text_normal));
        canvas.push(&line);
        canvas.pad(inner_width.saturating_sub(visual_len(&line)));
        canvas.push(&border);
        canvas.push("│");
        canvas.push(Theme::reset());
    }

    canvas.position_cursor(row + 4, 1);
    canvas.pad(DIALOG_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn dialog_shows_texts_inside_box() {
        let dialog = DialogInfo {
            title: "Confirm Action".into(),
            message: "Delete hero BATMAN?".into(),
            confirm_label: "Delete".into(),
            cancel_label: "Cancel".into(),
        };
        let mut canvas = Canvas::new();
        let next = render_dialog(&mut canvas, 4, &dialog, &Theme::default(), 50);
        assert_eq!(next, 9);

        let visible = strip_ansi(canvas.as_str());
        assert!(visible.contains("┌─ Confirm Action "));
        assert!(visible.contains("│ Delete hero BATMAN?"));
        assert!(visible.contains("y: Delete   n: Cancel"));
        assert_eq!(visible.matches('│').count(), 6);
    }
}

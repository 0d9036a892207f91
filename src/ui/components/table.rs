//! Table component renderer.
//!
//! Renders the current page of heroes as a four-column table (ID, NAME,
//! REAL NAME, UNIVERSE) with name-filter match highlighting and the pending
//! delete target shown as the selected row.

use crate::ui::helpers::{self, truncate, visual_len, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeroRow;

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 22;
const REAL_NAME_WIDTH: usize = 24;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(canvas: &mut Canvas, row: usize, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    canvas.push(&format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<REAL_NAME_WIDTH$}{}",
        "ID", "NAME", "REAL NAME", "UNIVERSE"
    ));
    canvas.push(Theme::reset());
    row + 1
}

/// Renders all rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(
    canvas: &mut Canvas,
    row: usize,
    rows: &[HeroRow],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for hero in rows {
        current_row = render_table_row(canvas, current_row, hero, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights on the name (unless selected or truncated)
/// 3. Universe color on the last column
///
/// The row is padded to the full terminal width so the selection background
/// covers it.
fn render_table_row(
    canvas: &mut Canvas,
    row: usize,
    hero: &HeroRow,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.position_cursor(row, 1);

    let base = if hero.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    canvas.push(&base);

    let id = format!("{:<ID_WIDTH$}", hero.id);
    canvas.push(&id);

    let name = truncate(&hero.name, NAME_WIDTH - 2);
    let ranges = if name == hero.name { hero.highlight_ranges.as_slice() } else { &[] };
    helpers::render_highlighted_text(canvas, &name, ranges, theme, hero.is_selected);
    canvas.push(&base);
    let name_len = visual_len(&name);
    canvas.pad(NAME_WIDTH - name_len);

    let real_name = truncate(&hero.real_name, REAL_NAME_WIDTH - 2);
    let real_name_len = visual_len(&real_name);
    canvas.push(&real_name);
    canvas.pad(REAL_NAME_WIDTH - real_name_len);

    if !hero.is_selected {
        canvas.push(&Theme::fg(theme.colors.universe(hero.universe)));
    }
    let universe = hero.universe.as_str();
    canvas.push(universe);

    let line_len = visual_len(&id) + NAME_WIDTH + REAL_NAME_WIDTH + universe.len();
    canvas.pad(cols.saturating_sub(line_len));

    canvas.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Universe;
    use crate::ui::helpers::strip_ansi;

    fn row(name: &str, ranges: Vec<(usize, usize)>) -> HeroRow {
        HeroRow {
            id: 7,
            name: name.to_string(),
            real_name: "Diana Prince".to_string(),
            universe: Universe::Dc,
            is_selected: false,
            highlight_ranges: ranges,
        }
    }

    #[test]
    fn columns_line_up_with_headers() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        let next = render_table_headers(&mut canvas, 1, &theme);
        render_table_rows(&mut canvas, next, &[row("WONDER WOMAN", vec![(7, 10)])], &theme, 80);

        let visible = strip_ansi(canvas.as_str());
        let header_col = visible.find("REAL NAME").unwrap();
        let row_text = &visible[visible.find("7 ").unwrap()..];
        assert_eq!(row_text.find("Diana Prince").unwrap(), header_col);
        assert!(row_text.contains("DC"));
    }

    #[test]
    fn long_names_are_truncated_without_highlights() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        let long = "A VERY LONG HERO NAME INDEED";
        render_table_rows(&mut canvas, 1, &[row(long, vec![(0, 4)])], &theme, 80);

        assert!(strip_ansi(canvas.as_str()).contains("A VERY LONG HERO ..."));
        assert!(!canvas.as_str().contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_row_uses_selection_colors() {
        let theme = Theme::default();
        let mut hero = row("BATMAN", vec![]);
        hero.is_selected = true;
        let mut canvas = Canvas::new();
        render_table_rows(&mut canvas, 1, &[hero], &theme, 80);
        assert!(canvas.as_str().contains(&Theme::bg(&theme.colors.selection_bg)));
    }
}

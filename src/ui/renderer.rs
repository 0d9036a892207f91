//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform [`App`] into [`UIViewModel`]
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! The frame is returned as a string so the caller decides where it goes;
//! the binary clears the screen and writes it to stdout.

use crate::app::App;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders one frame for the application state.
///
/// # Parameters
///
/// * `app` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// ANSI-styled text with absolute cursor positioning. Does not clear the
/// screen; prefix [`CLEAR_SCREEN`] for that.
#[must_use]
pub fn render(app: &App, rows: usize, cols: usize) -> String {
    let viewmodel = app.compute_viewmodel();
    render_viewmodel(&viewmodel, app.theme(), rows, cols)
}

/// Renders a view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    components::render_list_view(&mut canvas, vm, theme, cols, rows);
    canvas.into_string()
}

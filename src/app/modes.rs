//! Input mode state for the application.
//!
//! The mode decides how an input line is read:
//! - **Normal**: list commands (paging, filters, add/edit/delete)
//! - **`ConfirmDelete`**: the delete prompt is open; only yes/no is accepted

/// Current input handling mode.
///
/// Controls which commands are accepted and the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,

    /// A delete confirmation is open.
    ConfirmDelete,
}

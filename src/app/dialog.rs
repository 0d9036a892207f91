//! Confirmation dialog contract.
//!
//! The list view only needs to open and close a dialog; how it is shown is up
//! to the surface. The terminal binary uses [`PromptDialog`], which turns the
//! next input line into a yes/no answer.

/// Texts shown by a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            message: "Are you sure you want to proceed?".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

impl DialogText {
    /// Texts for deleting the hero called `name`.
    #[must_use]
    pub fn delete_hero(name: &str) -> Self {
        Self {
            title: "Delete Hero".to_string(),
            message: format!("Are you sure you want to delete {name}?"),
            confirm_label: "Delete".to_string(),
            ..Self::default()
        }
    }
}

/// A modal yes/no dialog.
pub trait ConfirmationDialog {
    fn open(&mut self);
    fn close(&mut self);
}

/// Line-prompt dialog used by the terminal binary.
#[derive(Debug, Clone, Default)]
pub struct PromptDialog {
    pub text: DialogText,
    open: bool,
}

impl PromptDialog {
    #[must_use]
    pub fn new(text: DialogText) -> Self {
        Self { text, open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

impl ConfirmationDialog for PromptDialog {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Interprets a line typed while a dialog is open.
///
/// Returns `Some(true)` to confirm, `Some(false)` to cancel and `None` for
/// anything else.
#[must_use]
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

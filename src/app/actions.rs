//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! binary's main loop executes them in order. State changes happen inside the
//! handler, actions only cover what the terminal itself must do.

use crate::app::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the main loop.
    Quit,

    /// The active screen changed; the runtime updates the terminal title.
    Navigate(Route),
}

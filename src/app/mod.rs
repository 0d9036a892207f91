//! Application layer coordinating state, events, and actions.
//!
//! Sits between the terminal runtime (main.rs) and the state service. The
//! controllers here hold view-local state; the service owns the hero list.
//!
//! # Architecture
//!
//! ```text
//! Input line → parse_command → Event → handle_event → State Mutations → Actions
//!                                 ↑
//!     NameFilter::next_change ────┤
//!     service list changes ───────┘
//! ```
//!
//! # Modules
//!
//! - [`list`]: List view controller (filtering, pagination, delete workflow)
//! - [`filters`]: Debounced name filter and id filter inputs
//! - [`form`]: Create/edit form controller
//! - [`dialog`]: Confirmation dialog contract
//! - [`routes`]: Navigation targets
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Command parsing and event processing
//! - [`modes`]: Input mode state
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod dialog;
pub mod filters;
pub mod form;
pub mod handler;
pub mod list;
pub mod modes;
pub mod routes;
pub mod state;

pub use actions::Action;
pub use dialog::{ConfirmationDialog, DialogText, PromptDialog};
pub use filters::{FilterEvent, IdFilter, NameFilter, NameInput, DEFAULT_DEBOUNCE};
pub use form::{Field, FormMode, HeroForm};
pub use handler::{handle_event, parse_command, Event, FormInput};
pub use list::{DeleteTarget, HeroListController, DEFAULT_PAGE_SIZE};
pub use modes::InputMode;
pub use routes::Route;
pub use state::App;

//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`App::compute_viewmodel`](crate::app::App::compute_viewmodel) and consumed
//! by the renderer. They contain no business logic, only display-ready data
//! such as pre-computed highlight ranges and page labels.
//!
//! # Example
//!
//! ```rust
//! use hero_catalog::domain::Universe;
//! use hero_catalog::ui::viewmodel::{FooterInfo, HeaderInfo, HeroRow, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![HeroRow {
//!         id: 1,
//!         name: "SUPERMAN".to_string(),
//!         real_name: "Clark Kent".to_string(),
//!         universe: Universe::Dc,
//!         is_selected: false,
//!         highlight_ranges: vec![(0, 5)],
//!     }],
//!     header: HeaderInfo { title: " Heroes (1) ".to_string(), page: "1/1".to_string() },
//!     filter_bar: None,
//!     banner: None,
//!     dialog: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

use crate::domain::{HeroId, Universe};

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the current page.
    pub rows: Vec<HeroRow>,

    pub header: HeaderInfo,

    /// Present while a name filter or id search is active.
    pub filter_bar: Option<FilterBarInfo>,

    /// Error or status line shown under the header.
    pub banner: Option<Banner>,

    /// Present while a delete confirmation is open.
    pub dialog: Option<DialogInfo>,

    pub footer: FooterInfo,

    /// Shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRow {
    pub id: HeroId,
    pub name: String,
    pub real_name: String,
    pub universe: Universe,

    /// Whether this row is the pending delete target.
    pub is_selected: bool,

    /// Character ranges of the name matched by the name filter.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Title line, e.g. `" Heroes (10) "` with page `"1/2"`.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub page: String,
}

/// Summary of the active filters.
#[derive(Debug, Clone, Default)]
pub struct FilterBarInfo {
    /// Current name filter text; empty when unset.
    pub name_query: String,
    /// Text typed into the id search.
    pub id_query: Option<String>,
    /// An id search is in flight.
    pub searching: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Confirmation prompt texts.
#[derive(Debug, Clone)]
pub struct DialogInfo {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command help text (e.g., "n/p: page | /text: filter | q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No heroes found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

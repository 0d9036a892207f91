//! Terminal rendering of the hero list.
//!
//! Nothing here reads application state directly. The app builds a
//! [`UIViewModel`] per frame; the renderer lays it out on a [`helpers::Canvas`]
//! and returns the frame as a string of ANSI escapes for the runtime to write.
//!
//! ```text
//! App::compute_viewmodel ─▶ UIViewModel ─▶ renderer ─▶ components ─▶ String
//!                                              ▲
//!                                            Theme
//! ```
//!
//! [`components`] holds one renderer per screen region, [`helpers`] the frame
//! buffer and text measuring, [`theme`] the palettes.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, CLEAR_SCREEN};
pub use theme::Theme;
pub use viewmodel::{
    Banner, BannerKind, DialogInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, HeroRow,
    UIViewModel,
};

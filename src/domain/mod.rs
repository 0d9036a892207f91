//! Domain layer for the hero catalog.
//!
//! This module contains the core domain types, independent of storage, the
//! simulated backend, or the terminal surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`hero`]: Hero record, draft, universe and page types
//!
//! # Examples
//!
//! ```
//! use hero_catalog::domain::{HeroDraft, Result, Universe};
//!
//! fn draft() -> Result<HeroDraft> {
//!     Ok(HeroDraft::new("STORM", "Ororo Munroe", Universe::Marvel))
//! }
//! ```

pub mod error;
pub mod hero;

pub use error::{CatalogError, Result};
pub use hero::{HeroDraft, HeroId, HeroPage, HeroRecord, Universe};

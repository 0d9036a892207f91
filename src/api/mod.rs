//! Record store: the backend the state service talks to.
//!
//! [`HeroApi`] is the in-process stand-in for a remote CRUD service. The
//! only implementation shipped is [`SimulatedHeroApi`], an in-memory list
//! with artificial latency. Tests inject `MockHeroApi` (generated by
//! `mockall`) to script failures and count calls.
//!
//! # Modules
//!
//! - `latency`: Per-operation delay ranges and the latency profile
//! - `simulated`: In-memory store seeded with the default heroes

pub mod latency;
pub mod simulated;

pub use latency::{LatencyProfile, Operation};
pub use simulated::{seed_heroes, SimulatedHeroApi};

use crate::domain::error::Result;
use crate::domain::{HeroDraft, HeroId, HeroPage, HeroRecord};
use async_trait::async_trait;

/// Asynchronous CRUD contract of the record store.
///
/// Reads return copies; only [`create`](HeroApi::create),
/// [`update`](HeroApi::update) and [`delete`](HeroApi::delete) mutate.
/// Concurrent mutations are not coordinated: overlapping calls apply in
/// completion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroApi: Send + Sync {
    /// Returns every record in store order.
    async fn list_all(&self) -> Result<Vec<HeroRecord>>;

    /// Linear search by id.
    async fn get_by_id(&self, id: HeroId) -> Result<Option<HeroRecord>>;

    /// Case-insensitive substring match on `name` or `real_name`.
    ///
    /// A query that is empty after trimming returns every record.
    async fn list_by_name_match(&self, query: String) -> Result<Vec<HeroRecord>>;

    /// Appends a record with id `max(existing) + 1`, or `1` when empty.
    async fn create(&self, draft: HeroDraft) -> Result<HeroRecord>;

    /// Replaces the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`](crate::CatalogError::NotFound) if no record has that id.
    async fn update(&self, record: HeroRecord) -> Result<HeroRecord>;

    /// Removes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`](crate::CatalogError::NotFound) if no record has that id.
    async fn delete(&self, id: HeroId) -> Result<()>;

    /// Returns the 1-based `page` of `limit` records.
    ///
    /// Pages past the end yield an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`](crate::CatalogError::InvalidArgument)
    /// when `page` or `limit` is zero.
    async fn list_paginated(&self, page: usize, limit: usize) -> Result<HeroPage>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize>;
}

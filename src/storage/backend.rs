//! Durable key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait: the injected capability
//! through which the state service and the name filter persist values across
//! runs. Components depend on this abstraction rather than a global, so tests
//! substitute an in-memory or mocked backend.
//!
//! # Design Philosophy
//!
//! The trait mirrors browser local storage: string keys, string values, and
//! three operations. Serialization of structured values is the caller's job.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// Methods take `&self`; implementations use interior mutability so one store
/// can be shared behind an `Arc` by several components.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON document on disk with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process-lifetime map for tests and ephemeral runs
///
/// # Examples
///
/// ```
/// use hero_catalog::storage::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::default();
/// store.set("hero-name-filter", "bat")?;
/// assert_eq!(store.get("hero-name-filter")?, Some("bat".to_string()));
/// store.remove("hero-name-filter")?;
/// assert_eq!(store.get("hero-name-filter")?, None);
/// # Ok::<(), hero_catalog::CatalogError>(())
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<()>;
}

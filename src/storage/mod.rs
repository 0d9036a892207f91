//! Durable key-value storage for the hero cache and the saved name filter.
//!
//! This module provides the storage abstraction injected into the state
//! service and the name filter. Two backends exist: a JSON document on disk
//! (the default for the terminal binary) and an in-memory map.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

#[cfg(test)]
pub use backend::MockKeyValueStore;

/// Key holding the cached hero list as a JSON array.
pub const HEROES_KEY: &str = "super-heroes";

/// Key holding the last emitted name filter.
pub const NAME_FILTER_KEY: &str = "hero-name-filter";

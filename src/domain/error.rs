//! Error types for the hero catalog.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use crate::domain::hero::HeroId;
use thiserror::Error;

/// The main error type for hero catalog operations.
///
/// Variants fall into three groups:
/// - **Record store**: [`NotFound`](Self::NotFound), [`Remote`](Self::Remote),
///   [`InvalidArgument`](Self::InvalidArgument)
/// - **Durable storage**: [`Storage`](Self::Storage), [`Io`](Self::Io),
///   [`Json`](Self::Json)
/// - **Surface**: [`Validation`](Self::Validation), [`Config`](Self::Config),
///   [`Theme`](Self::Theme)
///
/// # Examples
///
/// ```
/// use hero_catalog::CatalogError;
///
/// let err = CatalogError::NotFound { id: 7 };
/// assert_eq!(err.to_string(), "Hero with id 7 not found");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The update or delete target does not exist in the record store.
    #[error("Hero with id {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: HeroId,
    },

    /// The record store rejected an operation.
    #[error("Remote error: {0}")]
    Remote(String),

    /// An argument was outside the accepted domain (e.g. page 0).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading from or writing to the durable key-value storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Form input failed validation.
    ///
    /// Carries one message per offending field.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for hero catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

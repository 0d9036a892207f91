//! hero-catalog: a terminal hero catalog over a simulated remote store.
//!
//! The catalog lists heroes page by page, filters them by name (debounced and
//! remembered across restarts) or looks one up by id, and creates, edits and
//! deletes records. Reads go through a durable read-through cache; every
//! backend call carries simulated latency.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - List controller, filters, form, dialog           │
//! │  - Command parsing and event handling               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌─────────────────────────────────┐
//! │ UI Layer      │   │ State Service (service/)        │
//! │ (ui/)         │   │ - Shared hero list, loading,    │
//! │ - Rendering   │   │   error message (watch channels)│
//! │ - Theming     │   │ - Read-through cache            │
//! └───────────────┘   └─────────────────────────────────┘
//!                          │                    │
//!               ┌───────────────────┐  ┌───────────────────┐
//!               │ Record Store      │  │ Storage Layer     │
//!               │ (api/)            │  │ (storage/)        │
//!               │ - Simulated latency│ │ - JSON file / mem │
//!               └───────────────────┘  └───────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Record store trait and the simulated backend
//! - [`service`]: Cache-coordinating state service
//! - [`app`]: Controllers, event handling and application state
//! - [`domain`]: Core domain types (heroes, errors)
//! - [`storage`]: Durable key-value storage backends
//! - [`infrastructure`]: Platform paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based structured logging
//!
//! # Configuration
//!
//! Read from `~/.config/hero-catalog/config.toml` (platform equivalent
//! elsewhere). Every key is optional:
//!
//! ```toml
//! data_dir = "~/.local/share/hero-catalog"
//! page_size = 5
//! debounce_ms = 300
//! simulate_latency = true
//! theme = "catppuccin-mocha"
//! theme_file = "/path/to/theme.toml"
//! log_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use hero_catalog::api::{LatencyProfile, SimulatedHeroApi};
//! use hero_catalog::service::HeroService;
//! use hero_catalog::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let service = HeroService::new(
//!     Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
//!     Arc::new(MemoryStore::default()),
//! );
//! service.load_heroes().await;
//! assert_eq!(service.heroes_snapshot().len(), 10);
//! # });
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod service;
pub mod storage;
pub mod ui;

pub use app::{handle_event, parse_command, Action, App, Event, InputMode};
pub use domain::{CatalogError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration loaded from `config.toml`.
///
/// Missing keys take their defaults.
///
/// # Example
///
/// ```rust
/// use hero_catalog::Config;
///
/// let config = Config::from_toml_str("page_size = 8\nsimulate_latency = false").unwrap();
/// assert_eq!(config.page_size, 8);
/// assert!(!config.simulate_latency);
/// assert_eq!(config.debounce_ms, 300);
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory for `storage.json` and the log file.
    ///
    /// Default: the platform data directory plus `hero-catalog`.
    pub data_dir: Option<PathBuf>,

    /// Rows per list page. Default: 5
    pub page_size: usize,

    /// Quiet period before a typed name filter is applied. Default: 300
    pub debounce_ms: u64,

    /// Whether backend calls sleep for a realistic random delay. Default: true
    pub simulate_latency: bool,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`.
    /// Ignored if `theme_file` loads.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Log filter (`trace`, `debug`, `info`, ...). `RUST_LOG` wins. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: app::DEFAULT_PAGE_SIZE,
            debounce_ms: 300,
            simulate_latency: true,
            theme: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for invalid TOML, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Reads the configuration file at `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(CatalogError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Reads the platform configuration file.
    ///
    /// # Errors
    ///
    /// See [`load_from`](Self::load_from).
    pub fn load() -> Result<Self> {
        infrastructure::config_file().map_or_else(|| Ok(Self::default()), |path| Self::load_from(&path))
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        infrastructure::data_dir(self.data_dir.as_deref())
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let file = self.theme_file.as_deref().map(infrastructure::expand_tilde);
        Theme::resolve(self.theme.as_deref(), file.as_deref())
    }
}

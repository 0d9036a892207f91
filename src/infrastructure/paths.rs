//! Filesystem locations for storage, logs and configuration.
//!
//! Locations follow the platform conventions reported by the `dirs` crate:
//!
//! | What | Linux default |
//! |------|---------------|
//! | storage | `~/.local/share/hero-catalog/storage.json` |
//! | log | `~/.local/share/hero-catalog/hero-catalog.log` |
//! | config | `~/.config/hero-catalog/config.toml` |
//!
//! The data directory can be overridden from the configuration file.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "hero-catalog";

/// Returns the data directory, honoring an override.
///
/// Falls back to the current directory when the platform has no data
/// directory (e.g. `HOME` unset).
#[must_use]
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return expand_tilde(dir);
    }
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR))
}

/// Path of the configuration file, if the platform has a config directory.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

#[must_use]
pub fn storage_file(data_dir: &Path) -> PathBuf {
    data_dir.join("storage.json")
}

#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join("hero-catalog.log")
}

/// Expands a leading `~` to the home directory.
///
/// # Examples
///
/// ```
/// use hero_catalog::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), Path::new("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde(Path::new("~/heroes")), home.join("heroes"));
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

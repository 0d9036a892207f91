//! Filter input widgets feeding the list view.
//!
//! Two independent inputs sit above the hero table:
//!
//! - [`NameFilter`]: free text, debounced and deduplicated, persisted under
//!   the `hero-name-filter` key so the last filter survives a restart.
//! - [`IdFilter`]: a numeric id, searched on demand and never debounced.
//!
//! # Debounce model
//!
//! Keystrokes go into a `watch` channel through [`NameInput`]. The consumer
//! awaits [`NameFilter::next_change`], which resolves once the input has been
//! quiet for the debounce window and differs from the last emitted value.
//!
//! ```text
//! b ──100ms── ba ──100ms── bat ──────300ms──────▶ emit "bat"
//! ```

use crate::domain::HeroId;
use crate::domain::error::{CatalogError, Result};
use crate::storage::{KeyValueStore, NAME_FILTER_KEY};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default quiet period before a name filter is emitted.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Event emitted by the id filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    /// Look up the hero with this id.
    Search(HeroId),
    /// Drop the id search and fall back to the name-filtered list.
    Clear,
}

/// Writable handle onto the name filter's input.
///
/// Cheap to clone; every clone feeds the same filter.
#[derive(Debug, Clone)]
pub struct NameInput {
    tx: Arc<watch::Sender<String>>,
}

impl NameInput {
    /// Replaces the current input text.
    pub fn set(&self, text: impl Into<String>) {
        self.tx.send_replace(text.into());
    }
}

/// Debounced, persisted free-text filter.
pub struct NameFilter {
    storage: Arc<dyn KeyValueStore>,
    input: NameInput,
    rx: watch::Receiver<String>,
    debounce: Duration,
    /// Last value handed to the consumer.
    current: String,
    /// A change was observed but not yet emitted.
    pending: bool,
    /// Saved value waiting to be emitted once after construction.
    restored: Option<String>,
}

impl NameFilter {
    /// Creates the filter, restoring a previously saved value.
    ///
    /// A non-empty saved value becomes the current input and is returned by the
    /// first call to [`next_change`](Self::next_change) without waiting.
    pub fn new(storage: Arc<dyn KeyValueStore>, debounce: Duration) -> Self {
        let saved = match storage.get(NAME_FILTER_KEY) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved name filter");
                String::new()
            }
        };

        let (tx, rx) = watch::channel(saved.clone());
        let restored = (!saved.is_empty()).then(|| saved.clone());
        if let Some(saved) = &restored {
            tracing::debug!(filter = %saved, "restored saved name filter");
        }

        Self {
            storage,
            input: NameInput { tx: Arc::new(tx) },
            rx,
            debounce,
            current: saved,
            pending: false,
            restored,
        }
    }

    /// Handle for feeding keystrokes while [`next_change`](Self::next_change) is pending.
    #[must_use]
    pub fn input(&self) -> NameInput {
        self.input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.input.set(text);
    }

    /// Last emitted filter value.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Waits for the next debounced, distinct filter value.
    ///
    /// Each emitted value is persisted (an empty value removes the key).
    /// Cancel-safe: dropping the future keeps a pending change for the next call.
    /// Returns `None` if the input channel closes.
    pub async fn next_change(&mut self) -> Option<String> {
        if let Some(saved) = self.restored.take() {
            return Some(saved);
        }

        let quiet = self.debounce;
        loop {
            if !self.pending {
                self.rx.changed().await.ok()?;
                self.pending = true;
            }

            loop {
                tokio::select! {
                    () = tokio::time::sleep(quiet) => break,
                    changed = self.rx.changed() => changed.ok()?,
                }
            }

            self.pending = false;
            let value = self.rx.borrow_and_update().clone();
            if value == self.current {
                tracing::trace!(filter = %value, "name filter unchanged");
                continue;
            }

            tracing::debug!(filter = %value, "name filter changed");
            self.persist(&value);
            self.current.clone_from(&value);
            return Some(value);
        }
    }

    /// Clears the input and forgets the saved value.
    pub fn reset(&mut self) {
        self.input.set(String::new());
        self.restored = None;
        if let Err(e) = self.storage.remove(NAME_FILTER_KEY) {
            tracing::warn!(error = %e, "failed to remove saved name filter");
        }
    }

    fn persist(&self, value: &str) {
        let result = if value.is_empty() {
            self.storage.remove(NAME_FILTER_KEY)
        } else {
            self.storage.set(NAME_FILTER_KEY, value)
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to save name filter");
        }
    }
}

impl std::fmt::Debug for NameFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameFilter")
            .field("current", &self.current)
            .field("debounce", &self.debounce)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// On-demand exact id lookup.
#[derive(Debug, Default, Clone)]
pub struct IdFilter {
    value: Option<HeroId>,
}

impl IdFilter {
    /// Parses typed text into the pending id. Blank text clears it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if the text is not an unsigned integer.
    pub fn set_input(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        self.value = if text.is_empty() {
            None
        } else {
            Some(text.parse().map_err(|_| {
                CatalogError::InvalidArgument(format!("'{text}' is not a hero id"))
            })?)
        };
        Ok(())
    }

    /// Emits a search for the pending id. Nothing is emitted for an absent or zero id.
    #[must_use]
    pub fn search(&self) -> Option<FilterEvent> {
        self.value.filter(|id| *id > 0).map(FilterEvent::Search)
    }

    /// Empties the input and emits [`FilterEvent::Clear`].
    pub fn clear(&mut self) -> FilterEvent {
        self.value = None;
        FilterEvent::Clear
    }

    #[must_use]
    pub const fn current_id(&self) -> Option<HeroId> {
        self.value
    }
}

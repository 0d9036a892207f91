//! Live projections over the service's hero list.

use crate::domain::HeroRecord;
use std::fmt;
use tokio::sync::watch;

type Projection<T> = Box<dyn Fn(&[HeroRecord]) -> T + Send + Sync>;

/// A value computed from the current hero list on every read.
///
/// The view keeps its own subscription, so [`get`](Self::get) always reflects
/// the latest list and [`changed`](Self::changed) wakes on the next mutation.
pub struct DerivedView<T> {
    source: watch::Receiver<Vec<HeroRecord>>,
    project: Projection<T>,
}

impl<T> DerivedView<T> {
    pub(crate) fn new(
        source: watch::Receiver<Vec<HeroRecord>>,
        project: impl Fn(&[HeroRecord]) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            source,
            project: Box::new(project),
        }
    }

    /// Recomputes the projection from the latest list.
    pub fn get(&mut self) -> T {
        let heroes = self.source.borrow_and_update();
        (self.project)(&heroes)
    }

    /// Waits until the underlying list changes.
    ///
    /// Returns `false` once the owning service has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.source.changed().await.is_ok()
    }
}

impl<T> fmt::Debug for DerivedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedView")
            .field("len", &self.source.borrow().len())
            .finish_non_exhaustive()
    }
}

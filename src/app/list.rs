//! List view controller.
//!
//! [`HeroListController`] composes the service's hero list with the two
//! filter inputs and local pagination, and drives the delete workflow.
//!
//! # Display precedence
//!
//! 1. An id search that found a hero shows exactly that hero on one page.
//! 2. An id search that completed without a hit shows nothing.
//! 3. Otherwise the name-filtered list is shown, `page_size` rows per page.
//!
//! # Synchronization
//!
//! The controller keeps copies of the service's list and loading flag.
//! [`sync`](HeroListController::sync) adopts a changed service list into both
//! `heroes` and `filtered_heroes`; every operation syncs first, so mutations
//! made elsewhere (for instance by the form) show up without a refetch.

use crate::app::dialog::ConfirmationDialog;
use crate::app::filters::FilterEvent;
use crate::domain::{HeroId, HeroRecord};
use crate::service::HeroService;
use std::sync::Arc;
use tokio::sync::watch;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Hero awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: HeroId,
    pub name: String,
}

#[derive(Debug)]
pub struct HeroListController {
    service: Arc<HeroService>,
    heroes_rx: watch::Receiver<Vec<HeroRecord>>,
    loading_rx: watch::Receiver<bool>,

    current_page: usize,
    page_size: usize,

    heroes: Vec<HeroRecord>,
    filtered_heroes: Vec<HeroRecord>,

    found_hero_by_id: Option<HeroRecord>,
    is_id_searching: bool,
    id_search_completed: bool,

    is_loading: bool,
    is_deleting: bool,
    delete_target: Option<DeleteTarget>,
}

impl HeroListController {
    /// Creates a controller over `service` with `page_size` rows per page.
    ///
    /// A zero page size falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(service: Arc<HeroService>, page_size: usize) -> Self {
        let mut heroes_rx = service.heroes();
        let mut loading_rx = service.is_loading();
        let heroes = heroes_rx.borrow_and_update().clone();
        let is_loading = *loading_rx.borrow_and_update();

        Self {
            service,
            heroes_rx,
            loading_rx,
            current_page: 0,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            filtered_heroes: heroes.clone(),
            heroes,
            found_hero_by_id: None,
            is_id_searching: false,
            id_search_completed: false,
            is_loading,
            is_deleting: false,
            delete_target: None,
        }
    }

    /// Adopts the service's latest state.
    ///
    /// Returns `true` if anything visible changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;

        if self.heroes_rx.has_changed().unwrap_or(false) {
            let heroes = self.heroes_rx.borrow_and_update().clone();
            tracing::debug!(count = heroes.len(), "adopting service hero list");
            self.filtered_heroes.clone_from(&heroes);
            self.heroes = heroes;
            changed = true;
        }

        if self.loading_rx.has_changed().unwrap_or(false) {
            self.is_loading = *self.loading_rx.borrow_and_update();
            changed = true;
        }

        changed
    }

    /// Loads heroes through the service and adopts them.
    pub async fn init(&mut self) {
        self.service.load_heroes().await;
        self.sync();
    }

    /// Replaces the filtered list with the store's name search for `filter`.
    ///
    /// Clears any id search and returns to the first page.
    pub async fn on_name_filter(&mut self, filter: &str) {
        self.sync();

        let heroes = self.service.filter_remote(filter).await;

        self.sync();
        self.filtered_heroes = heroes;
        self.found_hero_by_id = None;
        self.id_search_completed = false;
        self.current_page = 0;
        tracing::debug!(filter = %filter, count = self.filtered_heroes.len(), "name filter applied");
    }

    /// Applies an id filter event.
    pub async fn on_id_filter(&mut self, event: FilterEvent) {
        self.sync();
        match event {
            FilterEvent::Search(id) => {
                self.is_id_searching = true;
                self.id_search_completed = false;

                let hero = self.service.fetch_by_id(id).await;

                self.sync();
                tracing::debug!(id, found = hero.is_some(), "id search completed");
                if hero.is_some() {
                    self.current_page = 0;
                }
                self.found_hero_by_id = hero;
                self.is_id_searching = false;
                self.id_search_completed = true;
            }
            FilterEvent::Clear => {
                self.found_hero_by_id = None;
                self.id_search_completed = false;
                self.current_page = 0;
            }
        }
    }

    /// The full set selected by the display precedence, before pagination.
    #[must_use]
    pub fn display_heroes(&self) -> Vec<HeroRecord> {
        if let Some(hero) = &self.found_hero_by_id {
            return vec![hero.clone()];
        }
        if self.id_search_completed {
            return Vec::new();
        }
        self.filtered_heroes.clone()
    }

    /// Number of pages: 1 for an id hit, otherwise `ceil(filtered / page_size)`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.found_hero_by_id.is_some() {
            return 1;
        }
        self.filtered_heroes.len().div_ceil(self.page_size)
    }

    /// Rows of the current page.
    #[must_use]
    pub fn paginated_heroes(&self) -> Vec<HeroRecord> {
        if let Some(hero) = &self.found_hero_by_id {
            return vec![hero.clone()];
        }
        if self.id_search_completed {
            return Vec::new();
        }
        self.filtered_heroes
            .iter()
            .skip(self.current_page * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page + 1 < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Goes back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Remembers the hero to delete and opens `dialog`.
    pub fn open_delete_dialog(
        &mut self,
        id: HeroId,
        name: impl Into<String>,
        dialog: &mut dyn ConfirmationDialog,
    ) {
        let name = name.into();
        tracing::debug!(id, name = %name, "delete requested");
        self.delete_target = Some(DeleteTarget { id, name });
        dialog.open();
    }

    /// Deletes the pending target.
    ///
    /// Failures are logged and leave the target in place. Either way the
    /// deleting flag is cleared and the view returns to the first page.
    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.clone() else {
            tracing::debug!("confirm without delete target");
            return;
        };

        self.is_deleting = true;
        match self.service.remove_by_id(target.id).await {
            Ok(()) => self.delete_target = None,
            Err(e) => tracing::error!(error = %e, id = target.id, "error deleting hero"),
        }
        self.is_deleting = false;
        self.current_page = 0;
        self.sync();
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Drops the cached list and reloads it from the store.
    ///
    /// Any id search is dropped; the reloaded list is unfiltered until the
    /// caller applies its name filter again.
    pub async fn reset_cache(&mut self) {
        self.service.reset_cache();
        self.sync();
        self.current_page = 0;
        self.found_hero_by_id = None;
        self.is_id_searching = false;
        self.id_search_completed = false;
        self.init().await;
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn heroes(&self) -> &[HeroRecord] {
        &self.heroes
    }

    #[must_use]
    pub fn filtered_heroes(&self) -> &[HeroRecord] {
        &self.filtered_heroes
    }

    #[must_use]
    pub const fn found_hero_by_id(&self) -> Option<&HeroRecord> {
        self.found_hero_by_id.as_ref()
    }

    #[must_use]
    pub const fn is_id_searching(&self) -> bool {
        self.is_id_searching
    }

    #[must_use]
    pub const fn id_search_completed(&self) -> bool {
        self.id_search_completed
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    #[must_use]
    pub const fn delete_target(&self) -> Option<&DeleteTarget> {
        self.delete_target.as_ref()
    }

    #[must_use]
    pub fn service(&self) -> &Arc<HeroService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{seed_heroes, LatencyProfile, MockHeroApi, SimulatedHeroApi};
    use crate::app::dialog::PromptDialog;
    use crate::domain::{CatalogError, HeroDraft, Universe};
    use crate::storage::MemoryStore;

    async fn controller() -> HeroListController {
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
            Arc::new(MemoryStore::default()),
        ));
        let mut list = HeroListController::new(service, DEFAULT_PAGE_SIZE);
        list.init().await;
        list
    }

    fn names(heroes: &[HeroRecord]) -> Vec<&str> {
        heroes.iter().map(|h| h.name.as_str()).collect()
    }

    #[tokio::test]
    async fn init_adopts_service_list() {
        let list = controller().await;
        assert_eq!(list.heroes().len(), 10);
        assert_eq!(list.filtered_heroes().len(), 10);
        assert!(!list.is_loading());
        assert_eq!(list.total_pages(), 2);
        assert_eq!(
            names(&list.paginated_heroes()),
            ["SUPERMAN", "BATMAN", "SPIDERMAN", "IRON MAN", "THE FLASH"]
        );
    }

    #[tokio::test]
    async fn paging_stops_at_bounds() {
        let mut list = controller().await;
        list.prev_page();
        assert_eq!(list.current_page(), 0);

        list.next_page();
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.paginated_heroes()[0].name, "WONDER WOMAN");

        list.next_page();
        assert_eq!(list.current_page(), 1);
    }

    #[tokio::test]
    async fn name_filter_replaces_list_and_resets_page() {
        let mut list = controller().await;
        list.next_page();

        list.on_name_filter("man").await;

        assert_eq!(list.current_page(), 0);
        // BLACK WIDOW matches on her real name, Natasha Romanoff.
        assert_eq!(list.filtered_heroes().len(), 7);
        assert_eq!(list.total_pages(), 2);

        list.on_name_filter("").await;
        assert_eq!(list.filtered_heroes().len(), 10);
    }

    #[tokio::test]
    async fn id_search_hit_shows_single_hero() {
        let mut list = controller().await;
        list.next_page();

        list.on_id_filter(FilterEvent::Search(8)).await;

        assert_eq!(list.found_hero_by_id().map(|h| h.name.as_str()), Some("THOR"));
        assert!(list.id_search_completed());
        assert!(!list.is_id_searching());
        assert_eq!(names(&list.display_heroes()), ["THOR"]);
        assert_eq!(names(&list.paginated_heroes()), ["THOR"]);
        assert_eq!(list.total_pages(), 1);
        assert_eq!(list.current_page(), 0);
    }

    #[tokio::test]
    async fn id_search_miss_shows_nothing() {
        let mut list = controller().await;
        list.next_page();

        list.on_id_filter(FilterEvent::Search(99999)).await;

        assert_eq!(list.found_hero_by_id(), None);
        assert!(list.id_search_completed());
        assert!(list.display_heroes().is_empty());
        assert!(list.paginated_heroes().is_empty());
        assert_eq!(list.current_page(), 1);
    }

    #[tokio::test]
    async fn clearing_id_search_restores_name_filtered_view() {
        let mut list = controller().await;
        list.on_name_filter("bat").await;
        list.on_id_filter(FilterEvent::Search(99999)).await;
        assert!(list.display_heroes().is_empty());

        list.on_id_filter(FilterEvent::Clear).await;

        assert_eq!(list.found_hero_by_id(), None);
        assert!(!list.id_search_completed());
        assert_eq!(names(&list.display_heroes()), ["BATMAN"]);
    }

    #[tokio::test]
    async fn name_filter_clears_id_search() {
        let mut list = controller().await;
        list.on_id_filter(FilterEvent::Search(1)).await;
        list.on_name_filter("wonder").await;
        assert_eq!(list.found_hero_by_id(), None);
        assert_eq!(names(&list.display_heroes()), ["WONDER WOMAN"]);
    }

    #[tokio::test]
    async fn external_mutation_is_picked_up_by_sync() {
        let mut list = controller().await;
        list.service()
            .add(HeroDraft::new("STORM", "Ororo Munroe", Universe::Marvel))
            .await
            .unwrap();

        assert!(list.sync());
        assert_eq!(list.heroes().len(), 11);
        assert_eq!(list.filtered_heroes().last().map(|h| h.id), Some(11));
        assert!(!list.sync());
    }

    #[tokio::test]
    async fn delete_workflow_removes_hero_and_resets_page() {
        let mut list = controller().await;
        let mut dialog = PromptDialog::default();
        list.next_page();

        list.open_delete_dialog(2, "BATMAN", &mut dialog);
        assert!(dialog.is_open());
        assert_eq!(list.delete_target().map(|t| t.id), Some(2));

        list.confirm_delete().await;

        assert_eq!(list.delete_target(), None);
        assert!(!list.is_deleting());
        assert_eq!(list.current_page(), 0);
        assert!(list.heroes().iter().all(|h| h.id != 2));
    }

    #[tokio::test]
    async fn failed_delete_is_logged_not_surfaced() {
        let mut api = MockHeroApi::new();
        api.expect_list_all().returning(|| Ok(seed_heroes()));
        api.expect_delete()
            .returning(|_| Err(CatalogError::Remote("API Error".into())));
        let service = Arc::new(HeroService::new(Arc::new(api), Arc::new(MemoryStore::default())));
        let mut list = HeroListController::new(service.clone(), DEFAULT_PAGE_SIZE);
        list.init().await;
        list.next_page();

        list.open_delete_dialog(2, "BATMAN", &mut PromptDialog::default());
        list.confirm_delete().await;

        assert_eq!(list.delete_target().map(|t| t.id), Some(2));
        assert!(!list.is_deleting());
        assert_eq!(list.current_page(), 0);
        assert_eq!(list.heroes().len(), 10);
        assert_eq!(service.error_now().as_deref(), Some("Failed to delete hero"));
    }

    #[tokio::test]
    async fn cancel_delete_clears_target() {
        let mut list = controller().await;
        list.open_delete_dialog(3, "SPIDERMAN", &mut PromptDialog::default());
        list.cancel_delete();
        assert_eq!(list.delete_target(), None);
        assert_eq!(list.heroes().len(), 10);
    }

    #[tokio::test]
    async fn reset_cache_reloads_from_store() {
        let mut list = controller().await;
        list.service().remove_by_id(1).await.unwrap();

        list.reset_cache().await;

        // The store kept the deletion; the reload reflects it.
        assert_eq!(list.heroes().len(), 9);
        assert_eq!(list.filtered_heroes().len(), 9);
    }

    #[tokio::test]
    async fn reset_cache_drops_id_search() {
        let mut list = controller().await;
        list.on_id_filter(FilterEvent::Search(99999)).await;
        assert!(list.display_heroes().is_empty());

        list.reset_cache().await;

        assert!(list.found_hero_by_id().is_none());
        assert!(!list.id_search_completed());
        assert_eq!(list.display_heroes().len(), 10);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        let service = Arc::new(HeroService::new(
            Arc::new(MockHeroApi::new()),
            Arc::new(MemoryStore::default()),
        ));
        let list = HeroListController::new(service, 0);
        assert_eq!(list.page_size(), DEFAULT_PAGE_SIZE);
        assert!(list.is_loading());
        assert_eq!(list.total_pages(), 0);
    }
}

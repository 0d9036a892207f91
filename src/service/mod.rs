//! Cache-coordinating state service.
//!
//! [`HeroService`] owns the canonical application state: the hero list, the
//! loading flag and the last error message. Each lives in a
//! `tokio::sync::watch` channel; views subscribe and copy, never mutate.
//!
//! The service layers a read-through cache (the `super-heroes` key of the
//! injected [`KeyValueStore`]) in front of the [`HeroApi`]. A non-empty cache
//! is authoritative: [`load_heroes`](HeroService::load_heroes) adopts it
//! without touching the store.
//!
//! # Error policy
//!
//! Read paths ([`filter_remote`](HeroService::filter_remote),
//! [`fetch_by_id`](HeroService::fetch_by_id)) record a message and return a
//! fallback. Mutation paths ([`add`](HeroService::add),
//! [`replace`](HeroService::replace), [`remove_by_id`](HeroService::remove_by_id))
//! and [`fetch_paginated`](HeroService::fetch_paginated) record a message and
//! return the original error. Cache failures never fail an operation.

pub mod derived;

pub use derived::DerivedView;

use crate::api::HeroApi;
use crate::domain::error::Result;
use crate::domain::{HeroDraft, HeroId, HeroPage, HeroRecord};
use crate::storage::{KeyValueStore, HEROES_KEY};
use std::sync::Arc;
use tokio::sync::watch;

pub const LOAD_FAILED: &str = "Failed to load heroes";
pub const FILTER_FAILED: &str = "Failed to filter heroes";
pub const FETCH_BY_ID_FAILED: &str = "Failed to get hero by ID";
pub const ADD_FAILED: &str = "Failed to add hero";
pub const UPDATE_FAILED: &str = "Failed to update hero";
pub const DELETE_FAILED: &str = "Failed to delete hero";
pub const PAGINATE_FAILED: &str = "Failed to load paginated heroes";

/// Sets the loading flag on creation and clears it on drop, on every exit path.
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

/// Central state holder for the hero catalog.
///
/// Created with `is_loading = true` and an empty list; call
/// [`load_heroes`](Self::load_heroes) once the runtime is up.
///
/// # Examples
///
/// ```
/// use hero_catalog::api::{LatencyProfile, SimulatedHeroApi};
/// use hero_catalog::service::HeroService;
/// use hero_catalog::storage::MemoryStore;
/// use std::sync::Arc;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let service = HeroService::new(
///     Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
///     Arc::new(MemoryStore::default()),
/// );
/// service.load_heroes().await;
/// assert_eq!(service.heroes_snapshot().len(), 10);
/// assert_eq!(service.by_id(2).get().unwrap().name, "BATMAN");
/// # });
/// ```
pub struct HeroService {
    api: Arc<dyn HeroApi>,
    storage: Arc<dyn KeyValueStore>,
    heroes: watch::Sender<Vec<HeroRecord>>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl HeroService {
    pub fn new(api: Arc<dyn HeroApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            storage,
            heroes: watch::Sender::new(Vec::new()),
            loading: watch::Sender::new(true),
            error: watch::Sender::new(None),
        }
    }

    /// Subscription to the hero list, exactly as the service publishes it.
    #[must_use]
    pub fn heroes(&self) -> watch::Receiver<Vec<HeroRecord>> {
        self.heroes.subscribe()
    }

    #[must_use]
    pub fn is_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    #[must_use]
    pub fn error_message(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    #[must_use]
    pub fn heroes_snapshot(&self) -> Vec<HeroRecord> {
        self.heroes.borrow().clone()
    }

    #[must_use]
    pub fn loading_now(&self) -> bool {
        *self.loading.borrow()
    }

    #[must_use]
    pub fn error_now(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Loads the hero list, preferring a non-empty cache over the store.
    ///
    /// On a miss (absent, empty, unreadable or unparsable cache) fetches
    /// [`HeroApi::list_all`], adopts the result and writes it back. A store
    /// failure sets [`LOAD_FAILED`] and leaves the list unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_heroes(&self) {
        let _loading = self.begin();

        let cached = self.read_cache();
        if !cached.is_empty() {
            tracing::debug!(count = cached.len(), "adopting cached heroes");
            self.heroes.send_replace(cached);
            return;
        }

        match self.api.list_all().await {
            Ok(heroes) => {
                tracing::debug!(count = heroes.len(), "loaded heroes from store");
                self.write_cache(&heroes);
                self.heroes.send_replace(heroes);
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading heroes");
                self.fail(LOAD_FAILED);
            }
        }
    }

    /// Live view of the hero with `id`, if present.
    #[must_use]
    pub fn by_id(&self, id: HeroId) -> DerivedView<Option<HeroRecord>> {
        DerivedView::new(self.heroes(), move |heroes| {
            heroes.iter().find(|h| h.id == id).cloned()
        })
    }

    /// Live view of heroes whose `name` contains `name`, ignoring case.
    ///
    /// Unlike [`filter_remote`](Self::filter_remote), the real name is not searched.
    #[must_use]
    pub fn by_name_substring(&self, name: &str) -> DerivedView<Vec<HeroRecord>> {
        let needle = name.to_lowercase();
        DerivedView::new(self.heroes(), move |heroes| {
            heroes
                .iter()
                .filter(|h| h.name_contains(&needle))
                .cloned()
                .collect()
        })
    }

    /// Store-side name search. Returns an empty list on failure.
    pub async fn filter_remote(&self, query: &str) -> Vec<HeroRecord> {
        let _loading = self.begin();
        match self.api.list_by_name_match(query.to_string()).await {
            Ok(heroes) => {
                tracing::debug!(query = %query, count = heroes.len(), "filtered heroes");
                heroes
            }
            Err(e) => {
                tracing::error!(error = %e, query = %query, "error filtering heroes");
                self.fail(FILTER_FAILED);
                Vec::new()
            }
        }
    }

    /// Store-side lookup by id. Returns `None` on failure.
    pub async fn fetch_by_id(&self, id: HeroId) -> Option<HeroRecord> {
        let _loading = self.begin();
        match self.api.get_by_id(id).await {
            Ok(hero) => hero,
            Err(e) => {
                tracing::error!(error = %e, id, "error getting hero by id");
                self.fail(FETCH_BY_ID_FAILED);
                None
            }
        }
    }

    /// Creates a hero and appends it to the list.
    ///
    /// # Errors
    ///
    /// Returns the store's error after setting [`ADD_FAILED`].
    #[tracing::instrument(level = "debug", skip(self, draft), fields(name = %draft.name))]
    pub async fn add(&self, draft: HeroDraft) -> Result<HeroRecord> {
        let _loading = self.begin();

        let hero = self.api.create(draft).await.inspect_err(|e| {
            tracing::error!(error = %e, "error adding hero");
            self.fail(ADD_FAILED);
        })?;

        let created = hero.clone();
        self.mutate(move |heroes| heroes.push(created));
        tracing::info!(id = hero.id, name = %hero.name, "hero added");
        Ok(hero)
    }

    /// Updates a hero and replaces it in the list.
    ///
    /// # Errors
    ///
    /// Returns the store's error after setting [`UPDATE_FAILED`].
    #[tracing::instrument(level = "debug", skip(self, record), fields(id = record.id))]
    pub async fn replace(&self, record: HeroRecord) -> Result<()> {
        let _loading = self.begin();

        self.api.update(record.clone()).await.inspect_err(|e| {
            tracing::error!(error = %e, "error updating hero");
            self.fail(UPDATE_FAILED);
        })?;

        let id = record.id;
        self.mutate(move |heroes| {
            for hero in heroes.iter_mut().filter(|h| h.id == record.id) {
                *hero = record.clone();
            }
        });
        tracing::info!(id, "hero updated");
        Ok(())
    }

    /// Deletes a hero and removes it from the list.
    ///
    /// # Errors
    ///
    /// Returns the store's error after setting [`DELETE_FAILED`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn remove_by_id(&self, id: HeroId) -> Result<()> {
        let _loading = self.begin();

        self.api.delete(id).await.inspect_err(|e| {
            tracing::error!(error = %e, "error deleting hero");
            self.fail(DELETE_FAILED);
        })?;

        self.mutate(|heroes| heroes.retain(|h| h.id != id));
        tracing::info!(id, "hero deleted");
        Ok(())
    }

    /// One page straight from the store; the cached list is not involved.
    ///
    /// # Errors
    ///
    /// Returns the store's error after setting [`PAGINATE_FAILED`].
    pub async fn fetch_paginated(&self, page: usize, limit: usize) -> Result<HeroPage> {
        let _loading = self.begin();
        self.api.list_paginated(page, limit).await.inspect_err(|e| {
            tracing::error!(error = %e, page, limit, "error loading paginated heroes");
            self.fail(PAGINATE_FAILED);
        })
    }

    pub fn clear_error(&self) {
        self.error.send_replace(None);
    }

    /// Drops the cache entry and empties the list.
    pub fn reset_cache(&self) {
        if let Err(e) = self.storage.remove(HEROES_KEY) {
            tracing::warn!(error = %e, "failed to remove cached heroes");
        }
        self.heroes.send_replace(Vec::new());
        tracing::info!("hero cache reset");
    }

    /// Marks an operation as started: loading on, error cleared.
    fn begin(&self) -> LoadingGuard<'_> {
        self.error.send_replace(None);
        LoadingGuard::start(&self.loading)
    }

    fn fail(&self, message: &str) {
        self.error.send_replace(Some(message.to_string()));
    }

    /// Applies `f` to the latest list, publishes it and rewrites the cache.
    fn mutate(&self, f: impl FnOnce(&mut Vec<HeroRecord>)) {
        self.heroes.send_modify(f);
        let snapshot = self.heroes_snapshot();
        self.write_cache(&snapshot);
    }

    fn read_cache(&self) -> Vec<HeroRecord> {
        let raw = match self.storage.get(HEROES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "error reading cached heroes");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "cached heroes are not valid JSON");
            Vec::new()
        })
    }

    fn write_cache(&self, heroes: &[HeroRecord]) {
        let result = serde_json::to_string(heroes)
            .map_err(Into::into)
            .and_then(|json| self.storage.set(HEROES_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "error saving heroes to cache");
        }
    }
}

impl std::fmt::Debug for HeroService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroService")
            .field("heroes", &self.heroes.borrow().len())
            .field("loading", &*self.loading.borrow())
            .field("error", &*self.error.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LatencyProfile, MockHeroApi, SimulatedHeroApi};
    use crate::domain::{CatalogError, Universe};
    use crate::storage::{MemoryStore, MockKeyValueStore};

    fn three() -> Vec<HeroRecord> {
        vec![
            HeroRecord::new(1, "SUPERMAN", "Clark Kent", Universe::Dc),
            HeroRecord::new(2, "BATMAN", "Bruce Wayne", Universe::Dc),
            HeroRecord::new(3, "SPIDERMAN", "Peter Parker", Universe::Marvel),
        ]
    }

    fn api_error() -> CatalogError {
        CatalogError::Remote("API Error".into())
    }

    fn service(api: MockHeroApi, storage: Arc<MemoryStore>) -> HeroService {
        HeroService::new(Arc::new(api), storage)
    }

    fn cached(heroes: &[HeroRecord]) -> Arc<MemoryStore> {
        Arc::new(MemoryStore::with_entries([(
            HEROES_KEY,
            serde_json::to_string(heroes).unwrap(),
        )]))
    }

    async fn loaded(mut api: MockHeroApi) -> (HeroService, Arc<MemoryStore>) {
        api.expect_list_all().times(1).returning(|| Ok(three()));
        let storage = Arc::new(MemoryStore::default());
        let service = service(api, storage.clone());
        service.load_heroes().await;
        (service, storage)
    }

    fn cache_contents(storage: &MemoryStore) -> Vec<HeroRecord> {
        serde_json::from_str(&storage.get(HEROES_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn starts_empty_and_loading() {
        let service = service(MockHeroApi::new(), Arc::new(MemoryStore::default()));
        assert!(service.heroes_snapshot().is_empty());
        assert!(service.loading_now());
        assert_eq!(service.error_now(), None);
    }

    #[tokio::test]
    async fn adopts_non_empty_cache_without_store_call() {
        let mut api = MockHeroApi::new();
        api.expect_list_all().never();
        let service = service(api, cached(&three()));

        service.load_heroes().await;

        assert_eq!(service.heroes_snapshot(), three());
        assert!(!service.loading_now());
    }

    #[tokio::test]
    async fn empty_cache_fetches_once_then_hits_cache() {
        let (service, storage) = loaded(MockHeroApi::new()).await;

        assert_eq!(service.heroes_snapshot(), three());
        assert_eq!(cache_contents(&storage), three());
        assert!(!service.loading_now());
        assert_eq!(service.error_now(), None);

        // The mock allows exactly one list_all; a second store call would panic.
        service.load_heroes().await;
        assert_eq!(service.heroes_snapshot(), three());
    }

    #[tokio::test]
    async fn empty_cached_array_is_a_miss() {
        let mut api = MockHeroApi::new();
        api.expect_list_all().times(1).returning(|| Ok(three()));
        let service = service(api, cached(&[]));

        service.load_heroes().await;
        assert_eq!(service.heroes_snapshot(), three());
    }

    #[tokio::test]
    async fn unreadable_cache_falls_back_to_store() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get()
            .returning(|_| Err(CatalogError::Storage("Storage error".into())));
        storage
            .expect_set()
            .returning(|_, _| Err(CatalogError::Storage("quota exceeded".into())));
        let mut api = MockHeroApi::new();
        api.expect_list_all().times(1).returning(|| Ok(three()));
        let service = HeroService::new(Arc::new(api), Arc::new(storage));

        service.load_heroes().await;

        assert_eq!(service.heroes_snapshot(), three());
        assert_eq!(service.error_now(), None);
    }

    #[tokio::test]
    async fn garbage_cache_falls_back_to_store() {
        let mut api = MockHeroApi::new();
        api.expect_list_all().times(1).returning(|| Ok(three()));
        let storage = Arc::new(MemoryStore::with_entries([(HEROES_KEY, "{oops")]));
        let service = service(api, storage);

        service.load_heroes().await;
        assert_eq!(service.heroes_snapshot(), three());
    }

    #[tokio::test]
    async fn load_failure_sets_message_and_keeps_list() {
        let mut api = MockHeroApi::new();
        api.expect_list_all().returning(|| Err(api_error()));
        let service = service(api, Arc::new(MemoryStore::default()));

        service.load_heroes().await;

        assert_eq!(service.error_now().as_deref(), Some(LOAD_FAILED));
        assert!(!service.loading_now());
        assert!(service.heroes_snapshot().is_empty());
    }

    #[tokio::test]
    async fn heroes_receiver_tracks_published_list() {
        let (service, _) = loaded(MockHeroApi::new()).await;
        let rx = service.heroes();
        assert_eq!(*rx.borrow(), service.heroes_snapshot());
    }

    #[tokio::test]
    async fn by_id_hits_and_misses() {
        let (service, _) = loaded(MockHeroApi::new()).await;
        assert_eq!(service.by_id(1).get(), Some(three()[0].clone()));
        assert_eq!(service.by_id(99999).get(), None);
    }

    #[tokio::test]
    async fn by_name_substring_matches_name_only_ignoring_case() {
        let (service, _) = loaded(MockHeroApi::new()).await;
        assert_eq!(service.by_name_substring("super").get(), vec![three()[0].clone()]);
        assert_eq!(service.by_name_substring("batman").get(), vec![three()[1].clone()]);
        assert!(service.by_name_substring("nonexistent").get().is_empty());
        assert!(service.by_name_substring("clark").get().is_empty());
    }

    #[tokio::test]
    async fn derived_views_follow_mutations() {
        let mut api = MockHeroApi::new();
        api.expect_delete().returning(|_| Ok(()));
        let (service, _) = loaded(api).await;
        let mut batman = service.by_id(2);
        assert!(batman.get().is_some());

        service.remove_by_id(2).await.unwrap();

        assert!(batman.changed().await);
        assert_eq!(batman.get(), None);
    }

    #[tokio::test]
    async fn filter_remote_delegates_and_swallows_errors() {
        let mut api = MockHeroApi::new();
        api.expect_list_by_name_match()
            .withf(|q| q == "super")
            .times(1)
            .returning(|_| Ok(vec![HeroRecord::new(1, "SUPERMAN", "Clark Kent", Universe::Dc)]));
        api.expect_list_by_name_match()
            .withf(|q| q == "boom")
            .returning(|_| Err(api_error()));
        let service = service(api, Arc::new(MemoryStore::default()));

        assert_eq!(service.filter_remote("super").await.len(), 1);
        assert_eq!(service.error_now(), None);

        assert!(service.filter_remote("boom").await.is_empty());
        assert_eq!(service.error_now().as_deref(), Some(FILTER_FAILED));
        assert!(!service.loading_now());
    }

    #[tokio::test]
    async fn fetch_by_id_delegates_and_swallows_errors() {
        let mut api = MockHeroApi::new();
        api.expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(HeroRecord::new(1, "SUPERMAN", "Clark Kent", Universe::Dc))));
        api.expect_get_by_id()
            .withf(|id| *id == 2)
            .returning(|_| Err(api_error()));
        let service = service(api, Arc::new(MemoryStore::default()));

        assert_eq!(service.fetch_by_id(1).await.map(|h| h.name), Some("SUPERMAN".into()));
        assert_eq!(service.fetch_by_id(2).await, None);
        assert_eq!(service.error_now().as_deref(), Some(FETCH_BY_ID_FAILED));
        assert!(!service.loading_now());
    }

    #[tokio::test]
    async fn add_appends_and_writes_cache() {
        let mut api = MockHeroApi::new();
        api.expect_create()
            .returning(|draft| Ok(HeroRecord::from_draft(4, draft)));
        let (service, storage) = loaded(api).await;

        let hero = service
            .add(HeroDraft::new("NEW HERO", "New Person", Universe::Marvel))
            .await
            .unwrap();

        assert_eq!(hero.id, 4);
        assert!(!service.loading_now());
        let heroes = service.heroes_snapshot();
        assert_eq!(heroes.len(), 4);
        assert_eq!(heroes.last(), Some(&hero));
        assert_eq!(cache_contents(&storage), heroes);
    }

    #[tokio::test]
    async fn replace_maps_by_id_and_writes_cache() {
        let mut api = MockHeroApi::new();
        api.expect_update().returning(Ok);
        let (service, storage) = loaded(api).await;

        let renamed = HeroRecord::new(2, "DARK KNIGHT", "Bruce Wayne", Universe::Dc);
        service.replace(renamed.clone()).await.unwrap();

        assert_eq!(service.heroes_snapshot()[1], renamed);
        assert_eq!(cache_contents(&storage)[1], renamed);
    }

    #[tokio::test]
    async fn remove_filters_out_and_writes_cache() {
        let mut api = MockHeroApi::new();
        api.expect_delete().withf(|id| *id == 1).returning(|_| Ok(()));
        let (service, storage) = loaded(api).await;

        service.remove_by_id(1).await.unwrap();

        let ids: Vec<_> = service.heroes_snapshot().iter().map(|h| h.id).collect();
        assert_eq!(ids, [2, 3]);
        assert_eq!(cache_contents(&storage).len(), 2);
    }

    #[tokio::test]
    async fn mutation_failures_set_message_and_reraise() {
        let mut api = MockHeroApi::new();
        api.expect_create().returning(|_| Err(api_error()));
        api.expect_update().returning(|_| Err(api_error()));
        api.expect_delete().returning(|_| Err(api_error()));
        let (service, storage) = loaded(api).await;

        let err = service
            .add(HeroDraft::new("NEW HERO", "New Person", Universe::Marvel))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Remote(ref m) if m == "API Error"));
        assert_eq!(service.error_now().as_deref(), Some(ADD_FAILED));
        assert!(!service.loading_now());

        let err = service.replace(three()[0].clone()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Remote(_)));
        assert_eq!(service.error_now().as_deref(), Some(UPDATE_FAILED));
        assert!(!service.loading_now());

        let err = service.remove_by_id(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Remote(_)));
        assert_eq!(service.error_now().as_deref(), Some(DELETE_FAILED));
        assert!(!service.loading_now());

        assert_eq!(service.heroes_snapshot(), three());
        assert_eq!(cache_contents(&storage), three());
    }

    #[tokio::test]
    async fn not_found_is_reraised_unchanged() {
        let service = HeroService::new(
            Arc::new(SimulatedHeroApi::new(three(), LatencyProfile::Instant)),
            Arc::new(MemoryStore::default()),
        );
        let err = service.remove_by_id(42).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 42 }));
        assert_eq!(service.error_now().as_deref(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn fetch_paginated_delegates_and_reraises() {
        let mut api = MockHeroApi::new();
        api.expect_list_paginated()
            .withf(|page, limit| (*page, *limit) == (1, 2))
            .returning(|page, limit| {
                Ok(HeroPage {
                    heroes: three()[..2].to_vec(),
                    total: 3,
                    page,
                    total_pages: 3usize.div_ceil(limit),
                })
            });
        api.expect_list_paginated()
            .withf(|page, _| *page == 9)
            .returning(|_, _| Err(api_error()));
        let service = service(api, Arc::new(MemoryStore::default()));

        let page = service.fetch_paginated(1, 2).await.unwrap();
        assert_eq!((page.total, page.total_pages), (3, 2));

        assert!(service.fetch_paginated(9, 2).await.is_err());
        assert_eq!(service.error_now().as_deref(), Some(PAGINATE_FAILED));
        assert!(!service.loading_now());
    }

    #[tokio::test]
    async fn next_operation_clears_previous_error() {
        let mut api = MockHeroApi::new();
        api.expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Err(api_error()));
        api.expect_get_by_id()
            .withf(|id| *id == 2)
            .returning(|_| Ok(None));
        let service = service(api, Arc::new(MemoryStore::default()));

        service.fetch_by_id(1).await;
        assert!(service.error_now().is_some());
        service.fetch_by_id(2).await;
        assert_eq!(service.error_now(), None);

        service.fail(LOAD_FAILED);
        service.clear_error();
        assert_eq!(service.error_now(), None);
    }

    #[tokio::test]
    async fn reset_cache_empties_list_and_removes_key() {
        let (service, storage) = loaded(MockHeroApi::new()).await;
        service.reset_cache();
        assert!(service.heroes_snapshot().is_empty());
        assert_eq!(storage.get(HEROES_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn loading_is_true_while_store_call_is_pending() {
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Realistic)),
            Arc::new(MemoryStore::default()),
        ));
        let task = tokio::spawn({
            let service = service.clone();
            async move { service.fetch_by_id(3).await }
        });
        tokio::task::yield_now().await;
        assert!(service.loading_now());

        let hero = task.await.unwrap();
        assert_eq!(hero.map(|h| h.name), Some("SPIDERMAN".into()));
        assert!(!service.loading_now());
    }
}

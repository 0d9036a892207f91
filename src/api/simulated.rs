//! In-memory record store with simulated latency.
//!
//! Every call sleeps first, then touches the list. The lock is only taken
//! after the sleep and released before returning, so overlapping calls
//! interleave at their delays exactly as independent network requests would.

use crate::api::latency::{LatencyProfile, Operation};
use crate::api::HeroApi;
use crate::domain::error::{CatalogError, Result};
use crate::domain::{HeroDraft, HeroId, HeroPage, HeroRecord, Universe};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// The ten heroes the store starts with.
#[must_use]
pub fn seed_heroes() -> Vec<HeroRecord> {
    vec![
        HeroRecord::new(1, "SUPERMAN", "Clark Kent", Universe::Dc),
        HeroRecord::new(2, "BATMAN", "Bruce Wayne", Universe::Dc),
        HeroRecord::new(3, "SPIDERMAN", "Peter Parker", Universe::Marvel),
        HeroRecord::new(4, "IRON MAN", "Tony Stark", Universe::Marvel),
        HeroRecord::new(5, "THE FLASH", "Barry Allen", Universe::Dc),
        HeroRecord::new(6, "WONDER WOMAN", "Diana Prince", Universe::Dc),
        HeroRecord::new(7, "CAPTAIN AMERICA", "Steve Rogers", Universe::Marvel),
        HeroRecord::new(8, "THOR", "Thor Odinson", Universe::Marvel),
        HeroRecord::new(9, "BLACK WIDOW", "Natasha Romanoff", Universe::Marvel),
        HeroRecord::new(10, "AQUAMAN", "Arthur Curry", Universe::Dc),
    ]
}

/// Simulated remote store.
///
/// # Examples
///
/// ```
/// use hero_catalog::api::{HeroApi, LatencyProfile, SimulatedHeroApi};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let api = SimulatedHeroApi::seeded(LatencyProfile::Instant);
/// let hero = api.get_by_id(2).await?.unwrap();
/// assert_eq!(hero.name, "BATMAN");
/// # Ok::<(), hero_catalog::CatalogError>(())
/// # }).unwrap();
/// ```
#[derive(Debug)]
pub struct SimulatedHeroApi {
    heroes: Mutex<Vec<HeroRecord>>,
    latency: LatencyProfile,
}

impl SimulatedHeroApi {
    /// Creates a store holding `heroes` in the given order.
    #[must_use]
    pub fn new(heroes: Vec<HeroRecord>, latency: LatencyProfile) -> Self {
        Self {
            heroes: Mutex::new(heroes),
            latency,
        }
    }

    /// Creates a store holding [`seed_heroes`].
    #[must_use]
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::new(seed_heroes(), latency)
    }

    async fn simulate(&self, op: Operation) {
        let delay = self.latency.delay_for(op);
        tracing::trace!(?op, delay_ms = delay.as_millis() as u64, "simulating latency");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn heroes(&self) -> Result<MutexGuard<'_, Vec<HeroRecord>>> {
        self.heroes
            .lock()
            .map_err(|e| CatalogError::Remote(format!("store lock poisoned: {e}")))
    }
}

impl Default for SimulatedHeroApi {
    fn default() -> Self {
        Self::seeded(LatencyProfile::default())
    }
}

#[async_trait]
impl HeroApi for SimulatedHeroApi {
    async fn list_all(&self) -> Result<Vec<HeroRecord>> {
        self.simulate(Operation::ListAll).await;
        Ok(self.heroes()?.clone())
    }

    async fn get_by_id(&self, id: HeroId) -> Result<Option<HeroRecord>> {
        self.simulate(Operation::GetById).await;
        Ok(self.heroes()?.iter().find(|h| h.id == id).cloned())
    }

    async fn list_by_name_match(&self, query: String) -> Result<Vec<HeroRecord>> {
        self.simulate(Operation::ListByNameMatch).await;
        let needle = query.trim().to_lowercase();
        let heroes = self.heroes()?;
        if needle.is_empty() {
            return Ok(heroes.clone());
        }
        Ok(heroes
            .iter()
            .filter(|h| h.name_or_real_name_contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: HeroDraft) -> Result<HeroRecord> {
        self.simulate(Operation::Create).await;
        let mut heroes = self.heroes()?;
        let next_id = heroes.iter().map(|h| h.id).max().map_or(1, |max| max + 1);
        let hero = HeroRecord::from_draft(next_id, draft);
        heroes.push(hero.clone());
        tracing::debug!(id = hero.id, name = %hero.name, "store created hero");
        Ok(hero)
    }

    async fn update(&self, record: HeroRecord) -> Result<HeroRecord> {
        self.simulate(Operation::Update).await;
        let mut heroes = self.heroes()?;
        let slot = heroes
            .iter_mut()
            .find(|h| h.id == record.id)
            .ok_or(CatalogError::NotFound { id: record.id })?;
        *slot = record.clone();
        tracing::debug!(id = record.id, "store updated hero");
        Ok(record)
    }

    async fn delete(&self, id: HeroId) -> Result<()> {
        self.simulate(Operation::Delete).await;
        let mut heroes = self.heroes()?;
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or(CatalogError::NotFound { id })?;
        heroes.remove(index);
        tracing::debug!(id, "store deleted hero");
        Ok(())
    }

    async fn list_paginated(&self, page: usize, limit: usize) -> Result<HeroPage> {
        if page == 0 || limit == 0 {
            return Err(CatalogError::InvalidArgument(format!(
                "page and limit must be positive (page={page}, limit={limit})"
            )));
        }
        self.simulate(Operation::ListPaginated).await;
        let heroes = self.heroes()?;
        let total = heroes.len();
        let start = (page - 1).saturating_mul(limit);
        Ok(HeroPage {
            heroes: heroes.iter().skip(start).take(limit).cloned().collect(),
            total,
            page,
            total_pages: total.div_ceil(limit),
        })
    }

    async fn count(&self) -> Result<usize> {
        self.simulate(Operation::Count).await;
        Ok(self.heroes()?.len())
    }
}

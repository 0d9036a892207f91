//! Create/edit form controller.
//!
//! Holds the three editable fields, validates them and submits through the
//! state service. Hero names are upper-cased as they are typed.

use crate::app::routes::Route;
use crate::domain::error::{CatalogError, Result};
use crate::domain::{HeroDraft, HeroId, HeroRecord, Universe};
use crate::service::HeroService;
use std::sync::Arc;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 50;

/// Whether the form creates a new hero or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(HeroId),
}

/// Form fields, used to label validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    RealName,
    Universe,
}

impl Field {
    const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::RealName => "real name",
            Self::Universe => "universe",
        }
    }
}

#[derive(Debug)]
pub struct HeroForm {
    service: Arc<HeroService>,
    mode: FormMode,
    pub name: String,
    pub real_name: String,
    pub universe: String,
    is_submitting: bool,
}

impl HeroForm {
    /// Empty create form; the universe defaults to Marvel.
    #[must_use]
    pub fn create(service: Arc<HeroService>) -> Self {
        Self {
            service,
            mode: FormMode::Create,
            name: String::new(),
            real_name: String::new(),
            universe: Universe::Marvel.to_string(),
            is_submitting: false,
        }
    }

    /// Edit form for hero `id`, prefilled from the service's current list.
    ///
    /// If the hero is not in the list the fields stay at their create defaults.
    #[must_use]
    pub fn edit(service: Arc<HeroService>, id: HeroId) -> Self {
        let existing = service.by_id(id).get();
        let mut form = Self::create(service);
        form.mode = FormMode::Edit(id);
        if let Some(hero) = existing {
            form.name = hero.name;
            form.real_name = hero.real_name;
            form.universe = hero.universe.to_string();
        } else {
            tracing::debug!(id, "edit target not in current list");
        }
        form
    }

    /// Sets the name, upper-cased.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_uppercase();
    }

    pub fn set_real_name(&mut self, real_name: &str) {
        self.real_name = real_name.to_string();
    }

    pub fn set_universe(&mut self, universe: &str) {
        self.universe = universe.to_string();
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Per-field validation messages; empty when the form is valid.
    #[must_use]
    pub fn field_errors(&self) -> Vec<(Field, String)> {
        let mut errors = Vec::new();
        for (field, value) in [(Field::Name, &self.name), (Field::RealName, &self.real_name)] {
            if let Some(message) = validate_person_name(value) {
                errors.push((field, message));
            }
        }
        if self.universe.parse::<Universe>().is_err() {
            errors.push((Field::Universe, "must be one of DC, Marvel or Other".to_string()));
        }
        errors
    }

    /// Builds the draft if every field is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] listing each invalid field.
    pub fn validate(&self) -> Result<HeroDraft> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(CatalogError::Validation(
                errors
                    .into_iter()
                    .map(|(field, message)| format!("{} {message}", field.label()))
                    .collect(),
            ));
        }
        let universe = self.universe.parse().map_err(CatalogError::InvalidArgument)?;
        Ok(HeroDraft::new(self.name.clone(), self.real_name.clone(), universe))
    }

    /// Validates and submits; returns where to navigate on success.
    ///
    /// Create mode calls [`HeroService::add`], edit mode calls
    /// [`HeroService::replace`]. On failure the fields are kept.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the service, or the
    /// service's error for a failed submit.
    pub async fn submit(&mut self) -> Result<Route> {
        let draft = self.validate()?;

        self.is_submitting = true;
        let result = match self.mode {
            FormMode::Create => self.service.add(draft).await.map(|_| ()),
            FormMode::Edit(id) => self.service.replace(HeroRecord::from_draft(id, draft)).await,
        };
        self.is_submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(mode = ?self.mode, "hero saved");
                Ok(Route::Heroes)
            }
            Err(e) => {
                tracing::error!(error = %e, mode = ?self.mode, "error saving hero");
                Err(e)
            }
        }
    }
}

/// Checks length and the letters/spaces/hyphens/apostrophes alphabet.
fn validate_person_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("is required".to_string());
    }
    let len = value.chars().count();
    if len < MIN_LEN {
        return Some(format!("must be at least {MIN_LEN} characters"));
    }
    if len > MAX_LEN {
        return Some(format!("must be at most {MAX_LEN} characters"));
    }
    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !value.chars().all(allowed) {
        return Some("may only contain letters, spaces, hyphens and apostrophes".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LatencyProfile, MockHeroApi, SimulatedHeroApi};
    use crate::storage::MemoryStore;

    async fn loaded_service() -> Arc<HeroService> {
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
            Arc::new(MemoryStore::default()),
        ));
        service.load_heroes().await;
        service
    }

    #[test]
    fn person_name_rules() {
        assert_eq!(validate_person_name("O'Neil-Smith Jr"), None);
        assert!(validate_person_name("").is_some());
        assert!(validate_person_name("X").is_some());
        assert!(validate_person_name(&"A".repeat(51)).is_some());
        assert_eq!(validate_person_name(&"A".repeat(50)), None);
        assert!(validate_person_name("R2D2").is_some());
        assert!(validate_person_name("Zoë").is_some());
    }

    #[test]
    fn invalid_form_lists_each_field() {
        let service = Arc::new(HeroService::new(
            Arc::new(MockHeroApi::new()),
            Arc::new(MemoryStore::default()),
        ));
        let mut form = HeroForm::create(service);
        form.set_name("X");
        form.set_universe("Image");

        let fields: Vec<Field> = form.field_errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, [Field::Name, Field::RealName, Field::Universe]);
        match form.validate() {
            Err(CatalogError::Validation(messages)) => assert_eq!(messages.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_service() {
        // No expectations: any store call would panic.
        let service = Arc::new(HeroService::new(
            Arc::new(MockHeroApi::new()),
            Arc::new(MemoryStore::default()),
        ));
        let mut form = HeroForm::create(service);
        assert!(matches!(form.submit().await, Err(CatalogError::Validation(_))));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn create_submits_uppercased_name() {
        let service = loaded_service().await;
        let mut form = HeroForm::create(service.clone());
        form.set_name("storm");
        form.set_real_name("Ororo Munroe");

        assert_eq!(form.submit().await.unwrap(), Route::Heroes);

        let added = service.heroes_snapshot().pop().unwrap();
        assert_eq!((added.id, added.name.as_str()), (11, "STORM"));
        assert_eq!(added.universe, Universe::Marvel);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn edit_prefills_and_replaces() {
        let service = loaded_service().await;
        let mut form = HeroForm::edit(service.clone(), 5);
        assert_eq!(form.mode(), FormMode::Edit(5));
        assert_eq!((form.name.as_str(), form.real_name.as_str()), ("THE FLASH", "Barry Allen"));
        assert_eq!(form.universe, "DC");

        form.set_real_name("Wally West");
        form.submit().await.unwrap();

        assert_eq!(service.by_id(5).get().unwrap().real_name, "Wally West");
    }

    #[tokio::test]
    async fn failed_submit_keeps_fields() {
        let service = loaded_service().await;
        let mut form = HeroForm::edit(service.clone(), 5);
        service.remove_by_id(5).await.unwrap();

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 5 }));
        assert_eq!(form.name, "THE FLASH");
        assert_eq!(service.error_now().as_deref(), Some("Failed to update hero"));
    }
}

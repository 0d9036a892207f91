//! Hero domain model.
//!
//! This module defines [`HeroRecord`], the single entity managed by the catalog,
//! together with its creation payload [`HeroDraft`], the [`Universe`] enum and
//! the [`HeroPage`] returned by paginated reads.
//!
//! Records serialize with camelCase keys (`realName`, `totalPages`) so the
//! durable cache stays readable by anything that wrote the same format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned hero identifier.
pub type HeroId = u32;

/// Publishing universe a hero belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Universe {
    #[serde(rename = "DC")]
    Dc,
    Marvel,
    Other,
}

impl Universe {
    /// All variants in display order.
    pub const ALL: [Self; 3] = [Self::Dc, Self::Marvel, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dc => "DC",
            Self::Marvel => "Marvel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Universe {
    type Err = String;

    /// Parses the exact universe labels `DC`, `Marvel` and `Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hero_catalog::domain::Universe;
    ///
    /// assert_eq!("Marvel".parse::<Universe>(), Ok(Universe::Marvel));
    /// assert!("marvel".parse::<Universe>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| format!("unknown universe '{s}' (expected DC, Marvel or Other)"))
    }
}

/// A hero as stored by the record store and cached by the state service.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    pub id: HeroId,
    pub name: String,
    pub real_name: String,
    pub universe: Universe,
}

impl HeroRecord {
    /// Creates a record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use hero_catalog::domain::{HeroRecord, Universe};
    ///
    /// let hero = HeroRecord::new(1, "SUPERMAN", "Clark Kent", Universe::Dc);
    /// assert_eq!(hero.real_name, "Clark Kent");
    /// ```
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        real_name: impl Into<String>,
        universe: Universe,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            real_name: real_name.into(),
            universe,
        }
    }

    /// Attaches an id to a draft.
    #[must_use]
    pub fn from_draft(id: HeroId, draft: HeroDraft) -> Self {
        Self {
            id,
            name: draft.name,
            real_name: draft.real_name,
            universe: draft.universe,
        }
    }

    /// Case-insensitive substring match on `name` only.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive substring match on `name` or `real_name`.
    #[must_use]
    pub fn name_or_real_name_contains(&self, needle_lower: &str) -> bool {
        self.name_contains(needle_lower) || self.real_name.to_lowercase().contains(needle_lower)
    }
}

/// Creation payload: a hero without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDraft {
    pub name: String,
    pub real_name: String,
    pub universe: Universe,
}

impl HeroDraft {
    pub fn new(name: impl Into<String>, real_name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            real_name: real_name.into(),
            universe,
        }
    }
}

/// One page of heroes as returned by the record store.
///
/// `page` is 1-based; `total_pages` is `ceil(total / limit)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPage {
    pub heroes: Vec<HeroRecord>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

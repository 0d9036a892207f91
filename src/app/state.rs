//! Application state management and view model computation.
//!
//! [`App`] owns the list controller, both filter inputs, the delete prompt and
//! the active theme. It is mutated by the event handler and turned into a
//! [`UIViewModel`] on demand.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` reads the controller's current page and decorates it:
//! name-filter highlight ranges, the pending delete target as the selected
//! row, the service's error message as a banner and an empty state that
//! explains why nothing is listed.

use crate::app::dialog::PromptDialog;
use crate::app::filters::{IdFilter, NameFilter};
use crate::app::list::HeroListController;
use crate::app::modes::InputMode;
use crate::app::routes::Route;
use crate::service::HeroService;
use crate::ui::helpers::highlight_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Banner, BannerKind, DialogInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, HeroRow,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::sync::Arc;

const NORMAL_KEYS: &str =
    "n/p: page  /text: name  #id: id  d id: delete  a/e: add/edit  r: reload  x: dismiss  q: quit";
const CONFIRM_KEYS: &str = "y: confirm  n: cancel";

/// Central application state container.
#[derive(Debug)]
pub struct App {
    pub list: HeroListController,
    pub name_filter: NameFilter,
    pub id_filter: IdFilter,

    /// Text of the last id search, shown in the filter bar.
    pub id_query: String,

    pub dialog: PromptDialog,
    pub route: Route,

    /// Local status line; the service's error message takes precedence.
    pub status: Option<Banner>,

    theme: Theme,
}

impl App {
    /// Creates the application state.
    ///
    /// # Parameters
    ///
    /// * `service` - Shared state service
    /// * `name_filter` - Name filter, possibly holding a restored value
    /// * `page_size` - Rows per page (0 falls back to the default)
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(service: Arc<HeroService>, name_filter: NameFilter, page_size: usize, theme: Theme) -> Self {
        Self {
            list: HeroListController::new(service, page_size),
            name_filter,
            id_filter: IdFilter::default(),
            id_query: String::new(),
            dialog: PromptDialog::default(),
            route: Route::Heroes,
            status: None,
            theme,
        }
    }

    /// Loads the hero list.
    pub async fn init(&mut self) {
        self.list.init().await;
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn service(&self) -> &Arc<HeroService> {
        self.list.service()
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.dialog.is_open() {
            InputMode::ConfirmDelete
        } else {
            InputMode::Normal
        }
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(Banner { kind: BannerKind::Info, text: text.into() });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(Banner { kind: BannerKind::Error, text: text.into() });
    }

    /// Transforms the current state into a renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let query = self.name_filter.current();
        let matcher = (!query.trim().is_empty()).then(SkimMatcherV2::default);
        let selected = self.list.delete_target().map(|target| target.id);

        let rows: Vec<HeroRow> = self
            .list
            .paginated_heroes()
            .into_iter()
            .map(|hero| HeroRow {
                highlight_ranges: matcher
                    .as_ref()
                    .map_or_else(Vec::new, |m| highlight_ranges(&hero.name, query, m)),
                is_selected: selected == Some(hero.id),
                id: hero.id,
                name: hero.name,
                real_name: hero.real_name,
                universe: hero.universe,
            })
            .collect();

        let empty_state = rows.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            rows,
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            banner: self.compute_banner(),
            dialog: self.compute_dialog(),
            footer: self.compute_footer(),
            empty_state,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.list.display_heroes().len();
        let total = self.list.total_pages().max(1);
        HeaderInfo {
            title: format!(" Heroes ({count}) "),
            page: format!("{}/{total}", self.list.current_page() + 1),
        }
    }

    fn compute_filter_bar(&self) -> Option<FilterBarInfo> {
        let name_query = self.name_filter.current();
        if name_query.is_empty() && self.id_query.is_empty() {
            return None;
        }
        Some(FilterBarInfo {
            name_query: name_query.to_string(),
            id_query: (!self.id_query.is_empty()).then(|| self.id_query.clone()),
            searching: self.list.is_id_searching(),
        })
    }

    fn compute_banner(&self) -> Option<Banner> {
        self.service()
            .error_now()
            .map(|text| Banner { kind: BannerKind::Error, text })
            .or_else(|| self.status.clone())
    }

    fn compute_dialog(&self) -> Option<DialogInfo> {
        self.dialog.is_open().then(|| DialogInfo {
            title: self.dialog.text.title.clone(),
            message: self.dialog.text.message.clone(),
            confirm_label: self.dialog.text.confirm_label.clone(),
            cancel_label: self.dialog.text.cancel_label.clone(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Normal => NORMAL_KEYS,
            InputMode::ConfirmDelete => CONFIRM_KEYS,
        };
        FooterInfo { keybindings: keybindings.to_string() }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.list.is_loading() {
            return EmptyState {
                message: "Loading heroes...".to_string(),
                subtitle: String::new(),
            };
        }
        if self.list.id_search_completed() {
            let id = self.id_filter.current_id().unwrap_or_default();
            return EmptyState {
                message: format!("No hero with id {id}"),
                subtitle: "Type # to clear the id search".to_string(),
            };
        }
        let query = self.name_filter.current();
        if !query.is_empty() {
            return EmptyState {
                message: format!("No heroes match \"{query}\""),
                subtitle: "Type / to clear the name filter".to_string(),
            };
        }
        EmptyState {
            message: "No heroes yet".to_string(),
            subtitle: "Add one with: a NAME|Real Name|Universe".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LatencyProfile, SimulatedHeroApi};
    use crate::app::filters::{FilterEvent, DEFAULT_DEBOUNCE};
    use crate::storage::{KeyValueStore, MemoryStore, NAME_FILTER_KEY};

    async fn app() -> App {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
            storage.clone(),
        ));
        let mut app = App::new(
            service,
            NameFilter::new(storage, DEFAULT_DEBOUNCE),
            5,
            Theme::default(),
        );
        app.init().await;
        app
    }

    #[tokio::test]
    async fn first_page_with_header_counts() {
        let app = app().await;
        let vm = app.compute_viewmodel();

        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.header.title, " Heroes (10) ");
        assert_eq!(vm.header.page, "1/2");
        assert!(vm.filter_bar.is_none());
        assert!(vm.empty_state.is_none());
        assert!(vm.dialog.is_none());
        assert_eq!(vm.footer.keybindings, NORMAL_KEYS);
    }

    #[tokio::test]
    async fn restored_name_filter_highlights_matches() {
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(MemoryStore::with_entries([(NAME_FILTER_KEY, "man")]));
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
            storage.clone(),
        ));
        let mut app = App::new(service, NameFilter::new(storage, DEFAULT_DEBOUNCE), 5, Theme::default());
        app.init().await;
        app.list.on_name_filter("man").await;

        let vm = app.compute_viewmodel();
        assert_eq!(vm.header.title, " Heroes (7) ");
        assert_eq!(vm.filter_bar.map(|f| f.name_query), Some("man".to_string()));
        let superman = vm.rows.iter().find(|row| row.name == "SUPERMAN").unwrap();
        assert_eq!(superman.highlight_ranges, vec![(5, 8)]);
    }

    #[tokio::test]
    async fn id_miss_explains_empty_view() {
        let mut app = app().await;
        app.id_filter.set_input("99999").unwrap();
        app.id_query = "99999".into();
        app.list.on_id_filter(FilterEvent::Search(99999)).await;

        let vm = app.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No hero with id 99999".to_string())
        );
        assert_eq!(vm.filter_bar.and_then(|f| f.id_query), Some("99999".to_string()));
    }

    #[tokio::test]
    async fn service_error_wins_over_status() {
        let mut app = app().await;
        app.set_info("Saved");
        assert_eq!(app.compute_viewmodel().banner.map(|b| b.kind), Some(BannerKind::Info));

        app.service().remove_by_id(404).await.unwrap_err();
        let banner = app.compute_viewmodel().banner.unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Failed to delete hero");
    }

    #[test]
    fn loading_state_before_init() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let service = Arc::new(HeroService::new(
            Arc::new(SimulatedHeroApi::seeded(LatencyProfile::Instant)),
            storage.clone(),
        ));
        let app = App::new(service, NameFilter::new(storage, DEFAULT_DEBOUNCE), 5, Theme::default());

        let vm = app.compute_viewmodel();
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Loading heroes...".to_string()));
        assert_eq!(vm.header.page, "1/1");
    }
}

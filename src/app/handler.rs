//! Event handling and state transition logic.
//!
//! Input arrives as lines. [`parse_command`] turns a line into an [`Event`]
//! according to the current [`InputMode`]; the main loop adds system events
//! for debounced name-filter values and service list changes. [`handle_event`]
//! applies an event to the [`App`] and returns whether a redraw is needed
//! together with the actions the runtime must perform.
//!
//! # Commands
//!
//! | Line | Event |
//! |------|-------|
//! | `n` / `p` | next / previous page |
//! | `/text` | name filter (`/` alone clears it) |
//! | `#id` / `#` | id search / clear it |
//! | `d id` | ask to delete hero `id` |
//! | `a NAME\|Real Name\|Universe` | add a hero |
//! | `e id NAME\|Real Name\|Universe` | edit hero `id` |
//! | `r` | drop the cache and reload |
//! | `x` | dismiss the error message |
//! | `q` | quit |
//!
//! While the delete prompt is open only `y`/`n` answers are accepted.

use crate::app::dialog::{parse_answer, ConfirmationDialog, DialogText, PromptDialog};
use crate::app::form::HeroForm;
use crate::app::modes::InputMode;
use crate::app::routes::Route;
use crate::app::{Action, App};
use crate::domain::error::{CatalogError, Result};
use crate::domain::HeroId;

/// Fields typed for an add or edit command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub real_name: String,
    /// Keeps the form's current universe when omitted.
    pub universe: Option<String>,
}

/// Events triggered by user input or system changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    NextPage,
    PrevPage,
    /// Raw name filter text; it reaches the list after the debounce.
    NameInput(String),
    IdSearch(String),
    ClearIdSearch,
    Delete(HeroId),
    /// Answer to the delete prompt.
    Answer(bool),
    Add(FormInput),
    Edit(HeroId, FormInput),
    ResetCache,
    DismissError,
    Quit,

    /// A debounced, distinct name filter value.
    NameFilterChanged(String),
    /// The service's hero list or loading flag changed.
    HeroesChanged,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line in normal mode.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidArgument`] for unknown commands, malformed
/// arguments and anything but yes/no while the delete prompt is open.
pub fn parse_command(line: &str, mode: InputMode) -> Result<Option<Event>> {
    if mode == InputMode::ConfirmDelete {
        return parse_answer(line)
            .map(|answer| Some(Event::Answer(answer)))
            .ok_or_else(|| CatalogError::InvalidArgument("answer y or n".to_string()));
    }

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Some(Event::NameInput(text.trim().to_string())));
    }
    if let Some(text) = line.strip_prefix('#') {
        let text = text.trim();
        return Ok(Some(if text.is_empty() {
            Event::ClearIdSearch
        } else {
            Event::IdSearch(text.to_string())
        }));
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let event = match command {
        "n" => Event::NextPage,
        "p" => Event::PrevPage,
        "r" => Event::ResetCache,
        "x" => Event::DismissError,
        "q" => Event::Quit,
        "d" => Event::Delete(parse_id(rest)?),
        "a" => Event::Add(parse_form_input(rest)?),
        "e" => {
            let (id, fields) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Event::Edit(parse_id(id)?, parse_form_input(fields)?)
        }
        other => {
            return Err(CatalogError::InvalidArgument(format!("unknown command: {other}")));
        }
    };
    Ok(Some(event))
}

fn parse_id(text: &str) -> Result<HeroId> {
    text.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidArgument(format!("'{}' is not a hero id", text.trim())))
}

fn parse_form_input(text: &str) -> Result<FormInput> {
    let parts: Vec<&str> = text.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [name, real_name] => Ok(FormInput {
            name: (*name).to_string(),
            real_name: (*real_name).to_string(),
            universe: None,
        }),
        [name, real_name, universe] => Ok(FormInput {
            name: (*name).to_string(),
            real_name: (*real_name).to_string(),
            universe: Some((*universe).to_string()),
        }),
        _ => Err(CatalogError::InvalidArgument(
            "expected NAME|Real Name|Universe".to_string(),
        )),
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(redraw, actions)`: whether the view changed and the side effects for
/// the runtime, in order.
///
/// # Errors
///
/// Returns invalid id input, an unknown delete target, form validation
/// errors and failed saves. The state stays consistent; the caller reports
/// the error and keeps going.
#[tracing::instrument(level = "debug", skip(app))]
pub async fn handle_event(app: &mut App, event: Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::NextPage => {
            app.list.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            app.list.prev_page();
            Ok((true, vec![]))
        }
        Event::NameInput(text) => {
            app.name_filter.set_input(text);
            Ok((false, vec![]))
        }
        Event::NameFilterChanged(value) => {
            app.list.on_name_filter(&value).await;
            Ok((true, vec![]))
        }
        Event::IdSearch(text) => {
            app.id_filter.set_input(&text)?;
            app.id_query = text;
            match app.id_filter.search() {
                Some(search) => app.list.on_id_filter(search).await,
                None => app.set_info("Hero ids start at 1"),
            }
            Ok((true, vec![]))
        }
        Event::ClearIdSearch => {
            let clear = app.id_filter.clear();
            app.id_query.clear();
            app.list.on_id_filter(clear).await;
            Ok((true, vec![]))
        }
        Event::Delete(id) => {
            let name = app
                .list
                .heroes()
                .iter()
                .find(|hero| hero.id == id)
                .map(|hero| hero.name.clone())
                .ok_or(CatalogError::NotFound { id })?;
            app.dialog = PromptDialog::new(DialogText::delete_hero(&name));
            app.list.open_delete_dialog(id, name, &mut app.dialog);
            Ok((true, vec![]))
        }
        Event::Answer(confirmed) => {
            app.dialog.close();
            if confirmed {
                let name = app.list.delete_target().map(|target| target.name.clone());
                app.list.confirm_delete().await;
                if app.list.delete_target().is_none() {
                    if let Some(name) = name {
                        app.set_info(format!("Deleted {name}"));
                    }
                } else {
                    // Failed: the service's error message is on screen.
                    app.list.cancel_delete();
                }
            } else {
                app.list.cancel_delete();
            }
            Ok((true, vec![]))
        }
        Event::Add(input) => {
            let form = HeroForm::create(app.service().clone());
            submit_form(app, form, Route::NewHero, input).await
        }
        Event::Edit(id, input) => {
            let form = HeroForm::edit(app.service().clone(), id);
            submit_form(app, form, Route::EditHero(id), input).await
        }
        Event::ResetCache => {
            app.list.reset_cache().await;
            app.id_filter.clear();
            app.id_query.clear();
            let name = app.name_filter.current().to_string();
            if !name.is_empty() {
                app.list.on_name_filter(&name).await;
            }
            app.set_info("Cache cleared");
            Ok((true, vec![]))
        }
        Event::DismissError => {
            app.service().clear_error();
            app.status = None;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::HeroesChanged => Ok((app.list.sync(), vec![])),
    }
}

/// Navigates to the form, fills it and submits.
///
/// Whatever the outcome, the list screen is shown afterwards.
async fn submit_form(
    app: &mut App,
    mut form: HeroForm,
    route: Route,
    input: FormInput,
) -> Result<(bool, Vec<Action>)> {
    app.route = route;
    let mut actions = vec![Action::Navigate(route)];

    form.set_name(&input.name);
    form.set_real_name(&input.real_name);
    if let Some(universe) = &input.universe {
        form.set_universe(universe);
    }

    let result = form.submit().await;
    app.route = Route::Heroes;
    actions.push(Action::Navigate(Route::Heroes));
    app.list.sync();

    result?;
    app.set_info(format!("Saved {}", form.name));
    Ok((true, actions))
}

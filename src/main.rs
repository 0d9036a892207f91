//! Terminal entry point.
//!
//! A thin runtime around the library: it wires storage, the simulated store
//! and the state service together, then runs a single-threaded event loop
//! that reads command lines from stdin and redraws the list after each event.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read `config.toml`, initialize logging
//! 2. **Wire**: Open `storage.json` (or memory with `--ephemeral`), build the
//!    service and the application state
//! 3. **Init**: Load heroes (cache first, then the store)
//! 4. **Loop**: Wait for an input line, a debounced name filter or a service
//!    change; handle it; redraw
//!
//! # Flags
//!
//! - `--ephemeral`: keep everything in memory, nothing is written to disk
//! - `--instant`: disable simulated latency regardless of the config
//!
//! See [`hero_catalog::app::handler`] for the command syntax.

#![allow(clippy::multiple_crate_versions)]

use hero_catalog::api::{LatencyProfile, SimulatedHeroApi};
use hero_catalog::app::NameFilter;
use hero_catalog::infrastructure::storage_file;
use hero_catalog::service::HeroService;
use hero_catalog::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use hero_catalog::ui::{render, CLEAR_SCREEN};
use hero_catalog::{handle_event, parse_command, Action, App, Config, Event};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

/// What woke the event loop.
enum Wakeup {
    Line(String),
    Event(Event),
    Redraw,
    InputClosed,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let ephemeral = args.iter().any(|arg| arg == "--ephemeral");
    let instant = args.iter().any(|arg| arg == "--instant");

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    hero_catalog::observability::init_tracing(&config);
    if let Some(e) = &config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let span = tracing::debug_span!("startup", ephemeral, instant);
    let storage = {
        let _guard = span.enter();
        open_storage(&config, ephemeral)
    };

    let latency = LatencyProfile::from_flag(config.simulate_latency && !instant);
    let service = Arc::new(HeroService::new(
        Arc::new(SimulatedHeroApi::seeded(latency)),
        storage.clone(),
    ));
    let name_filter = NameFilter::new(storage, config.debounce());
    let mut app = App::new(service.clone(), name_filter, config.page_size, config.theme());
    if let Some(e) = config_error {
        app.set_error(format!("{e}; using defaults"));
    }
    tracing::info!(?latency, page_size = config.page_size, "hero catalog started");

    let (rows, cols) = terminal_size();
    draw(&app, rows, cols).await?;
    app.init().await;
    draw(&app, rows, cols).await?;

    let mut heroes_rx = service.heroes();
    let mut loading_rx = service.is_loading();
    let mut error_rx = service.error_message();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let wakeup = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => Wakeup::Line(line),
                Ok(None) => Wakeup::InputClosed,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read input");
                    Wakeup::InputClosed
                }
            },
            Some(value) = app.name_filter.next_change() => Wakeup::Event(Event::NameFilterChanged(value)),
            Ok(()) = heroes_rx.changed() => Wakeup::Event(Event::HeroesChanged),
            Ok(()) = loading_rx.changed() => Wakeup::Event(Event::HeroesChanged),
            Ok(()) = error_rx.changed() => Wakeup::Redraw,
        };

        let event = match wakeup {
            Wakeup::InputClosed => break,
            Wakeup::Redraw => {
                draw(&app, rows, cols).await?;
                continue;
            }
            Wakeup::Event(event) => event,
            Wakeup::Line(line) => {
                app.status = None;
                match parse_command(&line, app.input_mode()) {
                    Ok(Some(event)) => event,
                    Ok(None) => {
                        draw(&app, rows, cols).await?;
                        continue;
                    }
                    Err(e) => {
                        app.set_error(e.to_string());
                        draw(&app, rows, cols).await?;
                        continue;
                    }
                }
            }
        };

        let (redraw, actions) = match handle_event(&mut app, event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                app.set_error(e.to_string());
                (true, vec![])
            }
        };

        let mut quit = false;
        for action in actions {
            match action {
                Action::Quit => quit = true,
                Action::Navigate(route) => {
                    tracing::debug!(%route, "navigate");
                    write_stdout(&format!("\u{1b}]0;hero-catalog {route}\u{7}")).await?;
                }
            }
        }
        if quit {
            break;
        }
        if redraw {
            draw(&app, rows, cols).await?;
        }
    }

    tracing::info!("hero catalog stopped");
    write_stdout("\u{1b}[0m\n").await
}

fn open_storage(config: &Config, ephemeral: bool) -> Arc<dyn KeyValueStore> {
    if ephemeral {
        tracing::debug!("using in-memory storage");
        return Arc::new(MemoryStore::default());
    }
    let path = storage_file(&config.data_dir());
    match JsonFileStore::open(path.clone()) {
        Ok(store) => {
            tracing::debug!(path = %path.display(), "opened storage");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "failed to open storage, falling back to memory");
            Arc::new(MemoryStore::default())
        }
    }
}

/// Terminal size from `LINES`/`COLUMNS`, else 24x80.
fn terminal_size() -> (usize, usize) {
    let read = |name: &str, default: usize| {
        std::env::var(name)
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|value: &usize| *value > 0)
            .unwrap_or(default)
    };
    (read("LINES", DEFAULT_ROWS), read("COLUMNS", DEFAULT_COLS))
}

async fn draw(app: &App, rows: usize, cols: usize) -> io::Result<()> {
    let frame = render(app, rows, cols);
    // The last row is left free for the command prompt.
    let prompt = format!("\u{1b}[{rows};1H> ");
    write_stdout(&format!("{CLEAR_SCREEN}{frame}{prompt}")).await
}

async fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}

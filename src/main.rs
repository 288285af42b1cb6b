// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Builder TUI.
//!
//! A terminal-based playlist builder: search a fixed track catalog, tick
//! tracks, and move them into or out of a personal playlist.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small, synchronous state model.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, manages the terminal lifecycle and
//!   renders the UI after every event.
//! * An **Input Thread** forwards keyboard events into the event channel.
//! * The **Playlist State** reports every change it makes back into the same
//!   channel, which triggers the next render.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the event loop fails. Communication
//! between the input thread and the UI is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod components;
mod config;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{error, info, warn};

use crate::{
    actions::events::{AppEvent, Focus, process_events},
    components::{PlaylistView, SearchView, TrackListView},
    config::AppConfig,
    model::{
        catalog::{BuiltinCatalog, Catalog, CatalogSource, FileCatalog},
        state::PlaylistState,
    },
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub state: PlaylistState,

    pub search_view: SearchView,
    pub track_list_view: TrackListView,
    pub playlist_view: PlaylistView,
}

impl App {
    /// Create a new instance of application state, with the catalog taken
    /// from `catalog_source` and the search field focused.
    pub fn new(config: AppConfig, catalog_source: &dyn CatalogSource) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let catalog = Catalog::from_source(catalog_source).context("Failed to load track catalog")?;

        let mut state = PlaylistState::new(catalog);
        state.subscribe(Box::new(event_tx.clone()));

        let mut app = Self {
            config,
            theme: Theme::default(),
            focus: Focus::Search,
            event_tx,
            event_rx,
            state,
            search_view: SearchView::new(),
            track_list_view: TrackListView::new(),
            playlist_view: PlaylistView::new(),
        };

        app.track_list_view.table_state.reset(app.state.track_list().len());
        app.set_focus(Focus::Search);

        Ok(app)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;

        self.search_view.is_active = focus == Focus::Search;
        self.track_list_view.is_active = focus == Focus::TrackList;
        self.playlist_view.is_active = focus == Focus::Playlist;

        match focus {
            Focus::TrackList => self.track_list_view.table_state.clamp(self.state.track_list().len()),
            Focus::Playlist => self.playlist_view.table_state.clamp(self.state.playlist().len()),
            Focus::Search => {}
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let _log_guard = logging::init_logging(&config).context("Failed to initialise logging")?;

    if let Err(e) = &loaded {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let catalog_source: Box<dyn CatalogSource> = match &config.catalog_file {
        Some(path) => {
            info!(path = %path.display(), "Using catalog file");
            Box::new(FileCatalog::new(path))
        }
        None => Box::new(BuiltinCatalog),
    };

    let mut app = App::new(config, catalog_source.as_ref()).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = ?e, "Application error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The input thread translates raw key presses into [`AppEvent::Key`] events
/// and exits once the event loop has dropped its receiver.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    info!(
        tracks = app.state.catalog().len(),
        config_version = app.config.version,
        "Starting playlist builder"
    );

    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(..)) => {
                    if tx_keys.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                }
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

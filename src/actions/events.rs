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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), the playlist state, and
//! the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: Key events are routed to the focused view, which answers
//!    with intent events; [`process_events`] applies those to the
//!    [`PlaylistState`].
//! 3. **Notify**: The state reports each change back through the same
//!    channel, as the event sender is registered as a [`PlaylistObserver`].
//! 4. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, info};

use crate::{
    App,
    model::{
        ListKind,
        state::{PlaylistObserver, PlaylistState, StateChange},
    },
    render::draw,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Search,
    TrackList,
    Playlist,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Search => Focus::TrackList,
            Focus::TrackList => Focus::Playlist,
            Focus::Playlist => Focus::Search,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Playlist,
            Focus::TrackList => Focus::Search,
            Focus::Playlist => Focus::TrackList,
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    SetFocus(Focus),

    SearchChanged(String),

    AddTrack(String),
    AddSelectedTracks,
    RemoveTrack(String),
    RemoveSelectedTracks,

    SetSelected(ListKind, String, bool),
    SelectAll(ListKind),
    SelectNone(ListKind),
    SelectInverse(ListKind),

    StateChanged(StateChange),

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, state: &PlaylistState, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            info!("Exit requested");
            break;
        }

        process_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single application event to the application state.
pub(crate) fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SetFocus(focus) => app.set_focus(focus),

        AppEvent::SearchChanged(query) => app.state.set_query(&query),

        AppEvent::AddTrack(id) => app.state.add_one(&id),
        AppEvent::AddSelectedTracks => app.state.add_selected(),
        AppEvent::RemoveTrack(id) => app.state.remove_one(&id),
        AppEvent::RemoveSelectedTracks => app.state.remove_selected(),

        AppEvent::SetSelected(list, id, is_selected) => app.state.set_selected(list, &id, is_selected),
        AppEvent::SelectAll(list) => app.state.select_all(list),
        AppEvent::SelectNone(list) => app.state.select_none(list),
        AppEvent::SelectInverse(list) => app.state.select_inverse(list),

        AppEvent::StateChanged(change) => match change {
            StateChange::QueryChanged { query, matches } => {
                debug!(%query, matches, "Track list filtered");
                app.track_list_view.table_state.reset(matches);
            }
            StateChange::PlaylistChanged { len } => app.playlist_view.table_state.clamp(len),
            StateChange::SelectionChanged { list, selected } => {
                debug!(list = list.label(), selected, "Selection changed");
            }
        },

        AppEvent::Resize | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Focus cycling and quitting are handled here; everything else is handed
/// to the view that currently has focus.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the event loop.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        (KeyCode::Tab, _) => {
            app.event_tx.send(AppEvent::SetFocus(app.focus.next()))?;
            return Ok(());
        }
        (KeyCode::BackTab, _) => {
            app.event_tx.send(AppEvent::SetFocus(app.focus.previous()))?;
            return Ok(());
        }
        _ => {}
    }

    if app.focus != Focus::Search {
        match key.code {
            KeyCode::Char('q') => {
                app.event_tx.send(AppEvent::ExitApplication)?;
                return Ok(());
            }
            KeyCode::Char('/') => {
                app.event_tx.send(AppEvent::SetFocus(Focus::Search))?;
                return Ok(());
            }
            _ => {}
        }
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::Search => app.search_view.process_event(&event, &app.state, &app.event_tx),
        Focus::TrackList => app.track_list_view.process_event(&event, &app.state, &app.event_tx),
        Focus::Playlist => app.playlist_view.process_event(&event, &app.state, &app.event_tx),
    }
}

impl PlaylistObserver for Sender<AppEvent> {
    fn on_state_changed(&self, change: &StateChange) {
        if self.send(AppEvent::StateChanged(change.clone())).is_err() {
            debug!("Event loop gone, dropping state change");
        }
    }
}

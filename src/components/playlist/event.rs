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

//! Event routing for the playlist view.
//!
//! This module implements the application event processor for the playlist
//! interface, delegating keyboard input to the underlying track table
//! when the view is active.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::{PlaylistView, TrackTableAction, selection_event},
    model::{ListKind, state::PlaylistState},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: &Event, state: &PlaylistState, event_tx: &Sender<AppEvent>) -> Result<()> {
        if self.is_active {
            if let Some(action) = self.table_state.as_widget(state.playlist(), true).process_event(event) {
                let app_event = match action {
                    TrackTableAction::ActivateCurrent(track_id) => Some(AppEvent::RemoveTrack(track_id)),
                    TrackTableAction::ActivateSelection => Some(AppEvent::RemoveSelectedTracks),
                    other => selection_event(ListKind::Playlist, &other),
                };

                if let Some(app_event) = app_event {
                    event_tx.send(app_event)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::catalog::{BuiltinCatalog, Catalog};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn row_and_bulk_actions_become_remove_events() {
        let (tx, rx) = mpsc::channel();
        let mut state = PlaylistState::new(Catalog::from_source(&BuiltinCatalog).unwrap());
        let first_id = state.track_list()[0].id.clone();
        state.add_one(&first_id);

        let mut view = PlaylistView::new();
        view.is_active = true;
        view.table_state.reset(state.playlist().len());

        view.process_event(&key(KeyCode::Enter), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Char('b')), &state, &tx).unwrap();
        view.process_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            &state,
            &tx,
        )
        .unwrap();

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(
            &events[..],
            [
                AppEvent::RemoveTrack(removed),
                AppEvent::RemoveSelectedTracks,
                AppEvent::SelectAll(ListKind::Playlist),
            ] if *removed == first_id
        ));
    }
}

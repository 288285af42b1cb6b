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

//! Event routing for the track list view.
//!
//! Keyboard input goes to the underlying track table while the view is
//! active; the table's actions become add and selection events.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::{TrackListView, TrackTableAction, selection_event},
    model::{ListKind, state::PlaylistState},
};

impl AppEventProcessor for TrackListView {
    fn process_event(&mut self, event: &Event, state: &PlaylistState, event_tx: &Sender<AppEvent>) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Some(action) = self.table_state.as_widget(state.track_list(), true).process_event(event) else {
            return Ok(());
        };

        let app_event = match action {
            TrackTableAction::ActivateCurrent(track_id) => Some(AppEvent::AddTrack(track_id)),
            TrackTableAction::ActivateSelection => Some(AppEvent::AddSelectedTracks),
            other => selection_event(ListKind::TrackList, &other),
        };

        if let Some(app_event) = app_event {
            event_tx.send(app_event)?;
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
    fn row_and_bulk_actions_become_add_events() {
        let (tx, rx) = mpsc::channel();
        let state = PlaylistState::new(Catalog::from_source(&BuiltinCatalog).unwrap());
        let mut view = TrackListView::new();
        view.is_active = true;
        view.table_state.reset(state.track_list().len());

        let first_id = state.track_list()[0].id.clone();

        view.process_event(&key(KeyCode::Char(' ')), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Char('k')), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Char('b')), &state, &tx).unwrap();

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(
            &events[..],
            [
                AppEvent::SetSelected(ListKind::TrackList, selected, true),
                AppEvent::AddTrack(added),
                AppEvent::AddSelectedTracks,
            ] if *selected == first_id && *added == first_id
        ));
    }
}

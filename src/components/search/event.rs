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

//! Event routing for the search view.
//!
//! Keyboard input is delegated to the managed input component while the view
//! is active. `Esc`, `Enter` and `Down` hand focus over to the track list.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor, Focus},
    components::SearchView,
    model::state::PlaylistState,
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: &Event, _state: &PlaylistState, event_tx: &Sender<AppEvent>) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        if let Event::Key(key_event) = event {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Down) {
                event_tx.send(AppEvent::SetFocus(Focus::TrackList))?;
                return Ok(());
            }
        }

        if let Some(changed) = self.input.handle_event(event) {
            if changed.value {
                event_tx.send(AppEvent::SearchChanged(self.input.value().to_string()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::catalog::{BuiltinCatalog, Catalog};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state() -> PlaylistState {
        PlaylistState::new(Catalog::from_source(&BuiltinCatalog).unwrap())
    }

    #[test]
    fn typing_reports_each_new_query() {
        let (tx, rx) = mpsc::channel();
        let state = state();
        let mut view = SearchView::new();
        view.is_active = true;

        view.process_event(&key(KeyCode::Char('b')), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Char('l')), &state, &tx).unwrap();
        view.process_event(&key(KeyCode::Backspace), &state, &tx).unwrap();

        let queries: Vec<String> = rx
            .try_iter()
            .map(|event| match event {
                AppEvent::SearchChanged(query) => query,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(queries, vec!["b", "bl", "b"]);
    }

    #[test]
    fn cursor_movement_does_not_report_a_query() {
        let (tx, rx) = mpsc::channel();
        let state = state();
        let mut view = SearchView::new();
        view.is_active = true;

        view.process_event(&key(KeyCode::Char('b')), &state, &tx).unwrap();
        rx.try_recv().unwrap();

        view.process_event(&key(KeyCode::Left), &state, &tx).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_moves_focus_to_track_list() {
        let (tx, rx) = mpsc::channel();
        let state = state();
        let mut view = SearchView::new();
        view.is_active = true;

        view.process_event(&key(KeyCode::Esc), &state, &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::SetFocus(Focus::TrackList))));
    }

    #[test]
    fn inactive_view_ignores_input() {
        let (tx, rx) = mpsc::channel();
        let state = state();
        let mut view = SearchView::new();

        view.process_event(&key(KeyCode::Char('b')), &state, &tx).unwrap();
        assert!(rx.try_recv().is_err());
        assert_eq!(view.input.value(), "");
    }
}

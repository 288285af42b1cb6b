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

//! Interactive track table widget and state management.
//!
//! This module provides a reusable table component for displaying and
//! selecting tracks. It separates persistent state (`TrackTableState`, the
//! cursor position) from the transient widget view (`TrackTable`), which
//! borrows the tracks to show for a single event or frame.
//!
//! The table never changes tracks itself; it reports what the user asked for
//! as a [`TrackTableAction`] and leaves the owning view to turn that into an
//! application event.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Track;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    SetSelected(String, bool),
    ActivateCurrent(String),
    ActivateSelection,
    SelectAll,
    SelectNone,
    SelectInverse,
}

pub(crate) struct TrackTableState {
    pub(crate) table_state: TableState,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, tracks: &'a [Track], focused: bool) -> TrackTable<'a> {
        TrackTable {
            tracks,
            table_state: &mut self.table_state,
            focused,
        }
    }

    /// Keeps the cursor on a valid row after the list shrinks or grows.
    pub(crate) fn clamp(&mut self, len: usize) {
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn reset(&mut self, len: usize) {
        self.table_state.select(if len == 0 { None } else { Some(0) });
    }
}

pub(crate) struct TrackTable<'a> {
    tracks: &'a [Track],
    table_state: &'a mut TableState,
    focused: bool,
}

impl<'a> TrackTable<'a> {
    fn current(&self) -> Option<&'a Track> {
        self.table_state.selected().and_then(|i| self.tracks.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.tracks.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    fn toggle_current(&self) -> Option<TrackTableAction> {
        self.current()
            .map(|track| TrackTableAction::SetSelected(track.id.clone(), !track.is_selected))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new("a", "Alpha"),
            Track::new("b", "Beta").with_selected(true),
            Track::new("c", "Gamma"),
        ]
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn navigation_wraps_around() {
        let tracks = tracks();
        let mut state = TrackTableState::new();

        let mut table = state.as_widget(&tracks, true);
        table.process_event(&key(KeyCode::Char('k')));
        assert_eq!(table.table_state.selected(), Some(0));
        table.process_event(&key(KeyCode::Char('k')));
        assert_eq!(table.table_state.selected(), Some(2));
        table.process_event(&key(KeyCode::Down));
        assert_eq!(table.table_state.selected(), Some(0));
        table.process_event(&key(KeyCode::Char('G')));
        assert_eq!(table.table_state.selected(), Some(2));
        table.process_event(&key(KeyCode::Char('g')));
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn space_toggles_current_and_moves_down() {
        let tracks = tracks();
        let mut state = TrackTableState::new();
        state.reset(tracks.len());

        let mut table = state.as_widget(&tracks, true);
        let action = table.process_event(&key(KeyCode::Char(' ')));
        assert_eq!(action, Some(TrackTableAction::SetSelected("a".into(), true)));

        let action = table.process_event(&key(KeyCode::Char(' ')));
        assert_eq!(action, Some(TrackTableAction::SetSelected("b".into(), false)));
        assert_eq!(state.table_state.selected(), Some(2));
    }

    #[test]
    fn enter_activates_current_row() {
        let tracks = tracks();
        let mut state = TrackTableState::new();
        state.reset(tracks.len());

        let mut table = state.as_widget(&tracks, true);
        table.process_event(&key(KeyCode::Char('j')));
        let action = table.process_event(&key(KeyCode::Enter));
        assert_eq!(action, Some(TrackTableAction::ActivateCurrent("b".into())));
    }

    #[test]
    fn bulk_keys_map_to_actions() {
        let tracks = tracks();
        let mut state = TrackTableState::new();

        let mut table = state.as_widget(&tracks, true);
        assert_eq!(table.process_event(&key(KeyCode::Char('b'))), Some(TrackTableAction::ActivateSelection));
        assert_eq!(table.process_event(&ctrl('a')), Some(TrackTableAction::SelectAll));
        assert_eq!(table.process_event(&ctrl('l')), Some(TrackTableAction::SelectNone));
        assert_eq!(table.process_event(&ctrl('t')), Some(TrackTableAction::SelectInverse));
    }

    #[test]
    fn modified_bulk_key_is_ignored() {
        let tracks = tracks();
        let mut state = TrackTableState::new();

        let mut table = state.as_widget(&tracks, true);
        assert_eq!(table.process_event(&ctrl('b')), None);
        let alt_b = Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(table.process_event(&alt_b), None);
    }

    #[test]
    fn empty_table_produces_no_row_actions() {
        let mut state = TrackTableState::new();

        let mut table = state.as_widget(&[], true);
        assert_eq!(table.process_event(&key(KeyCode::Char(' '))), None);
        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(table.table_state.selected(), None);
    }

    #[test]
    fn clamp_keeps_cursor_in_range() {
        let mut state = TrackTableState::new();
        state.table_state.select(Some(5));

        state.clamp(3);
        assert_eq!(state.table_state.selected(), Some(2));

        state.clamp(0);
        assert_eq!(state.table_state.selected(), None);

        state.clamp(2);
        assert_eq!(state.table_state.selected(), Some(0));
    }
}

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

//! Playlist builder state.
//!
//! [`PlaylistState`] owns the catalog, the search query, the track list view
//! and the playlist. Every operation delegates to the pure transitions in
//! [`crate::model::playlist`] and [`crate::model::search`], swaps in the
//! result and, when something actually changed, tells each registered
//! [`PlaylistObserver`] so the front end can redraw.

use tracing::debug;

use crate::model::{ListKind, Track, catalog::Catalog, playlist, search};

/// Describes a state transition that changed something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StateChange {
    QueryChanged { query: String, matches: usize },
    PlaylistChanged { len: usize },
    SelectionChanged { list: ListKind, selected: usize },
}

pub(crate) trait PlaylistObserver {
    fn on_state_changed(&self, change: &StateChange);
}

pub(crate) struct PlaylistState {
    catalog: Catalog,
    query: String,
    track_list: Vec<Track>,
    playlist: Vec<Track>,
    observers: Vec<Box<dyn PlaylistObserver>>,
}

impl PlaylistState {
    /// Creates the state with an empty query, so the track list shows the
    /// whole catalog, and an empty playlist.
    pub(crate) fn new(catalog: Catalog) -> Self {
        let track_list = search::filter(catalog.tracks(), "");

        Self {
            catalog,
            query: String::new(),
            track_list,
            playlist: vec![],
            observers: vec![],
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Box<dyn PlaylistObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn track_list(&self) -> &[Track] {
        &self.track_list
    }

    pub(crate) fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub(crate) fn tracks(&self, list: ListKind) -> &[Track] {
        match list {
            ListKind::TrackList => &self.track_list,
            ListKind::Playlist => &self.playlist,
        }
    }

    pub(crate) fn selected_count(&self, list: ListKind) -> usize {
        self.tracks(list).iter().filter(|t| t.is_selected).count()
    }

    pub(crate) fn is_not_found(&self) -> bool {
        search::is_not_found(&self.query, &self.track_list)
    }

    /// Re-filters the catalog. The view is rebuilt from the catalog, so any
    /// selection in the previous view is dropped.
    pub(crate) fn set_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }

        self.query = query.to_string();
        self.track_list = search::filter(self.catalog.tracks(), query);

        self.notify(StateChange::QueryChanged {
            query: self.query.clone(),
            matches: self.track_list.len(),
        });
    }

    pub(crate) fn add_one(&mut self, id: &str) {
        let updated = playlist::add_one(&self.track_list, &self.playlist, id);
        self.replace_playlist(updated);
    }

    pub(crate) fn add_selected(&mut self) {
        let updated = playlist::add_selected(&self.track_list, &self.playlist);
        self.replace_playlist(updated);
    }

    pub(crate) fn remove_one(&mut self, id: &str) {
        let updated = playlist::remove_one(&self.playlist, id);
        self.replace_playlist(updated);
    }

    pub(crate) fn remove_selected(&mut self) {
        let updated = playlist::remove_selected(&self.playlist);
        self.replace_playlist(updated);
    }

    pub(crate) fn set_selected(&mut self, list: ListKind, id: &str, is_selected: bool) {
        let updated = playlist::set_selected(self.tracks(list), id, is_selected);
        self.replace_selection(list, updated);
    }

    pub(crate) fn select_all(&mut self, list: ListKind) {
        let updated = playlist::select_all(self.tracks(list));
        self.replace_selection(list, updated);
    }

    pub(crate) fn select_none(&mut self, list: ListKind) {
        let updated = playlist::select_none(self.tracks(list));
        self.replace_selection(list, updated);
    }

    pub(crate) fn select_inverse(&mut self, list: ListKind) {
        let updated = playlist::select_inverse(self.tracks(list));
        self.replace_selection(list, updated);
    }

    fn replace_playlist(&mut self, updated: Vec<Track>) {
        if updated == self.playlist {
            return;
        }

        self.playlist = updated;
        self.notify(StateChange::PlaylistChanged {
            len: self.playlist.len(),
        });
    }

    fn replace_selection(&mut self, list: ListKind, updated: Vec<Track>) {
        let target = match list {
            ListKind::TrackList => &mut self.track_list,
            ListKind::Playlist => &mut self.playlist,
        };

        if updated == *target {
            return;
        }

        *target = updated;
        self.notify(StateChange::SelectionChanged {
            list,
            selected: self.selected_count(list),
        });
    }

    fn notify(&self, change: StateChange) {
        debug!(?change, "Playlist state changed");

        for observer in &self.observers {
            observer.on_state_changed(&change);
        }
    }
}

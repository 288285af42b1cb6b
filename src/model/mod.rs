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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the tracks
//! offered by the catalog and collected into the playlist, together with the
//! state that ties the two lists together.

pub(crate) mod catalog;
pub(crate) mod playlist;
pub(crate) mod search;
pub(crate) mod state;

/// A single track, as shown in either the track list or the playlist.
///
/// Tracks are plain values: a transition never edits a track in place, it
/// produces a copy with the updated selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) is_selected: bool,
}

impl Track {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_selected: false,
        }
    }

    pub(crate) fn with_selected(&self, is_selected: bool) -> Self {
        Self {
            is_selected,
            ..self.clone()
        }
    }
}

/// Identifies which of the two lists a selection change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    TrackList,
    Playlist,
}

impl ListKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ListKind::TrackList => "Tracks",
            ListKind::Playlist => "Playlist",
        }
    }
}

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

//! Playlist transitions.
//!
//! Pure functions that take the current lists and return the next version of
//! one of them. None of them can fail: an id that is not present turns the
//! operation into a no-op, which mirrors a UI that only ever acts on rows it
//! has just rendered.

use std::collections::HashSet;

use crate::model::Track;

fn contains_id(tracks: &[Track], id: &str) -> bool {
    tracks.iter().any(|track| track.id == id)
}

/// Appends the track with `id` from the track list to the playlist.
///
/// Nothing changes when the id is not in the track list, or is already in the
/// playlist. The appended copy is always unselected.
pub(crate) fn add_one(track_list: &[Track], playlist: &[Track], id: &str) -> Vec<Track> {
    let mut updated = playlist.to_vec();

    if contains_id(playlist, id) {
        return updated;
    }

    if let Some(track) = track_list.iter().find(|track| track.id == id) {
        updated.push(track.with_selected(false));
    }

    updated
}

/// Appends every selected track of the track list that the playlist does not
/// already hold, in track list order, each reset to unselected.
pub(crate) fn add_selected(track_list: &[Track], playlist: &[Track]) -> Vec<Track> {
    let mut present: HashSet<&str> = playlist.iter().map(|track| track.id.as_str()).collect();
    let mut updated = playlist.to_vec();

    for track in track_list.iter().filter(|track| track.is_selected) {
        if present.insert(track.id.as_str()) {
            updated.push(track.with_selected(false));
        }
    }

    updated
}

/// Removes the first playlist entry with `id`, keeping the order of the rest.
pub(crate) fn remove_one(playlist: &[Track], id: &str) -> Vec<Track> {
    let mut updated = playlist.to_vec();

    if let Some(index) = updated.iter().position(|track| track.id == id) {
        updated.remove(index);
    }

    updated
}

/// Removes every selected playlist entry, keeping the order of the survivors.
pub(crate) fn remove_selected(playlist: &[Track]) -> Vec<Track> {
    playlist
        .iter()
        .filter(|track| !track.is_selected)
        .cloned()
        .collect()
}

/// Sets the selection flag of the entry with `id`, leaving every other entry
/// untouched.
pub(crate) fn set_selected(tracks: &[Track], id: &str, is_selected: bool) -> Vec<Track> {
    tracks
        .iter()
        .map(|track| {
            if track.id == id {
                track.with_selected(is_selected)
            } else {
                track.clone()
            }
        })
        .collect()
}

pub(crate) fn select_all(tracks: &[Track]) -> Vec<Track> {
    tracks.iter().map(|track| track.with_selected(true)).collect()
}

pub(crate) fn select_none(tracks: &[Track]) -> Vec<Track> {
    tracks.iter().map(|track| track.with_selected(false)).collect()
}

pub(crate) fn select_inverse(tracks: &[Track]) -> Vec<Track> {
    tracks
        .iter()
        .map(|track| track.with_selected(!track.is_selected))
        .collect()
}

#[cfg(test)]
mod tests;

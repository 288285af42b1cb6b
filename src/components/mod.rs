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

//! Interactive UI components.
//!
//! Each component owns only its UI state (cursor position, input buffer) and
//! reads track data from [`crate::model::state::PlaylistState`] when handling
//! an event or drawing a frame. User intent is reported back to the event
//! loop as [`AppEvent`]s.

mod playlist;
mod search;
mod track_list;
mod track_table;

pub(crate) use playlist::PlaylistView;
pub(crate) use search::SearchView;
pub(crate) use track_list::TrackListView;
pub(crate) use track_table::{TrackTable, TrackTableAction, TrackTableState};

use crate::{actions::events::AppEvent, model::ListKind};

/// Maps the selection actions shared by every track table to the matching
/// application event for `list`.
fn selection_event(list: ListKind, action: &TrackTableAction) -> Option<AppEvent> {
    match action {
        TrackTableAction::SetSelected(id, is_selected) => {
            Some(AppEvent::SetSelected(list, id.clone(), *is_selected))
        }
        TrackTableAction::SelectAll => Some(AppEvent::SelectAll(list)),
        TrackTableAction::SelectNone => Some(AppEvent::SelectNone(list)),
        TrackTableAction::SelectInverse => Some(AppEvent::SelectInverse(list)),
        TrackTableAction::ActivateCurrent(_) | TrackTableAction::ActivateSelection => None,
    }
}

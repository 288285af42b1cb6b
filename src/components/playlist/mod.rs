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

//! Playlist view.
//!
//! This module coordinates the `TrackTableState` for the user's playlist,
//! where rows are removed one at a time or in bulk from the ticked selection.

mod event;
mod render;

use crate::components::TrackTableState;

pub(crate) struct PlaylistView {
    pub(crate) table_state: TrackTableState,
    pub(crate) is_active: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TrackTableState::new(),
            is_active: false,
        }
    }
}

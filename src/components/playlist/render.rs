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

//! UI rendering logic for the playlist view.
//!
//! This module handles the visual representation of the playlist interface by
//! delegating the drawing process to the underlying track table widget based
//! on the current theme and layout constraints.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::PlaylistView,
    model::{ListKind, state::PlaylistState},
    render::Render,
    theme::Theme,
    util::format::format_count,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &PlaylistState, theme: &Theme) {
        let border_colour = if self.is_active { theme.focus_border_colour } else { theme.border_colour };

        let mut title = format!(
            " {} | {} ",
            ListKind::Playlist.label(),
            format_count(state.playlist().len(), "track"),
        );

        let selected_count = state.selected_count(ListKind::Playlist);
        if selected_count > 0 {
            let _ = write!(title, "| {} selected ", selected_count);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(title)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if state.playlist().is_empty() {
            let hint = Paragraph::new("Playlist is empty. Press Enter on a track to add it.")
                .style(Style::default().fg(theme.hint_colour))
                .wrap(Wrap { trim: true });
            f.render_widget(hint, inner);
            return;
        }

        self.table_state
            .as_widget(state.playlist(), self.is_active)
            .draw(f, inner, theme);
    }
}

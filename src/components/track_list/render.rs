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

//! UI rendering logic for the track list view.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::TrackListView,
    model::{ListKind, state::PlaylistState},
    render::Render,
    theme::Theme,
    util::format::format_count,
};

impl TrackListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &PlaylistState, theme: &Theme) {
        let border_colour = if self.is_active { theme.focus_border_colour } else { theme.border_colour };

        let mut title = format!(
            " {} | {} of {} ",
            ListKind::TrackList.label(),
            state.track_list().len(),
            format_count(state.catalog().len(), "track"),
        );

        let selected_count = state.selected_count(ListKind::TrackList);
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

        if state.is_not_found() {
            let message = Paragraph::new("Not found")
                .style(Style::default().fg(theme.warning_colour).add_modifier(Modifier::ITALIC));
            f.render_widget(message, inner);
            return;
        }

        self.table_state
            .as_widget(state.track_list(), self.is_active)
            .draw(f, inner, theme);
    }
}

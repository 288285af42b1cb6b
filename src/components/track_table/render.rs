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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of track data, including
//! the checkbox column, cursor highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::TrackTable,
    render::{
        Render,
        icons::{CHECKBOX_OFF, CHECKBOX_ON},
    },
    theme::Theme,
};

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|item| {
            let checkbox = if item.is_selected { CHECKBOX_ON } else { CHECKBOX_OFF };

            Row::new(vec![
                Cell::from(Line::from(checkbox).style(Style::default().fg(theme.table_checkbox_fg))),
                Cell::from(Line::from(item.title.as_str()).style(Style::default().fg(theme.table_track_fg))),
            ])
        });

        let highlight = if self.focused {
            Style::default().bg(theme.table_highlight_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(0)])
            .header(
                Row::new(vec![Cell::from(""), Cell::from("Title")])
                    .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .row_highlight_style(highlight)
            .column_spacing(1)
            .block(Block::default());

        let state = &mut *self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}

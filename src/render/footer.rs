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

//! Render the key hint footer.
//!
//! The footer lists the keys that apply to whichever view has focus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, actions::events::Focus};

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => "type to search | Enter/Esc tracks | Tab next pane | Ctrl-c quit",
        Focus::TrackList => {
            "Space tick | Enter add | b add ticked | ^a all | ^l none | ^t invert | / search | Tab next | q quit"
        }
        Focus::Playlist => {
            "Space tick | Enter remove | b remove ticked | ^a all | ^l none | ^t invert | / search | Tab next | q quit"
        }
    }
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(key_hints(app.focus)).style(Style::default().fg(app.theme.hint_colour)),
        container[0],
    );
}

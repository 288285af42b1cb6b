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

//! UI rendering logic for the search view.
//!
//! Draws the bordered search field, scrolling the text horizontally so the
//! cursor stays visible, and places the terminal cursor while the view is
//! active.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchView, render::icons::ICON_SEARCH, theme::Theme};

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active { theme.focus_border_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} Search ", ICON_SEARCH))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        let scroll = self.input.visual_scroll(inner.width as usize);
        let paragraph = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(block);

        f.render_widget(paragraph, area);

        if self.is_active {
            let cursor_x = inner.x + self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}

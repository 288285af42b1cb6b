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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod footer;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{App, render::footer::draw_footer, theme::Theme};

const HEADER_TEXT: &str = "Create your own unique playlist";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, search field, the
///   track list and playlist side by side, and a key hint footer.
/// * **State Mapping**: Handing the playlist state to each view.
/// * **Styling**: Applying colors and borders defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views to
///   update internal view state (like table scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(HEADER_TEXT.to_uppercase()).style(
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, outer[0]);

    app.search_view.draw(f, outer[1], &app.theme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[2]);

    app.track_list_view.draw(f, main[0], &app.state, &app.theme);
    app.playlist_view.draw(f, main[1], &app.state, &app.theme);

    draw_footer(f, outer[3], app);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        actions::events::{AppEvent, process_event},
        config::AppConfig,
        model::catalog::BuiltinCatalog,
    };

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn initial_screen_shows_catalog_and_empty_playlist() {
        let mut app = App::new(AppConfig::default(), &BuiltinCatalog).unwrap();
        let screen = render(&mut app);

        assert!(screen.contains("CREATE YOUR OWN UNIQUE PLAYLIST"));
        assert!(screen.contains("Blue in Green"));
        assert!(screen.contains("Playlist is empty"));
        assert!(!screen.contains("Not found"));
    }

    #[test]
    fn unmatched_query_shows_not_found() {
        let mut app = App::new(AppConfig::default(), &BuiltinCatalog).unwrap();
        process_event(&mut app, AppEvent::SearchChanged("xyzzy".into())).unwrap();

        let screen = render(&mut app);
        assert!(screen.contains("Not found"));
    }

    #[test]
    fn added_track_appears_in_playlist_header() {
        let mut app = App::new(AppConfig::default(), &BuiltinCatalog).unwrap();
        process_event(&mut app, AppEvent::AddTrack("1".into())).unwrap();

        let screen = render(&mut app);
        assert!(screen.contains("Playlist | 1 track"));
        assert!(!screen.contains("Playlist is empty"));
    }
}

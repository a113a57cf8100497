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

pub(crate) mod icons;
mod player;
mod stats;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    App,
    render::{player::draw_player, stats::draw_stats},
};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`]:
///
/// * **Header**: application title and the search bar.
/// * **Stats**: per-status tiles derived from the catalog.
/// * **Library**: the filtered entry table.
/// * **Player**: the transport pane for the selected entry.
/// * **Overlay**: the add-entry dialog, when open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(outer[0]);

    let title = Paragraph::new(vec![
        Line::from("AudioQueue").bold().fg(app.theme.accent_colour),
        Line::from("Your listening library").fg(app.theme.hint_colour),
    ]);
    f.render_widget(title, header[0]);

    app.search.draw(f, header[1], &app.theme);

    draw_stats(f, outer[1], app);

    let theme = app.theme;
    let query = app.search.query().to_string();
    app.entry_table.draw(f, outer[2], &theme, &query);

    draw_player(f, outer[3], app);

    draw_footer(f, outer[4], app);

    if app.add_form.is_open() {
        app.add_form.draw(f, area, &app.theme);
    }
}

fn draw_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let footer = if let Some(message) = &app.last_error {
        Paragraph::new(message.as_str()).style(Style::default().red())
    } else {
        Paragraph::new("space play/pause   \u{2190}/\u{2192} seek   / search   a add   q quit")
            .style(Style::default().fg(app.theme.hint_colour))
            .alignment(Alignment::Center)
    };
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    fn rendered_text(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn footer_shows_the_last_playback_error() {
        let mut app = App::new(AppConfig::default()).expect("app");
        app.last_error = Some("Playback error: Failed to load file".to_string());

        let text = rendered_text(&mut app);
        assert!(text.contains("Playback error: Failed to load file"));
    }

    #[test]
    fn player_pane_shows_the_selected_entry_description() {
        let mut app = App::new(AppConfig::default()).expect("app");

        // The newest seed entry is selected at startup.
        let text = rendered_text(&mut app);
        assert!(text.contains("Follow your dreams"));
    }
}

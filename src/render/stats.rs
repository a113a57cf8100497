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

//! Render the statistics tiles.
//!
//! One tile per status bucket plus the catalog total, recomputed from the
//! aggregator on every catalog change.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, theme::Theme};

pub(crate) fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &app.stats;
    let theme = &app.theme;

    draw_tile(f, tiles[0], theme, "Total Items", stats.total, theme.accent_colour);
    draw_tile(f, tiles[1], theme, "To Listen", stats.to_listen, theme.status_to_listen_fg);
    draw_tile(f, tiles[2], theme, "Listening", stats.listening, theme.status_listening_fg);
    draw_tile(f, tiles[3], theme, "Completed", stats.completed, theme.status_completed_fg);
}

fn draw_tile(f: &mut Frame, area: Rect, theme: &Theme, title: &str, value: usize, colour: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(format!(" {} ", title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let value = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colour).bold());
    f.render_widget(value, inner);
}

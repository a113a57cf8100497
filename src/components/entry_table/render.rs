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

//! UI rendering logic for the entry table.
//!
//! This module handles the visual representation of the filtered catalog,
//! including column layout, selection highlighting, and the empty-state
//! hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::EntryTable,
    model::{Entry, Status},
    render::icons::ICON_AUDIO,
    theme::Theme,
};

impl EntryTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, query: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
            .title(format!(" Your Library ({}) ", self.entries.len()));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.entries.is_empty() {
            self.draw_empty_hint(f, inner, theme, query);
            return;
        }

        let rows = self.entries.iter().map(|entry| {
            let audio_marker = if entry.audio.is_some() { ICON_AUDIO } else { "" };

            Row::new(vec![
                Cell::from(Line::from(audio_marker).alignment(Alignment::Center)),
                Cell::from(
                    Line::from(entry.title.as_str())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(entry.author.as_str())
                        .style(Style::default().fg(theme.table_author_fg)),
                ),
                Cell::from(
                    Line::from(entry.category.map(|c| c.label()).unwrap_or(""))
                        .style(Style::default().fg(theme.table_category_fg)),
                ),
                Cell::from(
                    Line::from(entry.duration.as_str())
                        .style(Style::default().fg(theme.table_duration_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(entry.status.label())
                        .style(Style::default().fg(status_colour(entry, theme))),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Length(12),
                Constraint::Length(9),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Author"),
                Cell::from("Category"),
                Cell::from(Line::from("Duration").alignment(Alignment::Right)),
                Cell::from("Status"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        f.render_stateful_widget(table, inner, &mut self.table_state);
    }

    fn draw_empty_hint(&self, f: &mut Frame, area: Rect, theme: &Theme, query: &str) {
        let hint = if query.is_empty() {
            "Library is empty. Press 'a' to add your first audiobook or podcast."
        } else {
            "No entries found. Try adjusting your search terms."
        };

        let paragraph = Paragraph::new(Line::from(hint))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hint_colour));
        f.render_widget(paragraph, area);
    }
}

fn status_colour(entry: &Entry, theme: &Theme) -> Color {
    match entry.status {
        Status::ToListen => theme.status_to_listen_fg,
        Status::Listening => theme.status_listening_fg,
        Status::Completed => theme.status_completed_fg,
    }
}

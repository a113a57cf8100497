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

//! Render the playback pane.
//!
//! This module draws the transport for the selected entry: the play/pause
//! state, the entry description, current/total/remaining times, and the
//! progress gauge.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    util,
};

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let Some(entry) = app.entry_table.selected_entry() else {
        let hint = Paragraph::new("Nothing selected.")
            .style(Style::default().fg(app.theme.hint_colour));
        f.render_widget(hint, chunks[0]);
        return;
    };

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let playing = app.playback.as_ref().is_some_and(|p| p.is_playing());
    let icon = if playing { ICON_PLAY } else { ICON_PAUSE };

    let entry_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
            .fg(Color::White),
        Span::styled(&entry.title, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
        Span::raw(" by "),
        Span::styled(&entry.author, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(entry_line), info_chunks[0]);

    let description = Paragraph::new(entry.description.as_str())
        .style(Style::default().fg(app.theme.hint_colour));
    f.render_widget(description, chunks[1]);

    let Some(playback) = app.playback.as_ref().filter(|p| p.has_source()) else {
        let hint = Paragraph::new("No audio available for this entry.")
            .style(Style::default().fg(app.theme.hint_colour));
        f.render_widget(hint, chunks[2]);
        return;
    };

    let time = playback.current_time();
    let duration = playback.total_duration();
    let remaining = (duration - time).max(0.0);

    let time_line = Line::from(vec![
        Span::styled(
            util::format::format_time(time),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(app.theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(
            util::format::format_time(duration),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(app.theme.accent_colour),
        Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(
            util::format::format_time(remaining),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .fg(app.theme.accent_colour),
        Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ]);

    let time_p = Paragraph::new(time_line).alignment(Alignment::Right);
    f.render_widget(time_p, info_chunks[1]);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(playback.progress())
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[2]);
}

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

//! Render the add-entry dialog.
//!
//! Draws a centered modal overlay with one row per field, highlighting the
//! focused field and positioning the cursor inside the focused text input.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{components::AddEntryDialog, model::form::FormField, theme::Theme};

const LABEL_WIDTH: u16 = 13;

impl AddEntryDialog {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, 56, 11);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1))
            .title(" Add Book / Podcast ");

        let inner = block.inner(dialog_area);
        f.render_widget(Clear, dialog_area);
        f.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_text_field(f, rows[0], theme, FormField::Title, "Title", self.form.title.value());
        self.draw_text_field(f, rows[1], theme, FormField::Author, "Author/Host", self.form.author.value());
        self.draw_text_field(f, rows[2], theme, FormField::Duration, "Duration", self.form.duration.value());
        self.draw_category_field(f, rows[3], theme);
        self.draw_text_field(
            f,
            rows[4],
            theme,
            FormField::Description,
            "Description",
            self.form.description.value(),
        );

        let hint = Paragraph::new("Enter: add to library   Tab: next field   Esc: cancel")
            .style(Style::default().fg(theme.hint_colour));
        f.render_widget(hint, rows[6]);
    }

    fn draw_text_field(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        field: FormField,
        label: &str,
        value: &str,
    ) {
        let focused = self.form.focus == field;
        let (label_area, value_area) = split_row(area);

        f.render_widget(field_label(label, focused, theme), label_area);
        f.render_widget(Paragraph::new(value), value_area);

        if focused {
            let cursor = match field {
                FormField::Title => self.form.title.visual_cursor(),
                FormField::Author => self.form.author.visual_cursor(),
                FormField::Duration => self.form.duration.visual_cursor(),
                FormField::Description => self.form.description.visual_cursor(),
                FormField::Category => 0,
            };
            f.set_cursor_position((value_area.x + cursor as u16, value_area.y));
        }
    }

    fn draw_category_field(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.form.focus == FormField::Category;
        let (label_area, value_area) = split_row(area);

        f.render_widget(field_label("Category", focused, theme), label_area);

        let value = self.form.category.map(|c| c.label()).unwrap_or("(none)");
        let line = if focused {
            Line::from(vec![
                Span::raw("< "),
                Span::styled(value, Style::default().fg(theme.accent_colour)),
                Span::raw(" >"),
            ])
        } else {
            Line::from(value)
        };
        f.render_widget(Paragraph::new(line), value_area);
    }
}

fn split_row(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

fn field_label<'a>(label: &'a str, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let style = if focused {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Paragraph::new(label).style(style)
}

// Fixed-size rectangle centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

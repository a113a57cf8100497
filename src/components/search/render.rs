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

//! Render the search bar.
//!
//! This module draws the query text inside a bordered box, with a
//! placeholder while empty and the cursor positioned when the bar owns the
//! keyboard.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.focused() {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Keep the cursor visible when the query overflows the box.
        let scroll = self.input.visual_scroll(inner.width.max(1) as usize - 1);

        let paragraph = if self.query().is_empty() && !self.focused() {
            Paragraph::new("Search books and podcasts...")
                .style(Style::default().fg(theme.hint_colour))
        } else {
            Paragraph::new(self.query()).scroll((0, scroll as u16))
        };
        f.render_widget(paragraph, inner);

        if self.focused() {
            let cursor_x = inner.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}

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

//! Input handling for the entry table.
//!
//! Maps keyboard events to table navigation. Returns whether the selection
//! moved so the caller can rebind the playback controller.

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::EntryTable;

impl EntryTable {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.table_state.selected();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.goto_next(),
            KeyCode::Up | KeyCode::Char('k') => self.goto_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.goto_first(),
            KeyCode::End | KeyCode::Char('G') => self.goto_last(),
            _ => return false,
        }

        self.table_state.selected() != before
    }
}

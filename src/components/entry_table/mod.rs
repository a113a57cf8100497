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

//! Library entry table and selection management.
//!
//! This module provides the table listing the filtered catalog. It holds a
//! snapshot of the filtered view (replaced wholesale whenever the catalog
//! or the query changes) and the table selection the playback controller is
//! bound to.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Entry;

pub(crate) struct EntryTable {
    pub(crate) entries: Vec<Entry>,
    pub(crate) table_state: TableState,
}

impl EntryTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the displayed entries with a freshly filtered view.
    ///
    /// The selection sticks to the same entry id where it survives the
    /// refresh; otherwise it falls back to the first row.
    pub(crate) fn set_entries(&mut self, entries: Vec<Entry>) {
        let selected_id = self.selected_entry().map(|e| e.id);

        self.entries = entries;

        let index = selected_id
            .and_then(|id| self.entries.iter().position(|e| e.id == id))
            .or(if self.entries.is_empty() { None } else { Some(0) });
        self.table_state.select(index);
    }

    pub(crate) fn selected_entry(&self) -> Option<&Entry> {
        self.table_state
            .selected()
            .and_then(|i| self.entries.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(self.entries.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn entry(id: u64, title: &str) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            duration: String::new(),
            category: None,
            status: Status::ToListen,
            description: String::new(),
            audio: None,
        }
    }

    #[test]
    fn navigation_wraps_around() {
        let mut table = EntryTable::new();
        table.set_entries(vec![entry(1, "A"), entry(2, "B"), entry(3, "C")]);

        assert_eq!(table.selected_entry().map(|e| e.id), Some(1));

        table.goto_previous();
        assert_eq!(table.selected_entry().map(|e| e.id), Some(3));

        table.goto_next();
        assert_eq!(table.selected_entry().map(|e| e.id), Some(1));
    }

    #[test]
    fn refresh_keeps_selection_by_id() {
        let mut table = EntryTable::new();
        table.set_entries(vec![entry(1, "A"), entry(2, "B"), entry(3, "C")]);
        table.goto_next();
        assert_eq!(table.selected_entry().map(|e| e.id), Some(2));

        // A narrower filtered view still containing entry 2.
        table.set_entries(vec![entry(2, "B"), entry(3, "C")]);
        assert_eq!(table.selected_entry().map(|e| e.id), Some(2));

        // Entry 2 filtered out: fall back to the first row.
        table.set_entries(vec![entry(3, "C")]);
        assert_eq!(table.selected_entry().map(|e| e.id), Some(3));
    }

    #[test]
    fn empty_view_has_no_selection() {
        let mut table = EntryTable::new();
        table.set_entries(vec![entry(1, "A")]);
        table.set_entries(vec![]);

        assert!(table.selected_entry().is_none());
        table.goto_next();
        assert!(table.selected_entry().is_none());
    }
}

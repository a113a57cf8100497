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

//! Input handling for the search bar.
//!
//! While focused, key events are delegated to the managed text input;
//! `Esc` and `Enter` hand the keyboard back to the main view.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::components::SearchBar;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// The bar is unfocused or the key did not affect it.
    Ignored,
    /// The key was consumed without changing the query.
    Handled,
    /// The query text changed; the filtered view must be recomputed.
    QueryChanged,
    /// Focus was handed back to the main view.
    Blurred,
}

impl SearchBar {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> SearchOutcome {
        if !self.focused() {
            return SearchOutcome::Ignored;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.blur();
                SearchOutcome::Blurred
            }
            _ => {
                let changed = self
                    .input
                    .handle_event(&Event::Key(key))
                    .is_some_and(|state| state.value);

                if changed {
                    SearchOutcome::QueryChanged
                } else {
                    SearchOutcome::Handled
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ignores_keys_while_unfocused() {
        let mut bar = SearchBar::new();

        assert_eq!(bar.handle_key(key(KeyCode::Char('d'))), SearchOutcome::Ignored);
        assert_eq!(bar.query(), "");
    }

    #[test]
    fn typing_updates_the_query() {
        let mut bar = SearchBar::new();
        bar.focus();

        assert_eq!(
            bar.handle_key(key(KeyCode::Char('d'))),
            SearchOutcome::QueryChanged
        );
        assert_eq!(
            bar.handle_key(key(KeyCode::Char('u'))),
            SearchOutcome::QueryChanged
        );
        assert_eq!(bar.query(), "du");

        assert_eq!(
            bar.handle_key(key(KeyCode::Backspace)),
            SearchOutcome::QueryChanged
        );
        assert_eq!(bar.query(), "d");
    }

    #[test]
    fn escape_blurs_and_keeps_the_query() {
        let mut bar = SearchBar::new();
        bar.focus();
        bar.handle_key(key(KeyCode::Char('x')));

        assert_eq!(bar.handle_key(key(KeyCode::Esc)), SearchOutcome::Blurred);
        assert!(!bar.focused());
        assert_eq!(bar.query(), "x");
    }
}

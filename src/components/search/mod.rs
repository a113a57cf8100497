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

//! Search bar state management.
//!
//! This module holds the free-text query driving the catalog filter. The
//! bar is focusable; while focused it owns the keyboard and every edit
//! triggers a re-filter of the library view.

mod event;
mod render;

use tui_input::Input;

pub(crate) use event::SearchOutcome;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    focused: bool,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focused: false,
        }
    }

    /// The current query text.
    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }
}

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

//! The modal add-entry dialog.
//!
//! This component wraps the [`EntryForm`] field state with the dialog
//! lifecycle: while open it owns the keyboard, and it closes (resetting the
//! fields) on a successful submit or a cancel. A submit that fails
//! validation leaves the dialog open with the fields intact and surfaces no
//! error, mirroring the required-field behavior of a plain HTML form.

mod event;
mod render;

use crate::model::form::EntryForm;

pub(crate) use event::DialogOutcome;

pub(crate) struct AddEntryDialog {
    pub(crate) form: EntryForm,
    open: bool,
}

impl AddEntryDialog {
    pub(crate) fn new() -> Self {
        Self {
            form: EntryForm::new(),
            open: false,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.form.reset();
        self.open = false;
    }
}

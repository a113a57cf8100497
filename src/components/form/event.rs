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

//! Input handling for the add-entry dialog.
//!
//! Maps keyboard events to field navigation, category cycling, text
//! editing, and the submit/cancel lifecycle.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::AddEntryDialog,
    model::{EntryDraft, form::FormField},
};

#[derive(Debug)]
pub(crate) enum DialogOutcome {
    /// The dialog is closed; the key belongs to someone else.
    Ignored,
    /// The key was consumed by the dialog.
    Handled,
    /// The dialog was cancelled and has closed.
    Cancelled,
    /// A valid draft was produced; the dialog has closed and reset.
    Submitted(EntryDraft),
}

impl AddEntryDialog {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        if !self.is_open() {
            return DialogOutcome::Ignored;
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                DialogOutcome::Cancelled
            }

            KeyCode::Enter => match self.form.submit() {
                Ok(draft) => {
                    self.close();
                    DialogOutcome::Submitted(draft)
                }
                // Silent rejection: the dialog stays open, fields intact.
                Err(_) => DialogOutcome::Handled,
            },

            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                DialogOutcome::Handled
            }

            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_previous();
                DialogOutcome::Handled
            }

            KeyCode::Left if self.form.focus == FormField::Category => {
                self.form.cycle_category_backward();
                DialogOutcome::Handled
            }

            KeyCode::Right if self.form.focus == FormField::Category => {
                self.form.cycle_category_forward();
                DialogOutcome::Handled
            }

            _ => {
                if let Some(input) = self.form.focused_input() {
                    input.handle_event(&Event::Key(key));
                }
                DialogOutcome::Handled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut AddEntryDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typed_fields_produce_a_draft_on_enter() {
        let mut dialog = AddEntryDialog::new();
        dialog.open();

        type_text(&mut dialog, "Dune");
        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "Herbert");

        // Move to the category field and cycle to Fiction.
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Right));

        let outcome = dialog.handle_key(key(KeyCode::Enter));
        let DialogOutcome::Submitted(draft) = outcome else {
            panic!("expected a submitted draft, got {outcome:?}");
        };

        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.author, "Herbert");
        assert_eq!(draft.category, Some(Category::Fiction));
        assert_eq!(draft.status, Status::ToListen);

        // The dialog closed and reset for next time.
        assert!(!dialog.is_open());
        assert_eq!(dialog.form.title.value(), "");
    }

    #[test]
    fn missing_title_keeps_the_dialog_open() {
        let mut dialog = AddEntryDialog::new();
        dialog.open();

        dialog.handle_key(key(KeyCode::Tab));
        type_text(&mut dialog, "X");

        let outcome = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(outcome, DialogOutcome::Handled));
        assert!(dialog.is_open());
        assert_eq!(dialog.form.author.value(), "X");
    }

    #[test]
    fn escape_cancels_and_resets() {
        let mut dialog = AddEntryDialog::new();
        dialog.open();
        type_text(&mut dialog, "Dune");

        let outcome = dialog.handle_key(key(KeyCode::Esc));
        assert!(matches!(outcome, DialogOutcome::Cancelled));
        assert!(!dialog.is_open());
        assert_eq!(dialog.form.title.value(), "");
    }

    #[test]
    fn closed_dialog_ignores_keys() {
        let mut dialog = AddEntryDialog::new();

        let outcome = dialog.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(outcome, DialogOutcome::Ignored));
    }
}

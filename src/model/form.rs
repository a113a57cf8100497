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

//! Entry form state and validation.
//!
//! This module holds the field buffers of the add-entry form, moves focus
//! between them, and turns their contents into an [`EntryDraft`]. The only
//! validation rule is that title and author must be non-empty after
//! trimming; a failed submit leaves the form untouched so the dialog stays
//! open without surfacing an error message.

use thiserror::Error;
use tui_input::Input;

use crate::model::{Category, EntryDraft, Status};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("author must not be empty")]
    MissingAuthor,
}

/// The form field currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Author,
    Duration,
    Category,
    Description,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Duration,
        FormField::Category,
        FormField::Description,
    ];

    fn next(self) -> FormField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> FormField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub(crate) struct EntryForm {
    pub(crate) title: Input,
    pub(crate) author: Input,
    pub(crate) duration: Input,
    pub(crate) description: Input,
    pub(crate) category: Option<Category>,
    pub(crate) focus: FormField,
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self {
            title: Input::default(),
            author: Input::default(),
            duration: Input::default(),
            description: Input::default(),
            category: None,
            focus: FormField::Title,
        }
    }

    /// Restores every field to its empty default.
    pub(crate) fn reset(&mut self) {
        self.title.reset();
        self.author.reset();
        self.duration.reset();
        self.description.reset();
        self.category = None;
        self.focus = FormField::Title;
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// The text input under focus, if the focused field is a text field.
    pub(crate) fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Duration => Some(&mut self.duration),
            FormField::Description => Some(&mut self.description),
            FormField::Category => None,
        }
    }

    /// Steps the category field forward through the closed set, with `None`
    /// (uncategorized) between the last and first variants.
    pub(crate) fn cycle_category_forward(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let i = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
                if i + 1 < Category::ALL.len() {
                    Some(Category::ALL[i + 1])
                } else {
                    None
                }
            }
        };
    }

    pub(crate) fn cycle_category_backward(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[Category::ALL.len() - 1]),
            Some(current) => {
                let i = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
                if i > 0 { Some(Category::ALL[i - 1]) } else { None }
            }
        };
    }

    /// Produces a draft from the current fields, or rejects it when a
    /// required field is blank. New entries always start as
    /// [`Status::ToListen`] with no audio reference.
    pub(crate) fn submit(&self) -> Result<EntryDraft, FormError> {
        let title = self.title.value().trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let author = self.author.value().trim();
        if author.is_empty() {
            return Err(FormError::MissingAuthor);
        }

        Ok(EntryDraft {
            title: title.to_string(),
            author: author.to_string(),
            duration: self.duration.value().to_string(),
            category: self.category,
            status: Status::ToListen,
            description: self.description.value().to_string(),
            audio: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_rejects_blank_title() {
        let mut form = EntryForm::new();
        form.title = Input::new("   ".to_string());
        form.author = Input::new("X".to_string());

        assert_eq!(form.submit(), Err(FormError::MissingTitle));
    }

    #[test]
    fn submit_rejects_blank_author() {
        let mut form = EntryForm::new();
        form.title = Input::new("Dune".to_string());

        assert_eq!(form.submit(), Err(FormError::MissingAuthor));
    }

    #[test]
    fn submit_trims_and_defaults_to_to_listen() {
        let mut form = EntryForm::new();
        form.title = Input::new("  Dune ".to_string());
        form.author = Input::new(" Herbert".to_string());
        form.category = Some(Category::Fiction);

        let draft = form.submit().expect("valid form");
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.author, "Herbert");
        assert_eq!(draft.category, Some(Category::Fiction));
        assert_eq!(draft.status, Status::ToListen);
        assert!(draft.audio.is_none());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = EntryForm::new();
        form.title = Input::new("Dune".to_string());
        form.author = Input::new("Herbert".to_string());
        form.duration = Input::new("21h 2m".to_string());
        form.description = Input::new("Spice".to_string());
        form.category = Some(Category::Fiction);
        form.focus = FormField::Description;

        form.reset();
        assert_eq!(form.title.value(), "");
        assert_eq!(form.author.value(), "");
        assert_eq!(form.duration.value(), "");
        assert_eq!(form.description.value(), "");
        assert_eq!(form.category, None);
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn category_cycles_through_all_variants_and_none() {
        let mut form = EntryForm::new();

        for expected in Category::ALL {
            form.cycle_category_forward();
            assert_eq!(form.category, Some(expected));
        }
        form.cycle_category_forward();
        assert_eq!(form.category, None);

        form.cycle_category_backward();
        assert_eq!(form.category, Some(Category::Podcast));
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = EntryForm::new();

        form.focus_previous();
        assert_eq!(form.focus, FormField::Description);
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
        form.focus_next();
        assert_eq!(form.focus, FormField::Author);
    }
}

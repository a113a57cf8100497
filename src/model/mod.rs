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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—library
//! entries, their lifecycle status, and the closed category set—along with
//! the derived-view logic (filtering and per-status statistics) built on
//! top of them.

pub(crate) mod filter;
pub(crate) mod form;
pub(crate) mod library;
pub(crate) mod stats;

/// Lifecycle tag of a library entry.
///
/// Set when an entry is created (defaulting to [`Status::ToListen`]) and
/// never transitioned automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    ToListen,
    Listening,
    Completed,
}

impl Status {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Status::ToListen => "To Listen",
            Status::Listening => "Listening",
            Status::Completed => "Completed",
        }
    }
}

/// The closed set of entry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Fiction,
    NonFiction,
    Business,
    SelfHelp,
    Technology,
    History,
    Science,
    Podcast,
}

impl Category {
    pub(crate) const ALL: [Category; 8] = [
        Category::Fiction,
        Category::NonFiction,
        Category::Business,
        Category::SelfHelp,
        Category::Technology,
        Category::History,
        Category::Science,
        Category::Podcast,
    ];

    /// The display name, which is also what free-text search matches
    /// against.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::Business => "Business",
            Category::SelfHelp => "Self-Help",
            Category::Technology => "Technology",
            Category::History => "History",
            Category::Science => "Science",
            Category::Podcast => "Podcast",
        }
    }
}

/// One catalog item, an audiobook or podcast.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    /// Unique across the catalog, immutable after creation.
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) author: String,
    /// Free-text display string (e.g. "5h 35m"), not a parsed time value.
    pub(crate) duration: String,
    /// `None` means uncategorized; such entries match no category search
    /// term.
    pub(crate) category: Option<Category>,
    pub(crate) status: Status,
    pub(crate) description: String,
    /// File name of a playable audio resource, resolved against the
    /// configured audio directory. `None` makes the transport inert.
    pub(crate) audio: Option<String>,
}

/// An [`Entry`] before the library has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EntryDraft {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) duration: String,
    pub(crate) category: Option<Category>,
    pub(crate) status: Status,
    pub(crate) description: String,
    pub(crate) audio: Option<String>,
}

#[cfg(test)]
mod tests {
    use tui_input::Input;

    use super::*;
    use crate::model::{
        filter::filter_entries,
        form::EntryForm,
        library::Library,
        stats::{LibraryStats, aggregate},
    };

    // The full add path: form submit into the library, then the derived
    // views on top of it.
    #[test]
    fn submitted_entry_flows_through_stats_and_filter() {
        let mut library = Library::new();

        let mut form = EntryForm::new();
        form.title = Input::new("Dune".to_string());
        form.author = Input::new("Herbert".to_string());
        form.category = Some(Category::Fiction);

        let entry = library.add(form.submit().expect("valid form"));
        assert_eq!(entry.status, Status::ToListen);

        assert_eq!(
            aggregate(library.entries()),
            LibraryStats {
                total: 1,
                to_listen: 1,
                listening: 0,
                completed: 0,
            }
        );

        let hits = filter_entries(library.entries(), "dune");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, entry.id);

        assert!(filter_entries(library.entries(), "xyz").is_empty());
    }

    #[test]
    fn rejected_submit_leaves_the_catalog_unchanged() {
        let mut library = Library::new();

        let mut form = EntryForm::new();
        form.author = Input::new("X".to_string());

        assert!(form.submit().is_err());
        assert!(library.entries().is_empty());
        assert_eq!(aggregate(library.entries()).total, 0);
    }
}

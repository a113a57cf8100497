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

//! The library catalog.
//!
//! This module provides the single source of truth for the catalog: an
//! ordered, newest-first collection of entries. Adding is the only mutation
//! in scope; entries are never edited or removed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{Entry, EntryDraft};

pub(crate) struct Library {
    entries: Vec<Entry>,
    last_id: u64,
}

impl Library {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            last_id: 0,
        }
    }

    /// Assigns the draft a unique id and prepends the finished entry to the
    /// front of the catalog, returning a copy of it.
    pub(crate) fn add(&mut self, draft: EntryDraft) -> Entry {
        let entry = Entry {
            id: self.next_id(),
            title: draft.title,
            author: draft.author,
            duration: draft.duration,
            category: draft.category,
            status: draft.status,
            description: draft.description,
            audio: draft.audio,
        };

        self.entries.insert(0, entry.clone());

        entry
    }

    /// The current catalog, newest first.
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    // Wall-clock milliseconds, bumped past the previously issued id so
    // same-millisecond adds stay unique.
    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};

    fn draft(title: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            duration: String::new(),
            category: Some(Category::Fiction),
            status: Status::ToListen,
            description: String::new(),
            audio: None,
        }
    }

    #[test]
    fn add_prepends_and_grows_by_one() {
        let mut library = Library::new();

        library.add(draft("First"));
        assert_eq!(library.entries().len(), 1);

        let added = library.add(draft("Second"));
        assert_eq!(library.entries().len(), 2);
        assert_eq!(library.entries()[0].id, added.id);
        assert_eq!(library.entries()[0].title, "Second");
        assert_eq!(library.entries()[1].title, "First");
    }

    #[test]
    fn rapid_adds_get_unique_ids() {
        let mut library = Library::new();

        for i in 0..100 {
            library.add(draft(&format!("Entry {i}")));
        }

        let mut ids: Vec<u64> = library.entries().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn added_entry_keeps_draft_fields() {
        let mut library = Library::new();

        let entry = library.add(EntryDraft {
            title: "Sapiens".to_string(),
            author: "Yuval Noah Harari".to_string(),
            duration: "15h 17m".to_string(),
            category: Some(Category::History),
            status: Status::Completed,
            description: "A Brief History of Humankind.".to_string(),
            audio: Some("sapiens.mp3".to_string()),
        });

        assert_eq!(entry.title, "Sapiens");
        assert_eq!(entry.author, "Yuval Noah Harari");
        assert_eq!(entry.duration, "15h 17m");
        assert_eq!(entry.category, Some(Category::History));
        assert_eq!(entry.status, Status::Completed);
        assert_eq!(entry.audio.as_deref(), Some("sapiens.mp3"));
    }
}

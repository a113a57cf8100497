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

//! Free-text filtering of the catalog.
//!
//! A pure function of its inputs: callers recompute the filtered view on
//! every catalog or query change rather than caching it.

use crate::model::Entry;

/// Returns the entries matching `query`, preserving input order.
///
/// Matching is a case-insensitive substring test against the title, the
/// author, or the category display name. An empty query matches everything.
/// Uncategorized entries never match on category.
pub(crate) fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.author.to_lowercase().contains(&needle)
                || entry
                    .category
                    .is_some_and(|c| c.label().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};

    fn entry(id: u64, title: &str, author: &str, category: Option<Category>) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            author: author.to_string(),
            duration: String::new(),
            category,
            status: Status::ToListen,
            description: String::new(),
            audio: None,
        }
    }

    fn catalog() -> Vec<Entry> {
        vec![
            entry(1, "Alchemist", "Paul Coelho", Some(Category::SelfHelp)),
            entry(2, "Sapiens", "Yuval Noah Harari", Some(Category::History)),
            entry(3, "The Joe Rogan Experience", "Joe Rogan", Some(Category::Podcast)),
            entry(4, "Untitled Notes", "Anonymous", None),
        ]
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let entries = catalog();
        let result = filter_entries(&entries, "");

        assert_eq!(result.len(), entries.len());
        let ids: Vec<u64> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let result = filter_entries(&catalog(), "sAPIens");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn matches_author_substring() {
        let result = filter_entries(&catalog(), "harari");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn matches_category_label() {
        let result = filter_entries(&catalog(), "podcast");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn uncategorized_entries_do_not_match_category_terms() {
        // "Self-Help" would otherwise pick up entry 1 only.
        let result = filter_entries(&catalog(), "self-help");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_entries(&catalog(), "xyz").is_empty());
    }

    #[test]
    fn result_is_a_subset_preserving_order() {
        // "an" matches "Rogan" and "Anonymous" but nothing else.
        let result = filter_entries(&catalog(), "an");
        let ids: Vec<u64> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}

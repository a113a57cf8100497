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

//! Per-status catalog statistics.
//!
//! Like the filter, this is a pure function recomputed on every catalog
//! change; the counts are never cached across mutations.

use crate::model::{Entry, Status};

/// Counts of catalog entries per status. The three status counts always
/// sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LibraryStats {
    pub(crate) total: usize,
    pub(crate) to_listen: usize,
    pub(crate) listening: usize,
    pub(crate) completed: usize,
}

/// Tallies the catalog by status.
pub(crate) fn aggregate(entries: &[Entry]) -> LibraryStats {
    let mut stats = LibraryStats {
        total: entries.len(),
        ..LibraryStats::default()
    };

    for entry in entries {
        match entry.status {
            Status::ToListen => stats.to_listen += 1,
            Status::Listening => stats.listening += 1,
            Status::Completed => stats.completed += 1,
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: Status) -> Entry {
        Entry {
            id: 0,
            title: "Title".to_string(),
            author: "Author".to_string(),
            duration: String::new(),
            category: None,
            status,
            description: String::new(),
            audio: None,
        }
    }

    #[test]
    fn empty_catalog_counts_zero() {
        assert_eq!(aggregate(&[]), LibraryStats::default());
    }

    #[test]
    fn counts_each_status_bucket() {
        let entries = vec![
            entry(Status::ToListen),
            entry(Status::Listening),
            entry(Status::Completed),
            entry(Status::ToListen),
            entry(Status::Completed),
        ];

        let stats = aggregate(&entries);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.to_listen, 2);
        assert_eq!(stats.listening, 1);
        assert_eq!(stats.completed, 2);
    }

    #[test]
    fn buckets_partition_the_catalog() {
        let entries: Vec<Entry> = [
            Status::ToListen,
            Status::ToListen,
            Status::Listening,
            Status::Completed,
        ]
        .into_iter()
        .map(entry)
        .collect();

        let stats = aggregate(&entries);
        assert_eq!(
            stats.to_listen + stats.listening + stats.completed,
            stats.total
        );
        assert_eq!(stats.total, entries.len());
    }
}

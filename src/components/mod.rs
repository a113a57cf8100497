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

//! Interactive UI components.
//!
//! Each component pairs its state with event handling and rendering in a
//! sub-module:
//!
//! * [`entry_table`]: the navigable, filtered library listing.
//! * [`search`]: the free-text search bar driving the filter.
//! * [`form`]: the modal add-entry dialog.

pub(crate) mod entry_table;
pub(crate) mod form;
pub(crate) mod search;

pub(crate) use entry_table::EntryTable;
pub(crate) use form::{AddEntryDialog, DialogOutcome};
pub(crate) use search::{SearchBar, SearchOutcome};

// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Parse election results feeds into typed records.
//!
//! Every record type implements [record::Record], whose `serialize()` produces the
//! ordered field mapping that the `elex` command line tool writes out as CSV or JSON.

pub mod error;
pub mod feed;
pub mod record;
pub mod election;
pub mod race;
pub mod reporting_unit;
pub mod candidate;
pub mod election_result;
pub mod election_results;

pub use error::{ElexError, Result};
pub use record::{Record, RecordSet, Row, csv_text};
pub use election::{Election, ElectionList};
pub use election_results::ElectionResults;

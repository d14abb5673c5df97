// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! The `elex` command line tool, which prints the records in an election results feed as CSV or JSON,
//! plus a harness that checks the tool's output agrees with the [elex] API.

pub mod commands;
pub mod output;
pub mod app;
pub mod capture_output;
pub mod command_test_matrix;

pub use app::{ElexApp, Opts};
pub use commands::Command;
pub use output::Encoding;

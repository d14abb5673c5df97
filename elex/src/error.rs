// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


use std::path::PathBuf;
use thiserror::Error;

/// Something went wrong reading a feed.
#[derive(Error,Debug)]
pub enum ElexError {
    #[error("unable to open data file {}: {source}",path.display())]
    OpenDataFile { path : PathBuf, source : std::io::Error },
    #[error("unable to parse feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed feed: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T,ElexError>;

// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Elections known to the results provider, and whether they are live or test data.

use std::io::Read;
use std::path::Path;
use serde_json::Value;
use crate::error::Result;
use crate::feed::{check_election_date, open_data_file, RawElection, RawElectionList};
use crate::record::Record;

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Election {
    /// YYYY-MM-DD
    pub electiondate : String,
    /// true if results are being reported live.
    pub liveresults : bool,
    /// true if the provider is serving test data for this election.
    pub testresults : bool,
}

impl Election {
    fn from_raw(raw:&RawElection) -> Result<Self> {
        check_election_date(&raw.election_date)?;
        Ok(Election{ electiondate: raw.election_date.clone(), liveresults: raw.live_results, testresults: raw.test_results })
    }
}

impl Record for Election {
    const FIELD_NAMES: &'static [&'static str] = &["electiondate","liveresults","testresults"];

    fn field_values(&self) -> Vec<Value> {
        vec![self.electiondate.clone().into(),self.liveresults.into(),self.testresults.into()]
    }
}

/// All elections in an elections data file, in file order.
#[derive(Debug,Clone,Default)]
pub struct ElectionList {
    pub elections : Vec<Election>,
}

impl ElectionList {
    pub fn from_data_file(path:&Path) -> Result<Self> {
        Self::from_reader(open_data_file(path)?)
    }

    pub fn from_reader<R:Read>(reader:R) -> Result<Self> {
        let raw : RawElectionList = serde_json::from_reader(reader)?;
        let elections = raw.elections.iter().map(Election::from_raw).collect::<Result<Vec<_>>>()?;
        Ok(ElectionList{elections})
    }

    pub fn len(&self) -> usize { self.elections.len() }
    pub fn is_empty(&self) -> bool { self.elections.is_empty() }
}

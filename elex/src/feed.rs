// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! The raw structure of the JSON feeds, as delivered by the results provider.
//!
//! Nothing here is interpreted; see [crate::election_results] and [crate::election]
//! for the records built from it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::Deserialize;
use crate::error::{ElexError, Result};

/// A national results feed: every race in one election.
#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeed {
    pub election_date : String,
    pub timestamp : Option<String>,
    #[serde(default)]
    pub races : Vec<RawRace>,
}

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRace {
    #[serde(rename = "raceID")]
    pub race_id : String,
    pub race_type : String,
    #[serde(rename = "raceTypeID")]
    pub race_type_id : String,
    pub state_postal : Option<String>,
    pub state_name : Option<String>,
    #[serde(rename = "officeID")]
    pub office_id : String,
    pub office_name : String,
    pub party : Option<String>,
    pub seat_name : Option<String>,
    pub seat_num : Option<String>,
    pub description : Option<String>,
    #[serde(default)]
    pub test : bool,
    #[serde(default)]
    pub national : bool,
    #[serde(default)]
    pub uncontested : bool,
    #[serde(default)]
    pub is_ballot_measure : bool,
    pub last_updated : Option<String>,
    #[serde(default)]
    pub reporting_units : Vec<RawReportingUnit>,
}

/// A geographic unit (state, county, town) that results are reported for.
#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReportingUnit {
    #[serde(rename = "reportingunitID")]
    pub reporting_unit_id : String,
    #[serde(rename = "reportingunitName")]
    pub reporting_unit_name : Option<String>,
    pub level : String,
    pub fips_code : Option<String>,
    pub state_postal : Option<String>,
    pub state_name : Option<String>,
    #[serde(default)]
    pub precincts_reporting : u64,
    #[serde(default)]
    pub precincts_total : u64,
    #[serde(default)]
    pub precincts_reporting_pct : f64,
    pub last_updated : Option<String>,
    #[serde(default)]
    pub candidates : Vec<RawCandidate>,
}

/// A candidate's tally in one reporting unit. For ballot measures the "candidates" are the choices, e.g. Yes and No.
#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCandidate {
    #[serde(rename = "candidateID")]
    pub candidate_id : String,
    #[serde(rename = "polID")]
    pub pol_id : Option<String>,
    pub pol_num : Option<String>,
    pub first : Option<String>,
    pub last : String,
    pub party : Option<String>,
    #[serde(default)]
    pub ballot_order : u32,
    #[serde(default)]
    pub vote_count : u64,
    /// "X" for a declared winner.
    pub winner : Option<String>,
    #[serde(default)]
    pub incumbent : bool,
}

impl RawCandidate {
    pub fn is_winner(&self) -> bool { self.winner.as_deref()==Some("X") }
}

/// The list of elections the provider knows about.
#[derive(Debug,Clone,Deserialize)]
pub struct RawElectionList {
    #[serde(default)]
    pub elections : Vec<RawElection>,
}

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElection {
    pub election_date : String,
    #[serde(default)]
    pub live_results : bool,
    #[serde(default)]
    pub test_results : bool,
}

/// Open a data file for buffered reading, remembering the path in any error.
pub fn open_data_file(path:&Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source|ElexError::OpenDataFile{ path: path.to_path_buf(), source })?;
    Ok(BufReader::new(file))
}

/// Election dates are always of the form YYYY-MM-DD.
pub fn check_election_date(date:&str) -> Result<()> {
    let well_formed = date.len()==10 && date.char_indices().all(|(i,c)| if i==4 || i==7 { c=='-' } else { c.is_ascii_digit() });
    if well_formed { Ok(()) } else { Err(ElexError::Malformed(format!("election date {} is not of the form YYYY-MM-DD",date))) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_election_date_format() {
        assert!(check_election_date("2015-11-03").is_ok());
        assert!(check_election_date("2015-1-03").is_err());
        assert!(check_election_date("2015/11/03").is_err());
        assert!(check_election_date("").is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let raw : RawRace = serde_json::from_str(r#"{"raceID":"1","raceType":"General","raceTypeID":"G","officeID":"H","officeName":"U.S. House"}"#).unwrap();
        assert_eq!(raw.race_id,"1");
        assert_eq!(raw.seat_name,None);
        assert!(!raw.test);
        assert!(!raw.is_ballot_measure);
        assert!(raw.reporting_units.is_empty());
    }

    #[test]
    fn test_winner_flag() {
        let raw : RawCandidate = serde_json::from_str(r#"{"candidateID":"7","last":"Smith","winner":"X"}"#).unwrap();
        assert!(raw.is_winner());
        let raw : RawCandidate = serde_json::from_str(r#"{"candidateID":"8","last":"Jones"}"#).unwrap();
        assert!(!raw.is_winner());
    }
}

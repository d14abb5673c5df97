// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! The programmatic view of a national results feed.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use crate::candidate::{Candidate, CandidateReportingUnit};
use crate::election_result::ElectionResult;
use crate::error::Result;
use crate::feed::{check_election_date, open_data_file, RawFeed};
use crate::race::Race;
use crate::reporting_unit::ReportingUnit;

/// Every race in one election, with the record collections derived from them.
///
/// All collections are in feed order, so the same feed always produces the same output.
#[derive(Debug,Clone)]
pub struct ElectionResults {
    pub electiondate : String,
    /// when the provider generated the feed, if stated.
    pub timestamp : Option<String>,
    races : Vec<Race>,
}

impl ElectionResults {
    pub fn from_data_file(path:&Path) -> Result<Self> {
        Self::from_reader(open_data_file(path)?)
    }

    pub fn from_reader<R:Read>(reader:R) -> Result<Self> {
        let raw : RawFeed = serde_json::from_reader(reader)?;
        Self::from_raw(&raw)
    }

    pub fn from_raw(raw:&RawFeed) -> Result<Self> {
        check_election_date(&raw.election_date)?;
        let races = raw.races.iter().map(|r|Race::from_raw(r,&raw.election_date)).collect::<Result<Vec<_>>>()?;
        Ok(ElectionResults{ electiondate: raw.election_date.clone(), timestamp: raw.timestamp.clone(), races })
    }

    pub fn races(&self) -> &[Race] { &self.races }

    pub fn reporting_units(&self) -> Vec<&ReportingUnit> {
        self.races.iter().flat_map(|race|race.reporting_units.iter()).collect()
    }

    pub fn candidate_reporting_units(&self) -> Vec<&CandidateReportingUnit> {
        self.races.iter().flat_map(|race|race.reporting_units.iter()).flat_map(|unit|unit.candidates.iter()).collect()
    }

    /// Each candidate once per race, in the order first seen.
    pub fn candidates(&self) -> Vec<Candidate> {
        let mut res = vec![];
        for race in &self.races {
            let mut seen : HashSet<&str> = HashSet::default();
            for unit in &race.reporting_units {
                for result in &unit.candidates {
                    if seen.insert(result.candidate.unique_id()) { res.push(Candidate::from(result)); }
                }
            }
        }
        res
    }

    pub fn results(&self) -> Vec<ElectionResult> {
        let mut res = vec![];
        for race in &self.races {
            for unit in &race.reporting_units {
                for result in &unit.candidates {
                    res.push(ElectionResult::new(race,unit,result));
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElexError;
    use crate::record::Record;
    use serde_json::Value;

    const FEED : &str = r#"{
        "electionDate":"2015-11-03",
        "races":[{
            "raceID":"100","raceType":"General","raceTypeID":"G","statePostal":"ZZ","stateName":"Zedland",
            "officeID":"G","officeName":"Governor","national":true,
            "reportingUnits":[
                {"reportingunitID":"1","level":"state","precinctsReporting":2,"precinctsTotal":4,"precinctsReportingPct":50.0,
                 "candidates":[
                    {"candidateID":"11","polID":"501","first":"Ann","last":"Able","party":"Dem","ballotOrder":1,"voteCount":30,"winner":"X"},
                    {"candidateID":"12","polID":"502","first":"Bob","last":"Baker","party":"GOP","ballotOrder":2,"voteCount":10}]},
                {"reportingunitID":"7001","reportingunitName":"North","level":"subunit","fipsCode":"99001",
                 "candidates":[
                    {"candidateID":"11","polID":"501","first":"Ann","last":"Able","party":"Dem","ballotOrder":1,"voteCount":0},
                    {"candidateID":"12","polID":"502","first":"Bob","last":"Baker","party":"GOP","ballotOrder":2,"voteCount":0}]}
            ]}]
    }"#;

    #[test]
    fn test_collections() {
        let results = ElectionResults::from_reader(FEED.as_bytes()).unwrap();
        assert_eq!(results.races().len(),1);
        assert_eq!(results.races()[0].id,"ZZ-100");
        assert_eq!(results.reporting_units().len(),2);
        assert_eq!(results.candidate_reporting_units().len(),4);
        assert_eq!(results.candidates().len(),2);
        assert_eq!(results.results().len(),4);
    }

    #[test]
    fn test_derived_values() {
        let results = ElectionResults::from_reader(FEED.as_bytes()).unwrap();
        let units = results.reporting_units();
        assert_eq!(units[0].id,"state-1");
        assert_eq!(units[0].votecount,40);
        assert_eq!(units[1].statepostal.as_deref(),Some("ZZ"));
        let cru = results.candidate_reporting_units();
        assert_eq!(cru[0].id,"100-1-501");
        assert_eq!(results.results()[0].serialize()["id"],Value::from("100-1-501"));
        assert_eq!(cru[0].votepct,0.75);
        assert!(cru[0].winner);
        assert!(!cru[1].winner);
        assert_eq!(cru[2].votepct,0.0);
    }

    #[test]
    fn test_result_rows_are_wide() {
        let results = ElectionResults::from_reader(FEED.as_bytes()).unwrap();
        let row = results.results()[3].serialize();
        assert_eq!(row.len(),ElectionResult::FIELD_NAMES.len());
        assert_eq!(row["officename"],Value::from("Governor"));
        assert_eq!(row["reportingunitname"],Value::from("North"));
        assert_eq!(row["description"],Value::Null);
        assert_eq!(row["unique_id"],Value::from("502"));
    }

    #[test]
    fn test_missing_race_id() {
        let feed = r#"{"electionDate":"2015-11-03","races":[{"raceID":"","raceType":"General","raceTypeID":"G","officeID":"G","officeName":"Governor"}]}"#;
        assert!(ElectionResults::from_reader(feed.as_bytes()).is_err());
    }

    #[test]
    fn test_vote_count_overflow() {
        let feed = r#"{"electionDate":"2015-11-03","races":[{"raceID":"100","raceType":"General","raceTypeID":"G","officeID":"G","officeName":"Governor","reportingUnits":[
            {"reportingunitID":"1","level":"state","candidates":[
                {"candidateID":"11","polID":"501","last":"Able","voteCount":18446744073709551615},
                {"candidateID":"12","polID":"502","last":"Baker","voteCount":1}]}]}]}"#;
        match ElectionResults::from_reader(feed.as_bytes()) {
            Err(ElexError::Malformed(message)) => assert!(message.contains("overflow")),
            other => panic!("expected Malformed, got {:?}",other.map(|r|r.races().len())),
        }
    }
}

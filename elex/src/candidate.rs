// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Candidates, and their tallies in individual reporting units.

use serde_json::Value;
use crate::feed::RawCandidate;
use crate::record::Record;
use crate::reporting_unit::ReportingUnit;

/// One candidate's result in one reporting unit.
#[derive(Debug,Clone)]
pub struct CandidateReportingUnit {
    /// `<raceid>-<reportingunitid>-<candidate id>`, e.g. `100-1-501`. The level is not part of it.
    pub id : String,
    pub candidate : CandidateKey,
    pub first : Option<String>,
    pub last : String,
    pub party : Option<String>,
    pub ballotorder : u32,
    pub raceid : String,
    pub reportingunitid : String,
    pub level : String,
    pub fipscode : Option<String>,
    pub statepostal : Option<String>,
    pub precinctsreporting : u64,
    pub precinctstotal : u64,
    pub votecount : u64,
    /// fraction of the reporting unit's votes, 0 if no votes have been counted.
    pub votepct : f64,
    pub winner : bool,
    pub incumbent : bool,
}

/// The identifiers the feed gives a candidate.
#[derive(Debug,Clone,PartialEq,Eq,Hash)]
pub struct CandidateKey {
    pub candidateid : String,
    /// absent for ballot measure choices.
    pub polid : Option<String>,
    pub polnum : Option<String>,
}

impl CandidateKey {
    /// The politician id where there is one, otherwise the feed's candidate id.
    pub fn unique_id(&self) -> &str {
        self.polid.as_deref().unwrap_or(&self.candidateid)
    }
}

impl CandidateReportingUnit {
    pub fn from_raw(raw:&RawCandidate,unit:&ReportingUnit) -> Self {
        let candidate = CandidateKey{ candidateid: raw.candidate_id.clone(), polid: raw.pol_id.clone(), polnum: raw.pol_num.clone() };
        let votepct = if unit.votecount==0 { 0.0 } else { raw.vote_count as f64/unit.votecount as f64 };
        CandidateReportingUnit{
            id: format!("{}-{}-{}",unit.raceid,unit.reportingunitid,candidate.unique_id()),
            candidate,
            first: raw.first.clone(),
            last: raw.last.clone(),
            party: raw.party.clone(),
            ballotorder: raw.ballot_order,
            raceid: unit.raceid.clone(),
            reportingunitid: unit.reportingunitid.clone(),
            level: unit.level.clone(),
            fipscode: unit.fipscode.clone(),
            statepostal: unit.statepostal.clone(),
            precinctsreporting: unit.precinctsreporting,
            precinctstotal: unit.precinctstotal,
            votecount: raw.vote_count,
            votepct,
            winner: raw.is_winner(),
            incumbent: raw.incumbent,
        }
    }
}

impl Record for CandidateReportingUnit {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id","candidateid","polid","polnum","first","last","party","ballotorder","raceid","reportingunitid","level","fipscode",
        "statepostal","precinctsreporting","precinctstotal","votecount","votepct","winner","incumbent"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.candidate.candidateid.clone().into(),
            self.candidate.polid.clone().into(),
            self.candidate.polnum.clone().into(),
            self.first.clone().into(),
            self.last.clone().into(),
            self.party.clone().into(),
            self.ballotorder.into(),
            self.raceid.clone().into(),
            self.reportingunitid.clone().into(),
            self.level.clone().into(),
            self.fipscode.clone().into(),
            self.statepostal.clone().into(),
            self.precinctsreporting.into(),
            self.precinctstotal.into(),
            self.votecount.into(),
            self.votepct.into(),
            self.winner.into(),
            self.incumbent.into(),
        ]
    }
}

/// A candidate in a race, independent of where the votes came from.
#[derive(Debug,Clone)]
pub struct Candidate {
    pub id : String,
    pub candidate : CandidateKey,
    pub ballotorder : u32,
    pub first : Option<String>,
    pub last : String,
    pub party : Option<String>,
    pub incumbent : bool,
    pub raceid : String,
    pub statepostal : Option<String>,
}

impl From<&CandidateReportingUnit> for Candidate {
    fn from(result: &CandidateReportingUnit) -> Self {
        Candidate{
            id: result.candidate.unique_id().to_string(),
            candidate: result.candidate.clone(),
            ballotorder: result.ballotorder,
            first: result.first.clone(),
            last: result.last.clone(),
            party: result.party.clone(),
            incumbent: result.incumbent,
            raceid: result.raceid.clone(),
            statepostal: result.statepostal.clone(),
        }
    }
}

impl Record for Candidate {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id","candidateid","polid","polnum","ballotorder","first","last","party","incumbent","raceid","statepostal"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.candidate.candidateid.clone().into(),
            self.candidate.polid.clone().into(),
            self.candidate.polnum.clone().into(),
            self.ballotorder.into(),
            self.first.clone().into(),
            self.last.clone().into(),
            self.party.clone().into(),
            self.incumbent.into(),
            self.raceid.clone().into(),
            self.statepostal.clone().into(),
        ]
    }
}

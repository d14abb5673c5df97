// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


use serde_json::Value;
use crate::candidate::CandidateReportingUnit;
use crate::error::{ElexError, Result};
use crate::feed::RawReportingUnit;
use crate::race::Race;
use crate::record::Record;

/// Results for one race in one geographic unit.
#[derive(Debug,Clone)]
pub struct ReportingUnit {
    /// `<level>-<reportingunitid>`
    pub id : String,
    pub reportingunitid : String,
    pub reportingunitname : Option<String>,
    /// e.g. state, subunit
    pub level : String,
    pub fipscode : Option<String>,
    pub statepostal : Option<String>,
    pub statename : Option<String>,
    pub raceid : String,
    pub officeid : String,
    pub officename : String,
    pub precinctsreporting : u64,
    pub precinctstotal : u64,
    pub precinctsreportingpct : f64,
    /// total over all candidates.
    pub votecount : u64,
    pub lastupdated : Option<String>,
    pub candidates : Vec<CandidateReportingUnit>,
}

impl ReportingUnit {
    /// Fails if the candidates' votes add up to more than a u64 can hold.
    pub fn from_raw(raw:&RawReportingUnit,race:&Race) -> Result<Self> {
        let votecount = raw.candidates.iter().try_fold(0u64,|total,c|total.checked_add(c.vote_count))
            .ok_or_else(||ElexError::Malformed(format!("vote count overflow in reporting unit {} of race {}",raw.reporting_unit_id,race.raceid)))?;
        let mut unit = ReportingUnit{
            id: format!("{}-{}",raw.level,raw.reporting_unit_id),
            reportingunitid: raw.reporting_unit_id.clone(),
            reportingunitname: raw.reporting_unit_name.clone(),
            level: raw.level.clone(),
            fipscode: raw.fips_code.clone(),
            statepostal: raw.state_postal.clone().or_else(||race.statepostal.clone()),
            statename: raw.state_name.clone().or_else(||race.statename.clone()),
            raceid: race.raceid.clone(),
            officeid: race.officeid.clone(),
            officename: race.officename.clone(),
            precinctsreporting: raw.precincts_reporting,
            precinctstotal: raw.precincts_total,
            precinctsreportingpct: raw.precincts_reporting_pct,
            votecount,
            lastupdated: raw.last_updated.clone().or_else(||race.lastupdated.clone()),
            candidates: vec![],
        };
        unit.candidates = raw.candidates.iter().map(|c|CandidateReportingUnit::from_raw(c,&unit)).collect();
        Ok(unit)
    }
}

impl Record for ReportingUnit {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id","reportingunitid","reportingunitname","level","fipscode","statepostal","statename","raceid","officeid","officename",
        "precinctsreporting","precinctstotal","precinctsreportingpct","votecount","lastupdated"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.reportingunitid.clone().into(),
            self.reportingunitname.clone().into(),
            self.level.clone().into(),
            self.fipscode.clone().into(),
            self.statepostal.clone().into(),
            self.statename.clone().into(),
            self.raceid.clone().into(),
            self.officeid.clone().into(),
            self.officename.clone().into(),
            self.precinctsreporting.into(),
            self.precinctstotal.into(),
            self.precinctsreportingpct.into(),
            self.votecount.into(),
            self.lastupdated.clone().into(),
        ]
    }
}

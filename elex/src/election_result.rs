// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


use serde_json::Value;
use crate::candidate::CandidateReportingUnit;
use crate::race::Race;
use crate::record::Record;
use crate::reporting_unit::ReportingUnit;

/// A fully denormalised result: one candidate in one reporting unit, with everything
/// known about the race and the unit repeated on each row. This is what most people want
/// to load into a spreadsheet or database.
#[derive(Debug,Clone)]
pub struct ElectionResult {
    pub race : Race,
    pub unit : ReportingUnit,
    pub result : CandidateReportingUnit,
}

impl ElectionResult {
    pub fn new(race:&Race,unit:&ReportingUnit,result:&CandidateReportingUnit) -> Self {
        let mut race = race.clone();
        race.reporting_units.clear();
        let mut unit = unit.clone();
        unit.candidates.clear();
        ElectionResult{ race, unit, result: result.clone() }
    }
}

impl Record for ElectionResult {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id","unique_id","raceid","racetype","racetypeid","ballotorder","candidateid","description","electiondate","fipscode",
        "first","incumbent","is_ballot_measure","last","lastupdated","level","national","officeid","officename","party",
        "polid","polnum","precinctsreporting","precinctsreportingpct","precinctstotal","reportingunitid","reportingunitname",
        "seatname","seatnum","statename","statepostal","test","uncontested","votecount","votepct","winner"];

    fn field_values(&self) -> Vec<Value> {
        let (race,unit,result) = (&self.race,&self.unit,&self.result);
        vec![
            result.id.clone().into(),
            result.candidate.unique_id().into(),
            race.raceid.clone().into(),
            race.racetype.clone().into(),
            race.racetypeid.clone().into(),
            result.ballotorder.into(),
            result.candidate.candidateid.clone().into(),
            race.description.clone().into(),
            race.electiondate.clone().into(),
            unit.fipscode.clone().into(),
            result.first.clone().into(),
            result.incumbent.into(),
            race.is_ballot_measure.into(),
            result.last.clone().into(),
            unit.lastupdated.clone().into(),
            unit.level.clone().into(),
            race.national.into(),
            race.officeid.clone().into(),
            race.officename.clone().into(),
            result.party.clone().into(),
            result.candidate.polid.clone().into(),
            result.candidate.polnum.clone().into(),
            unit.precinctsreporting.into(),
            unit.precinctsreportingpct.into(),
            unit.precinctstotal.into(),
            unit.reportingunitid.clone().into(),
            unit.reportingunitname.clone().into(),
            race.seatname.clone().into(),
            race.seatnum.clone().into(),
            unit.statename.clone().into(),
            unit.statepostal.clone().into(),
            race.test.into(),
            race.uncontested.into(),
            result.votecount.into(),
            result.votepct.into(),
            result.winner.into(),
        ]
    }
}

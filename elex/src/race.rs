// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! A contest: an office, seat or ballot measure being decided.

use serde_json::Value;
use crate::error::{ElexError, Result};
use crate::feed::RawRace;
use crate::record::Record;
use crate::reporting_unit::ReportingUnit;

#[derive(Debug,Clone)]
pub struct Race {
    /// `<statepostal>-<raceid>`, unique within a feed.
    pub id : String,
    pub raceid : String,
    pub racetype : String,
    pub racetypeid : String,
    pub description : Option<String>,
    pub electiondate : String,
    pub is_ballot_measure : bool,
    pub lastupdated : Option<String>,
    pub national : bool,
    pub officeid : String,
    pub officename : String,
    pub party : Option<String>,
    pub seatname : Option<String>,
    pub seatnum : Option<String>,
    pub statename : Option<String>,
    pub statepostal : Option<String>,
    pub test : bool,
    pub uncontested : bool,
    /// in feed order; the first is normally the statewide total.
    pub reporting_units : Vec<ReportingUnit>,
}

impl Race {
    pub fn from_raw(raw:&RawRace,electiondate:&str) -> Result<Self> {
        if raw.race_id.is_empty() { return Err(ElexError::Malformed(format!("race for {} has no raceID",raw.office_name))); }
        let id = format!("{}-{}",raw.state_postal.as_deref().unwrap_or(""),raw.race_id);
        let mut race = Race{
            id,
            raceid: raw.race_id.clone(),
            racetype: raw.race_type.clone(),
            racetypeid: raw.race_type_id.clone(),
            description: raw.description.clone(),
            electiondate: electiondate.to_string(),
            is_ballot_measure: raw.is_ballot_measure,
            lastupdated: raw.last_updated.clone(),
            national: raw.national,
            officeid: raw.office_id.clone(),
            officename: raw.office_name.clone(),
            party: raw.party.clone(),
            seatname: raw.seat_name.clone(),
            seatnum: raw.seat_num.clone(),
            statename: raw.state_name.clone(),
            statepostal: raw.state_postal.clone(),
            test: raw.test,
            uncontested: raw.uncontested,
            reporting_units: vec![],
        };
        race.reporting_units = raw.reporting_units.iter().map(|unit|ReportingUnit::from_raw(unit,&race)).collect::<Result<Vec<_>>>()?;
        Ok(race)
    }
}

impl Record for Race {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id","raceid","racetype","racetypeid","description","electiondate","is_ballot_measure","lastupdated","national",
        "officeid","officename","party","seatname","seatnum","statename","statepostal","test","uncontested"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.raceid.clone().into(),
            self.racetype.clone().into(),
            self.racetypeid.clone().into(),
            self.description.clone().into(),
            self.electiondate.clone().into(),
            self.is_ballot_measure.into(),
            self.lastupdated.clone().into(),
            self.national.into(),
            self.officeid.clone().into(),
            self.officename.clone().into(),
            self.party.clone().into(),
            self.seatname.clone().into(),
            self.seatnum.clone().into(),
            self.statename.clone().into(),
            self.statepostal.clone().into(),
            self.test.into(),
            self.uncontested.into(),
        ]
    }
}

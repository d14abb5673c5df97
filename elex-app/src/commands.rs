// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use elex::{ElectionList, ElectionResults, RecordSet};

/// The kinds of record the command line tool can output.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum Command {
    Races,
    Candidates,
    ReportingUnits,
    CandidateReportingUnits,
    Results,
    Elections,
}

impl Command {
    /// Every command, in the order they are documented.
    pub const ALL : [Command;6] = [
        Command::Races,
        Command::Candidates,
        Command::ReportingUnits,
        Command::CandidateReportingUnits,
        Command::Results,
        Command::Elections,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Races => "races",
            Command::Candidates => "candidates",
            Command::ReportingUnits => "reporting-units",
            Command::CandidateReportingUnits => "candidate-reporting-units",
            Command::Results => "results",
            Command::Elections => "elections",
        }
    }

    /// The name with hyphens replaced by underscores, e.g. candidate_reporting_units.
    /// This is how the API refers to the corresponding collection.
    pub fn identifier(&self) -> String { self.name().replace('-',"_") }

    /// true if the command reads an elections list rather than a results feed.
    pub fn reads_election_list(&self) -> bool { *self==Command::Elections }

    /// Read the data file and serialize the records this command outputs.
    pub fn load(&self,data_file:&Path) -> anyhow::Result<RecordSet> {
        let results = || ElectionResults::from_data_file(data_file);
        Ok(match self {
            Command::Races => RecordSet::collect(results()?.races()),
            Command::Candidates => RecordSet::collect(&results()?.candidates()),
            Command::ReportingUnits => RecordSet::collect(results()?.reporting_units()),
            Command::CandidateReportingUnits => RecordSet::collect(results()?.candidate_reporting_units()),
            Command::Results => RecordSet::collect(&results()?.results()),
            Command::Elections => RecordSet::collect(&ElectionList::from_data_file(data_file)?.elections),
        })
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL.iter().find(|c|c.name()==s).copied()
            .ok_or_else(||format!("No such command as {}. Supported commands are : {}.",s,Command::ALL.map(|c|c.name()).join(", ")))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(Command::CandidateReportingUnits.identifier(),"candidate_reporting_units");
        assert_eq!(Command::ReportingUnits.identifier(),"reporting_units");
        assert_eq!(Command::Races.identifier(),"races");
    }

    #[test]
    fn test_parse_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.to_string().parse::<Command>(),Ok(command));
        }
        let err = "reporting_units".parse::<Command>().unwrap_err();
        assert!(err.contains("reporting-units"));
    }

    #[test]
    fn test_only_elections_reads_election_list() {
        assert_eq!(Command::ALL.iter().filter(|c|c.reads_election_list()).count(),1);
    }
}

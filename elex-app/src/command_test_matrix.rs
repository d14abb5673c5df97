// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! One generated test per command and output format, checking that what the command line tool
//! writes is what the API serializes.
//!
//! For CSV every API value is compared in its CSV text form (see [elex::csv_text]);
//! for JSON values are compared with their native types.

use std::fmt::{Debug, Formatter};
use std::path::Path;
use anyhow::{anyhow, Context};
use elex::{csv_text, ElectionList, ElectionResults, RecordSet};
use serde_json::Value;
use crate::capture_output::{find_data_file, CapturedTable, OutputCaptureRunner, DATA_FILE, ELECTIONS_DATA_FILE};
use crate::commands::Command;
use crate::output::Encoding;

/// How the command line output differs from the API.
#[derive(thiserror::Error,Debug,Clone,PartialEq)]
pub enum EquivalenceFailure {
    #[error("command line fields {cli:?} differ from API fields {api:?}")]
    Fields{cli:Vec<String>,api:Vec<String>},
    #[error("command line produced {cli} rows, API produced {api}")]
    RowCount{cli:usize,api:usize},
    #[error("row {row} of the command line output has no field {field}")]
    MissingField{row:usize,field:String},
    #[error("row {row} field {field} : command line gave {cli}, API gave {api}")]
    FieldValue{row:usize,field:String,cli:Value,api:Value},
}

/// The API's serialized collections, loaded once and shared between tests.
#[derive(Debug,Clone)]
pub struct ElectionResultsFixture {
    /// Keyed by collection identifier, e.g. `candidate_reporting_units`.
    collections : Vec<(String,RecordSet)>,
}

impl ElectionResultsFixture {
    pub fn load(results_file:&Path,elections_file:&Path) -> anyhow::Result<Self> {
        let results = ElectionResults::from_data_file(results_file).with_context(||format!("loading {}",results_file.display()))?;
        let elections = ElectionList::from_data_file(elections_file).with_context(||format!("loading {}",elections_file.display()))?;
        Ok(Self::from_api(&results,&elections))
    }

    /// Load the sample data files.
    pub fn load_default() -> anyhow::Result<Self> {
        Self::load(&find_data_file(DATA_FILE)?,&find_data_file(ELECTIONS_DATA_FILE)?)
    }

    pub fn from_api(results:&ElectionResults,elections:&ElectionList) -> Self {
        let collections = vec![
            ("races".to_string(),RecordSet::collect(results.races())),
            ("candidates".to_string(),RecordSet::collect(&results.candidates())),
            ("reporting_units".to_string(),RecordSet::collect(results.reporting_units())),
            ("candidate_reporting_units".to_string(),RecordSet::collect(results.candidate_reporting_units())),
            ("results".to_string(),RecordSet::collect(&results.results())),
            ("elections".to_string(),RecordSet::collect(&elections.elections)),
        ];
        ElectionResultsFixture{collections}
    }

    pub fn records(&self,identifier:&str) -> anyhow::Result<&RecordSet> {
        self.collections.iter().find(|(id,_)|id==identifier).map(|(_,records)|records)
            .ok_or_else(||anyhow!("The API has no collection called {}",identifier))
    }
}

/// Check that decoded command line output matches the API's rows, field by field.
///
/// With no rows, a CSV still has a header so it must name the API's fields, while an empty JSON array names none.
pub fn check_equivalence(encoding:Encoding,cli:&CapturedTable,api:&RecordSet) -> Result<(),EquivalenceFailure> {
    let api_fields : Vec<String> = match api.rows.first() {
        Some(row) => row.keys().cloned().collect(),
        None if encoding==Encoding::Csv => api.field_names.iter().map(|f|f.to_string()).collect(),
        None => vec![],
    };
    if cli.fields!=api_fields { return Err(EquivalenceFailure::Fields{cli:cli.fields.clone(),api:api_fields}) }
    if cli.rows.len()!=api.rows.len() { return Err(EquivalenceFailure::RowCount{cli:cli.rows.len(),api:api.rows.len()}) }
    for (row,(cli_row,api_row)) in cli.rows.iter().zip(api.rows.iter()).enumerate() {
        for (field,api_value) in api_row {
            let cli_value = cli_row.get(field).ok_or_else(||EquivalenceFailure::MissingField{row,field:field.clone()})?;
            let expected = match encoding {
                Encoding::Csv => Value::String(csv_text(api_value)),
                Encoding::Json => api_value.clone(),
            };
            if *cli_value!=expected {
                return Err(EquivalenceFailure::FieldValue{row,field:field.clone(),cli:cli_value.clone(),api:expected})
            }
        }
    }
    Ok(())
}

pub type TestBody = Box<dyn Fn(&OutputCaptureRunner,&ElectionResultsFixture)->anyhow::Result<()>+Send+Sync>;

/// Make a test that runs `command` with the sample data and compares its output to the API.
/// The command and encoding are copied into the closure, so each test is independent of the others.
pub fn gen_test(command:Command,encoding:Encoding) -> TestBody {
    Box::new(move |runner:&OutputCaptureRunner,fixture:&ElectionResultsFixture| -> anyhow::Result<()> {
        let cli = runner.run(command,None,encoding)?;
        let api = fixture.records(&command.identifier())?;
        check_equivalence(encoding,&cli,api)?;
        Ok(())
    })
}

pub struct GeneratedTest {
    /// `test_` followed by the command identifier, e.g. `test_reporting_units`.
    pub name : String,
    pub command : Command,
    pub encoding : Encoding,
    body : TestBody,
}

impl Debug for GeneratedTest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedTest").field("name",&self.name).field("command",&self.command).field("encoding",&self.encoding).finish()
    }
}

impl GeneratedTest {
    pub fn new(command:Command,encoding:Encoding) -> Self {
        GeneratedTest{ name: format!("test_{}",command.identifier()), command, encoding, body: gen_test(command,encoding) }
    }

    pub fn run(&self,runner:&OutputCaptureRunner,fixture:&ElectionResultsFixture) -> anyhow::Result<()> {
        (self.body)(runner,fixture).with_context(||format!("{} ({} output)",self.name,self.encoding))
    }
}

/// The generated tests for one encoding, one per command.
#[derive(Debug)]
pub struct CommandTestMatrix {
    pub encoding : Encoding,
    tests : Vec<GeneratedTest>,
}

impl CommandTestMatrix {
    pub fn new(encoding:Encoding) -> Self {
        CommandTestMatrix{ encoding, tests: Command::ALL.iter().map(|&command|GeneratedTest::new(command,encoding)).collect() }
    }

    pub fn tests(&self) -> &[GeneratedTest] { &self.tests }

    pub fn names(&self) -> Vec<&str> { self.tests.iter().map(|t|t.name.as_str()).collect() }

    pub fn get(&self,name:&str) -> Option<&GeneratedTest> { self.tests.iter().find(|t|t.name==name) }

    pub fn run_named(&self,name:&str,runner:&OutputCaptureRunner,fixture:&ElectionResultsFixture) -> anyhow::Result<()> {
        self.get(name).ok_or_else(||anyhow!("No generated test called {}",name))?.run(runner,fixture)
    }

    /// Run every test, stopping at the first failure.
    pub fn run_all(&self,runner:&OutputCaptureRunner,fixture:&ElectionResultsFixture) -> anyhow::Result<()> {
        for test in &self.tests { test.run(runner,fixture)?; }
        Ok(())
    }
}

// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Run the command line application in-process and read back what it wrote.
//!
//! Rather than redirecting the process' stdout, each invocation gets its own [CaptureSink]
//! which is handed to [ElexApp::run]. Parallel test threads therefore never share a capture window.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context};
use elex::Row;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use crate::app::ElexApp;
use crate::commands::Command;
use crate::output::Encoding;

/// The sample results feed used for every command other than elections.
pub const DATA_FILE : &str = "tests/data/20151103_national.json";
/// The sample elections list used for the elections command.
pub const ELECTIONS_DATA_FILE : &str = "tests/data/00000000_elections.json";

/// The sample data file appropriate to a command.
pub fn default_data_file(command:Command) -> &'static str {
    if command.reads_election_list() { ELECTIONS_DATA_FILE } else { DATA_FILE }
}

/// find an expected path in the current dir. If not there, check the parent, and continue recursively. Return the full path if found.
/// This is the same ancestor search the data file finders use; it lets tests run from a crate directory while the sample data lives at the workspace root.
pub fn find_data_file(relative:&str) -> anyhow::Result<PathBuf> {
    let mut search = Path::new(".").canonicalize().ok();
    while let Some(p) = search {
        let possible = p.join(relative);
        if possible.exists() { return Ok(possible) }
        search = p.parent().map(|p|p.to_path_buf());
    }
    Err(anyhow!("Unable to find {} in the current directory or any parent",relative))
}

/// In memory destination for everything one application run writes.
///
/// Consumed by [CaptureSink::into_text]; if a run fails the sink is simply dropped.
#[derive(Debug,Default)]
pub struct CaptureSink {
    buffer : Vec<u8>,
}

impl CaptureSink {
    pub fn acquire() -> Self { CaptureSink::default() }

    /// Close the sink, returning everything written to it.
    pub fn into_text(self) -> anyhow::Result<String> {
        String::from_utf8(self.buffer).context("Captured output is not valid UTF-8")
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

/// Captured output parsed back into rows.
#[derive(Debug,Clone,PartialEq,Default)]
pub struct CapturedTable {
    /// The CSV header, or the keys of the first JSON object (empty if there are no objects).
    pub fields : Vec<String>,
    /// For CSV every value is a string.
    pub rows : Vec<Row>,
}

impl CapturedTable {
    pub fn decode(encoding:Encoding,text:&str) -> anyhow::Result<Self> {
        match encoding {
            Encoding::Csv => decode_csv(text),
            Encoding::Json => decode_json(text),
        }
    }
}

pub fn decode_csv(text:&str) -> anyhow::Result<CapturedTable> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(text.as_bytes());
    let fields : Vec<String> = reader.headers().context("Captured output has no readable CSV header")?.iter().map(|s|s.to_string()).collect();
    let mut rows : Vec<Row> = vec![];
    for record in reader.records() {
        let record = record.context("Captured output is not valid CSV")?;
        rows.push(fields.iter().cloned().zip(record.iter().map(|v|Value::String(v.to_string()))).collect());
    }
    Ok(CapturedTable{fields,rows})
}

pub fn decode_json(text:&str) -> anyhow::Result<CapturedTable> {
    let rows : Vec<Row> = serde_json::from_str(text).context("Captured output is not a JSON array of objects")?;
    let fields = rows.first().map(|row|row.keys().cloned().collect()).unwrap_or_default();
    Ok(CapturedTable{fields,rows})
}

/// Runs one command at a time through [ElexApp], capturing its output.
#[derive(Debug,Clone,Copy)]
pub struct OutputCaptureRunner {
    /// Applied with [ElexApp::set_log_level]; by default only errors are logged.
    pub log_level : LevelFilter,
}

impl Default for OutputCaptureRunner {
    fn default() -> Self { OutputCaptureRunner{ log_level: LevelFilter::ERROR } }
}

impl OutputCaptureRunner {
    /// `<command> --data-file <data_file> [-o json]`
    pub fn argv(command:Command,data_file:&Path,encoding:Encoding) -> Vec<OsString> {
        let mut argv : Vec<OsString> = vec![command.to_string().into(),"--data-file".into(),data_file.into()];
        if encoding==Encoding::Json {
            argv.push("-o".into());
            argv.push("json".into());
        }
        argv
    }

    /// Run the command and return exactly what it wrote. If `data_file` is None, the sample file for the command is used.
    /// Errors from the application are returned as is.
    pub fn capture(&self,command:Command,data_file:Option<&Path>,encoding:Encoding) -> anyhow::Result<String> {
        let data_file = match data_file {
            Some(path) => path.to_path_buf(),
            None => find_data_file(default_data_file(command))?,
        };
        let mut sink = CaptureSink::acquire();
        let mut app = ElexApp::new(Self::argv(command,&data_file,encoding))?;
        app.setup()?;
        app.set_log_level(self.log_level);
        app.run(&mut sink)?;
        sink.into_text()
    }

    /// Like [OutputCaptureRunner::capture], but parse the text according to the encoding.
    pub fn run(&self,command:Command,data_file:Option<&Path>,encoding:Encoding) -> anyhow::Result<CapturedTable> {
        let text = self.capture(command,data_file,encoding)?;
        CapturedTable::decode(encoding,&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv() {
        let path = Path::new("feed.json");
        assert_eq!(OutputCaptureRunner::argv(Command::ReportingUnits,path,Encoding::Csv),vec!["reporting-units","--data-file","feed.json"]);
        assert_eq!(OutputCaptureRunner::argv(Command::Races,path,Encoding::Json),vec!["races","--data-file","feed.json","-o","json"]);
    }

    #[test]
    fn test_sink() {
        let mut sink = CaptureSink::acquire();
        write!(sink,"a,b\n1,").unwrap();
        sink.write_all(b"2\n").unwrap();
        assert_eq!(sink.into_text().unwrap(),"a,b\n1,2\n");
    }

    #[test]
    fn test_decode_csv_quoting_and_empty_cells() {
        let table = decode_csv("id,description,party\n1,\"Grant a monopoly, sale\",\n").unwrap();
        assert_eq!(table.fields,vec!["id","description","party"]);
        assert_eq!(table.rows.len(),1);
        assert_eq!(table.rows[0]["description"],Value::from("Grant a monopoly, sale"));
        assert_eq!(table.rows[0]["party"],Value::from(""));
    }

    #[test]
    fn test_decode_csv_header_only() {
        let table = decode_csv("electiondate,liveresults,testresults\n").unwrap();
        assert_eq!(table.fields.len(),3);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_decode_json_keeps_key_order() {
        let table = decode_json(r#"[{"z":1,"a":null,"m":false}]"#).unwrap();
        assert_eq!(table.fields,vec!["z","a","m"]);
        assert_eq!(table.rows[0]["a"],Value::Null);
        assert_eq!(table.rows[0]["m"],Value::Bool(false));
    }

    #[test]
    fn test_decode_json_empty_array() {
        let table = decode_json("[]\n").unwrap();
        assert!(table.fields.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_json("electiondate,liveresults\n").is_err());
        assert!(decode_json(r#"{"not":"an array"}"#).is_err());
        assert!(decode_csv("a,b\n1,2,3\n").is_err());
    }

    #[test]
    fn test_default_data_files() {
        assert_eq!(default_data_file(Command::Elections),ELECTIONS_DATA_FILE);
        assert_eq!(default_data_file(Command::Results),DATA_FILE);
        assert!(find_data_file(DATA_FILE).is_ok());
        assert!(find_data_file("tests/data/no_such_file.json").is_err());
    }
}

// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Writing record sets in the supported output formats.

use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;
use elex::{RecordSet, csv_text};
use tracing::debug;

/// The output format of the command line tool.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash,Default)]
pub enum Encoding {
    /// A header line of field names, then one line per record. Nulls are empty cells.
    #[default]
    Csv,
    /// A single array with one object per record, keys in field order.
    Json,
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Encoding::Csv),
            "json" => Ok(Encoding::Json),
            _ => Err(format!("No such output format as {}. Supported formats are csv and json.",s))
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Encoding::Csv => "csv",
            Encoding::Json => "json",
        };
        f.write_str(s)
    }
}

impl Encoding {
    pub fn write(&self,records:&RecordSet,out:&mut dyn Write) -> anyhow::Result<()> {
        debug!(encoding=%self,rows=records.len(),"writing records");
        match self {
            Encoding::Csv => write_csv(records,out),
            Encoding::Json => write_json(records,out),
        }
    }
}

/// The header is written even if there are no records.
fn write_csv(records:&RecordSet,out:&mut dyn Write) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(records.field_names)?;
    for row in &records.rows {
        writer.write_record(records.field_names.iter().map(|name|row.get(*name).map(csv_text).unwrap_or_default()))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(records:&RecordSet,out:&mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out,&records.rows)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use elex::{Election, Record};

    fn elections() -> RecordSet {
        let elections = vec![
            Election{ electiondate: "2015-08-04".to_string(), liveresults: false, testresults: true },
            Election{ electiondate: "2015-11-03".to_string(), liveresults: true, testresults: false },
        ];
        RecordSet::collect(&elections)
    }

    fn written(encoding:Encoding,records:&RecordSet) -> String {
        let mut out = vec![];
        encoding.write(records,&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv() {
        assert_eq!(written(Encoding::Csv,&elections()),"electiondate,liveresults,testresults\n2015-08-04,False,True\n2015-11-03,True,False\n");
    }

    #[test]
    fn test_json() {
        assert_eq!(written(Encoding::Json,&elections()),concat!(
            r#"[{"electiondate":"2015-08-04","liveresults":false,"testresults":true},"#,
            r#"{"electiondate":"2015-11-03","liveresults":true,"testresults":false}]"#,"\n"));
    }

    #[test]
    fn test_empty() {
        let none : Vec<Election> = vec![];
        let records = RecordSet::collect(&none);
        assert_eq!(written(Encoding::Csv,&records),"electiondate,liveresults,testresults\n");
        assert_eq!(written(Encoding::Json,&records),"[]\n");
        assert_eq!(records.field_names,Election::FIELD_NAMES);
    }

    #[test]
    fn test_parse() {
        assert_eq!("json".parse::<Encoding>(),Ok(Encoding::Json));
        assert_eq!(Encoding::default(),Encoding::Csv);
        assert!("xml".parse::<Encoding>().is_err());
    }
}

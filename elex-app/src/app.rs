// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! The application object behind the `elex` binary.
//!
//! The lifecycle is: construct from an argument list, [ElexApp::setup], optionally
//! [ElexApp::set_log_level], then [ElexApp::run] with the stream records should be written to.
//! Nothing is ever written to the process' stdout unless the caller passes it in.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use crate::commands::Command;
use crate::output::Encoding;

/// If set, a tracing filter directive (e.g. `debug` or `elex_app=trace`) overriding --debug and --quiet.
pub const LOG_ENV : &str = "ELEX_LOG";

#[derive(Parser,Debug,Clone)]
#[command(version, name="elex")]
/// Parse an election results feed and print its records as CSV or JSON.
pub struct Opts {
    /// The records to output.
    /// One of races, candidates, reporting-units, candidate-reporting-units, results, elections
    pub command : Command,

    /// The results feed to read. For the elections command, a list of elections.
    #[arg(long, env = "ELEX_DATA_FILE")]
    pub data_file : PathBuf,

    /// The output format, csv or json.
    #[arg(short, long, default_value = "csv")]
    pub output : Encoding,

    /// Log debugging information to stderr.
    #[arg(long)]
    pub debug : bool,

    /// Only log errors.
    #[arg(long, conflicts_with = "debug")]
    pub quiet : bool,
}

pub struct ElexApp {
    opts : Opts,
    /// set by [ElexApp::set_log_level], takes priority over everything else.
    log_level : Option<LevelFilter>,
    /// the contents of [LOG_ENV], read at setup.
    log_directives : Option<String>,
    set_up : bool,
}

impl ElexApp {
    /// Build from the arguments after the program name, e.g. `["races","--data-file","feed.json"]`.
    pub fn new<I,T>(argv:I) -> anyhow::Result<Self>
        where I : IntoIterator<Item=T>, T : Into<OsString>
    {
        let args = std::iter::once(OsString::from("elex")).chain(argv.into_iter().map(Into::into));
        Ok(Self::from_opts(Opts::try_parse_from(args)?))
    }

    pub fn from_opts(opts:Opts) -> Self {
        ElexApp{ opts, log_level: None, log_directives: None, set_up: false }
    }

    pub fn opts(&self) -> &Opts { &self.opts }

    /// Check the data file is there and read logging configuration from the environment.
    pub fn setup(&mut self) -> anyhow::Result<()> {
        if !self.opts.data_file.is_file() {
            return Err(anyhow!("Data file {} does not exist",self.opts.data_file.display()));
        }
        self.log_directives = std::env::var(LOG_ENV).ok().filter(|s|!s.trim().is_empty());
        self.set_up = true;
        Ok(())
    }

    pub fn set_log_level(&mut self,level:LevelFilter) { self.log_level=Some(level); }

    fn log_filter(&self) -> EnvFilter {
        if let Some(level) = self.log_level { return EnvFilter::new(level.to_string()); }
        if let Some(directives) = &self.log_directives {
            if let Ok(filter) = EnvFilter::try_new(directives) { return filter; }
        }
        let level = if self.opts.debug { LevelFilter::DEBUG } else if self.opts.quiet { LevelFilter::ERROR } else { LevelFilter::INFO };
        EnvFilter::new(level.to_string())
    }

    /// Write the requested records to `out`. Log messages go to stderr, for the duration of this call only.
    pub fn run(&self,out:&mut dyn Write) -> anyhow::Result<()> {
        if !self.set_up { return Err(anyhow!("ElexApp::setup must be called before run")); }
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::with_default(subscriber,||self.write_records(out))
    }

    fn write_records(&self,out:&mut dyn Write) -> anyhow::Result<()> {
        let opts = &self.opts;
        debug!(command=%opts.command,data_file=%opts.data_file.display(),output=%opts.output,"running");
        let records = opts.command.load(&opts.data_file).with_context(||format!("Unable to load {} from {}",opts.command,opts.data_file.display()))?;
        if records.is_empty() { warn!(command=%opts.command,"no records found"); }
        else { info!(command=%opts.command,records=records.len(),"loaded records"); }
        opts.output.write(&records,out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_parsing() {
        let app = ElexApp::new(["candidate-reporting-units","--data-file","feed.json","-o","json"]).unwrap();
        assert_eq!(app.opts().command,Command::CandidateReportingUnits);
        assert_eq!(app.opts().output,Encoding::Json);
        assert_eq!(app.opts().data_file,PathBuf::from("feed.json"));
        let app = ElexApp::new(["races","--data-file","feed.json"]).unwrap();
        assert_eq!(app.opts().output,Encoding::Csv);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(ElexApp::new(["ballots","--data-file","feed.json"]).is_err());
        assert!(ElexApp::new(["races","--data-file","feed.json","-o","xml"]).is_err());
        assert!(ElexApp::new(["races","--data-file","f.json","--debug","--quiet"]).is_err());
    }

    #[test]
    fn test_setup_requires_data_file() {
        let mut app = ElexApp::new(["races","--data-file","/no/such/feed.json"]).unwrap();
        let err = app.setup().unwrap_err();
        assert!(err.to_string().contains("/no/such/feed.json"));
    }

    #[test]
    fn test_run_requires_setup() {
        let app = ElexApp::new(["races","--data-file","feed.json"]).unwrap();
        let mut out = vec![];
        assert!(app.run(&mut out).is_err());
        assert!(out.is_empty());
    }
}

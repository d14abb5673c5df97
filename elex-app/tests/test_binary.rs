// Copyright 2026 the Elex authors.
// This file is part of Elex.
// Elex is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// Elex is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with Elex.  If not, see <https://www.gnu.org/licenses/>.


//! Runs the built `elex` binary, checking it writes the same bytes as an in-process run.

#![allow(deprecated)]

use assert_cmd::Command;
use elex_app::capture_output::{default_data_file, find_data_file, OutputCaptureRunner};
use elex_app::Encoding;
use predicates::prelude::*;

#[test]
fn test_binary_matches_in_process_output() {
    let runner = OutputCaptureRunner::default();
    for command in elex_app::Command::ALL {
        let data_file = find_data_file(default_data_file(command)).unwrap();
        for encoding in [Encoding::Csv,Encoding::Json] {
            let expected = runner.capture(command,Some(&data_file),encoding).unwrap();
            let mut cmd = Command::cargo_bin("elex").unwrap();
            cmd.arg(command.to_string()).arg("--data-file").arg(&data_file).args(["-o",&encoding.to_string()]).arg("--quiet")
                .assert()
                .success()
                .stdout(expected);
        }
    }
}

#[test]
fn test_data_file_from_environment() {
    let data_file = find_data_file(default_data_file(elex_app::Command::Elections)).unwrap();
    Command::cargo_bin("elex").unwrap()
        .env("ELEX_DATA_FILE",&data_file)
        .args(["elections","--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("electiondate,liveresults,testresults\n2015-03-10,False,True\n"));
}

#[test]
fn test_missing_data_file_exits_with_error() {
    Command::cargo_bin("elex").unwrap()
        .args(["races","--data-file","/no/such/feed.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unknown_command_rejected() {
    Command::cargo_bin("elex").unwrap()
        .args(["ballots","--data-file","feed.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ballots"));
}

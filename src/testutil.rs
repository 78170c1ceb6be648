//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::query::Session;
use crate::table::CensusTable;

/// Contents of the bundled New Jersey data file.
pub const NJ_DATA: &str = include_str!("../data/njpopulation.dat");

pub fn bundled_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/njpopulation.dat")
}

pub fn nj_table() -> CensusTable {
    CensusTable::from_reader(Cursor::new(NJ_DATA)).unwrap()
}

/// Writes `contents` to a data file in a fresh temp dir. The dir is removed
/// when the returned `TempDir` is dropped.
pub fn temp_data_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("census.dat");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Runs a session over `nj_table()` with `input` as stdin and returns stdout.
pub fn run_session(input: &str) -> String {
    let table = nj_table();
    let mut session = Session::new(&table, Cursor::new(input), Vec::new());
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

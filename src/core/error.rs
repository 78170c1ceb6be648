use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CensusError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("Cannot read census data from {}: {reason}", .path.display())]
    DataSource { path: PathBuf, reason: String },
    #[error("Malformed census record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
    #[error("Invalid census table: {0}")]
    InvalidTable(String),
    #[error("No census record for decade {0}")]
    MissingDecade(i32),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CensusError {
    fn from(err: std::io::Error) -> Self {
        CensusError::IoError(err.to_string())
    }
}

/// Shown to the user as is.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Please enter a valid number for the year (you entered: {0})")]
    InvalidInput(String),
    #[error("Please enter a year >= 1790 and <= 2010 (you entered: {0})")]
    OutOfRange(String),
}

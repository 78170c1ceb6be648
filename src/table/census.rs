use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::core::CensusError;

use super::{CensusRecord, DECADE_SPAN, DECADES, EARLIEST_YEAR};

/// One record per decade, 1790 to 2010. Checked on construction, never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct CensusTable {
    records: Vec<CensusRecord>,
}

impl CensusTable {
    pub fn new(records: Vec<CensusRecord>) -> Result<Self, CensusError> {
        if records.len() != DECADES {
            return Err(CensusError::InvalidTable(format!(
                "expected {} decade records, got {}",
                DECADES,
                records.len()
            )));
        }
        for (i, record) in records.iter().enumerate() {
            let expected = EARLIEST_YEAR + DECADE_SPAN * i as i32;
            if record.year != expected {
                return Err(CensusError::InvalidTable(format!(
                    "record {} has year {}, expected {}",
                    i + 1,
                    record.year,
                    expected
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn load(path: &Path) -> Result<Self, CensusError> {
        let data_source = |reason: String| CensusError::DataSource {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|e| data_source(e.to_string()))?;
        debug!("reading census data from {}", path.display());

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            CensusError::IoError(reason) => data_source(reason),
            other => other,
        })
    }

    /// Stops after a full table; blank lines are skipped, bad lines fail the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CensusError> {
        let mut records = Vec::with_capacity(DECADES);
        let mut lines = reader.lines().enumerate();

        while records.len() < DECADES {
            let Some((index, line)) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record =
                CensusRecord::parse_line(&line).ok_or_else(|| CensusError::MalformedRecord {
                    line: index + 1,
                    content: line.clone(),
                })?;
            debug!(year = record.year, population = record.population; "loaded census record");
            records.push(record);
        }

        let trailing = lines
            .map_while(|(_, line)| line.ok())
            .filter(|line| !line.trim().is_empty())
            .count();
        if trailing > 0 {
            warn!("ignoring {} lines after the last decade record", trailing);
        }

        Self::new(records)
    }

    pub fn get(&self, year: i32) -> Option<&CensusRecord> {
        self.records
            .binary_search_by_key(&year, |record| record.year)
            .ok()
            .map(|index| &self.records[index])
    }

    pub fn records(&self) -> &[CensusRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

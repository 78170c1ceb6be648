use std::fmt;

use log::debug;

use crate::core::CensusError;
use crate::table::{CensusRecord, CensusTable, DECADE_SPAN};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationRequest {
    pub target_year: i32,
    pub lower: CensusRecord,
    pub upper: CensusRecord,
}

impl InterpolationRequest {
    pub fn estimate(&self) -> f64 {
        let (x, x0, x1) = (
            f64::from(self.target_year),
            f64::from(self.lower.year),
            f64::from(self.upper.year),
        );
        let (y0, y1) = (self.lower.population, self.upper.population);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub year: i32,
    pub population: f64,
    pub exact: bool,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qualifier = if self.exact { "" } else { " (approximately)" };
        write!(
            f,
            "\nYear: {}\nPopulation: {:.2}{}\n\n",
            self.year, self.population, qualifier
        )
    }
}

/// `year` must already be in range.
pub fn estimate(table: &CensusTable, year: i32) -> Result<Estimate, CensusError> {
    let record = |decade: i32| {
        table
            .get(decade)
            .copied()
            .ok_or(CensusError::MissingDecade(decade))
    };

    let offset = year.rem_euclid(DECADE_SPAN);
    if offset == 0 {
        debug!(year = year; "interpolation not needed");
        return Ok(Estimate {
            year,
            population: record(year)?.population,
            exact: true,
        });
    }

    debug!(year = year; "interpolation needed");
    let lower_year = year - offset;
    let request = InterpolationRequest {
        target_year: year,
        lower: record(lower_year)?,
        upper: record(lower_year + DECADE_SPAN)?,
    };
    Ok(Estimate {
        year,
        population: request.estimate(),
        exact: false,
    })
}

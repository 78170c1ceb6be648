use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;

use crate::core::CensusError;
use crate::table::{CensusTable, EARLIEST_YEAR, LATEST_YEAR};

use super::{Input, estimate, parse_input};

/// Prompt loop over a loaded table. Each whitespace delimited token answers one prompt.
pub struct Session<'a, R, W> {
    table: &'a CensusTable,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(table: &'a CensusTable, input: R, output: W) -> Self {
        Self {
            table,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn run(&mut self) -> Result<(), CensusError> {
        loop {
            self.prompt()?;
            let Some(token) = self.next_token()? else {
                debug!("end of input, closing session");
                return Ok(());
            };

            match parse_input(&token) {
                Ok(Input::Quit) => {
                    debug!("sentinel received, closing session");
                    return Ok(());
                }
                Ok(Input::Year(year)) => {
                    let estimate = estimate(self.table, year)?;
                    write!(self.output, "{estimate}")?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> Result<(), CensusError> {
        write!(
            self.output,
            "What year would you like to find or approximate the population of New Jersey for (>= {} and <= {}): ",
            EARLIEST_YEAR, LATEST_YEAR
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<String>, CensusError> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // undecodable bytes still reach the parser and get rejected there
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

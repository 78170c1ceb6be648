use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::kv::{ToValue, Value};

/// Estimate the population of New Jersey for any year from 1790 to 2010.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Census data file, overrides `data.path` from the configuration.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Diagnostic output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, error};

use census::conf::Config;
use census::core::{CliArgs, setup_logging};
use census::query::Session;
use census::table::CensusTable;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    debug!(args = args; "census started");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(path) = &args.data {
        config.data.path = path.clone();
    }

    let table = CensusTable::load(&config.data.path).context("loading census table")?;
    debug!("loaded {} decade records", table.len());

    let mut session = Session::new(&table, io::stdin().lock(), io::stdout().lock());
    session.run().context("running query session")?;
    Ok(())
}

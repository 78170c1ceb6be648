mod args;
mod error;
mod logger;

pub use args::CliArgs;
pub use error::{CensusError, QueryError};
pub use logger::{level_for, setup_logging};

use std::path::Path;

use crate::{
    conf::DataConfig,
    core::CensusError::{self, ConfigParsingError},
};
use config::{Config as CConfig, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CENSUS";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, CensusError> {
        let builder = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml));
        Self::build(builder)
    }

    /// `CENSUS_DATA__PATH` overrides `data.path` from the file.
    pub fn load(file: Option<&Path>) -> Result<Config, CensusError> {
        Self::load_with_env(file, Self::environment())
    }

    fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Config, CensusError> {
        let mut builder = CConfig::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }
        Self::build(builder.add_source(env))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, CensusError> {
        let config = builder
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}

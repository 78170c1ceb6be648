use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_path")]
    pub path: PathBuf,
}

impl DataConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("data/njpopulation.dat")
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

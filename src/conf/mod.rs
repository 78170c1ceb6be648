mod config;
mod data;

pub use config::Config;
pub use data::DataConfig;

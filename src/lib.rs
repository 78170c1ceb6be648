pub mod conf;
pub mod core;
pub mod query;
pub mod table;

#[cfg(feature = "testutil")]
pub mod testutil;

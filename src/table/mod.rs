mod census;
mod record;

pub use census::CensusTable;
pub use record::CensusRecord;

pub const EARLIEST_YEAR: i32 = 1790;
pub const LATEST_YEAR: i32 = 2010;
pub const DECADE_SPAN: i32 = 10;
pub const DECADES: usize = ((LATEST_YEAR - EARLIEST_YEAR) / DECADE_SPAN + 1) as usize;

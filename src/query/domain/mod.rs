//! Filter vocabulary for task queries.

mod bucket;
mod error;
mod filter;
mod params;

pub use bucket::DueBucket;
pub use error::{FilterParamsError, ParseDueBucketError};
pub use filter::FilterSpec;
pub use params::FilterParams;

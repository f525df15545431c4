//! Port contracts for directory lookup.

pub mod lookup;

pub use lookup::{DirectoryError, DirectoryLookup, DirectoryResult};

//! Task list querying.
//!
//! A [`domain::FilterSpec`] of independent, optional constraints is compiled
//! against one captured "now" into a predicate, applied to a project's
//! tasks, and the matches are returned in canonical order.
//!
//! - Filter specs, due buckets and raw parameters in [`domain`]
//! - Compiler, orderer and query service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

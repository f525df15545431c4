//! Task records and the task store port.
//!
//! The task module owns the vocabulary shared by ingestion and querying, and
//! the contract of the external store that persists tasks. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Lifecycle service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

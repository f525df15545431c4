//! Natural-language task ingestion.
//!
//! Free-form task text goes through language inference, field
//! normalization and assignee resolution, and comes out as exactly one
//! [`domain::NormalizedTask`]. When inference is unavailable, times out,
//! returns malformed output or is switched off, a deterministic fallback
//! produces a degraded but valid task instead of an error.
//!
//! - Domain types in [`domain`]
//! - The completion-service port in [`ports`]
//! - HTTP and scripted completion adapters in [`adapters`]
//! - Inference client, normalizer, fallback, orchestrator and intake
//!   service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

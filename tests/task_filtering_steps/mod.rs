//! Step definitions for task filtering scenarios.

pub mod given;
pub mod when;

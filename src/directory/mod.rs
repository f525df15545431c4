//! User directory lookup and assignee resolution.
//!
//! The directory itself is an external collaborator. This module defines the
//! lookup contract the core needs, an in-memory directory, and the
//! [`services::AssigneeResolver`] that turns a free-text name or email
//! fragment into a directory identity.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

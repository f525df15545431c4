//! Adapter implementations of the directory ports.

pub mod memory;

pub use memory::InMemoryDirectory;

//! Application services over the directory.

mod resolver;

pub use resolver::AssigneeResolver;

//! Domain model for directory users.

mod user;

pub use user::DirectoryUser;

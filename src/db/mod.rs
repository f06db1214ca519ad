//! Storage layer: the shared pause document and the employee directory.

pub mod directory;
pub mod store;

pub use directory::EmployeeDirectory;
pub use store::{PauseStore, UpdateSession};

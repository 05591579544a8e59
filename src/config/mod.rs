//! Configuration module
//!
//! Holds the application descriptors and page chrome, either the built-in
//! deployment or a portal YAML file.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{LoadResult, LoadWarning, load_portal, parse_portal};
pub use schema::*;
pub use validation::check_portal;

//! User manuals loaded from a directory of markdown files.
//!
//! Manuals are read once at startup and never re-scanned. The page shows them
//! verbatim; nothing here parses markdown.

pub mod registry;

pub use registry::{MANUAL_EXTENSION, ManualEntry, ManualRegistry, manual_key};

//! Observability module
//!
//! Structured logging for `central-site` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};

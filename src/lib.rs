//! `central-site` - static application portal with build-time user manuals
//!
//! Scans a directory of markdown user manuals once, then renders a single
//! page that lists the internal applications as cards, each with its launch
//! and download actions and a collapsible panel holding its manual.

pub mod cli;
pub mod config;
pub mod error;
pub mod manuals;
pub mod observability;
pub mod portal;
pub mod serve;

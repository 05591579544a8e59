//! Shared integration-test harness for running the `central-site` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the compiled `central-site` binary.
pub struct CentralSiteProcess;

impl CentralSiteProcess {
    /// Runs the binary with `args` to completion and returns its output.
    ///
    /// Environment overrides that would change defaults are cleared.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_central-site"))
            .args(args)
            .env_remove("CENTRAL_SITE_MANUALS")
            .env_remove("CENTRAL_SITE_CONFIG")
            .env_remove("CENTRAL_SITE_PUBLIC")
            .env_remove("CENTRAL_SITE_BIND")
            .env_remove("CENTRAL_SITE_COLOR")
            .env_remove("CENTRAL_SITE_LOG_LEVEL")
            .output()
            .expect("failed to run central-site")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

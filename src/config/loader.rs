//! Portal configuration loader.
//!
//! Without a file the built-in deployment is used. With a file, the YAML is
//! parsed into a [`PortalConfig`] and checked for descriptors that will
//! render oddly. Those checks only produce warnings; the page is still built.

use std::fs;
use std::path::Path;

use crate::config::schema::PortalConfig;
use crate::config::validation::check_portal;
use crate::error::ConfigError;

/// Result of loading the portal configuration.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: PortalConfig,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred (e.g. `apps[1].manual_key`).
    pub location: Option<String>,
}

/// Load the portal configuration.
///
/// `None` selects the built-in deployment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `path` does not exist,
/// [`ConfigError::Unreadable`] if it cannot be read, or
/// [`ConfigError::ParseError`] if it is not a valid portal file.
pub fn load_portal(path: Option<&Path>) -> Result<LoadResult, ConfigError> {
    let config = match path {
        Some(path) => parse_portal_file(path)?,
        None => PortalConfig::default(),
    };
    let warnings = check_portal(&config);
    Ok(LoadResult { config, warnings })
}

fn parse_portal_file(path: &Path) -> Result<PortalConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_portal(&raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|loc| loc.line()),
        message: e.to_string(),
    })
}

/// Parse portal YAML text.
///
/// # Errors
///
/// Returns the YAML error if the text is not a valid portal file.
pub fn parse_portal(raw: &str) -> Result<PortalConfig, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

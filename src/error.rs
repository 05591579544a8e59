//! Error types for `central-site`
//!
//! The portal itself has almost no failure modes: missing manuals fall back to
//! a fixed sentence and unreadable files are skipped. The errors here cover the
//! tool around it (loading a portal file, writing the bundle, running the
//! preview server) and map each one to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `central-site` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unreadable or invalid portal file)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (output directory not writable, asset copy failed)
    pub const IO_ERROR: i32 = 3;

    /// Preview server error (bind failed, server crashed)
    pub const SERVE_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `central-site` operations.
///
/// Aggregates the domain-specific errors and maps each to an exit code.
#[derive(Debug, Error)]
pub enum CentralSiteError {
    /// Portal configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Preview server error
    #[error(transparent)]
    Serve(#[from] ServeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CentralSiteError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Serve(_) => ExitCode::SERVE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Portal configuration loading errors.
///
/// Only an explicitly requested portal file can fail; the built-in deployment
/// never does.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Portal file could not be read
    #[error("cannot read portal file {path}: {source}")]
    Unreadable {
        /// Path to the portal file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the portal file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced portal file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },
}

// ============================================================================
// Serve Errors
// ============================================================================

/// Preview server errors.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The bind address could not be parsed
    #[error("invalid bind address '{0}'")]
    InvalidAddress(String),

    /// The TCP listener could not bind
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an error
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `central-site` operations.
pub type Result<T> = std::result::Result<T, CentralSiteError>;

// ============================================================================
// Tests
// ============================================================================

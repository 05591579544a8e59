//! `manuals` command: report what the registry holds.
//!
//! Lists every loaded manual and, per application, whether its key resolved
//! or the card will show the fallback text.

use serde::Serialize;

use crate::cli::args::{ManualsArgs, OutputFormat};
use crate::cli::commands::load_inputs;
use crate::config::PortalConfig;
use crate::error::Result;
use crate::manuals::ManualRegistry;
use crate::portal::Portal;

/// Machine-readable registry report.
#[derive(Debug, Serialize)]
pub struct ManualsReport {
    /// Directory that was scanned.
    pub directory: String,
    /// Loaded manuals in key order.
    pub manuals: Vec<ManualRow>,
    /// Applications in display order.
    pub apps: Vec<AppRow>,
    /// Manual keys no application refers to.
    pub unused: Vec<String>,
}

/// One loaded manual.
#[derive(Debug, Serialize)]
pub struct ManualRow {
    /// Registry key.
    pub key: String,
    /// File it was read from.
    pub source: Option<String>,
    /// Content size in bytes.
    pub bytes: usize,
}

/// One application and its manual lookup result.
#[derive(Debug, Serialize)]
pub struct AppRow {
    /// Application title.
    pub title: String,
    /// Key the card looks up.
    pub manual_key: String,
    /// Whether a non-empty manual was found.
    pub resolved: bool,
}

/// Execute `manuals`.
///
/// # Errors
///
/// Returns a config error if the portal file is invalid, or a JSON error if
/// the report cannot be serialized.
pub fn run(args: &ManualsArgs) -> Result<()> {
    let (config, manuals) = load_inputs(&args.source)?;
    let report = build_report(&args.source.manuals.display().to_string(), &config, manuals);

    match args.format {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Assemble the report for `config` against `manuals`.
#[must_use]
pub fn build_report(
    directory: &str,
    config: &PortalConfig,
    manuals: ManualRegistry,
) -> ManualsReport {
    let manual_rows = manuals
        .iter()
        .map(|(key, entry)| ManualRow {
            key: key.to_string(),
            source: entry.source.as_ref().map(|p| p.display().to_string()),
            bytes: entry.content.len(),
        })
        .collect();

    let unused = manuals
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !config.apps.iter().any(|app| app.manual_key == *key))
        .map(str::to_string)
        .collect();

    let portal = Portal::new(config, manuals);
    let apps = portal
        .cards()
        .iter()
        .map(|card| AppRow {
            title: card.title().to_string(),
            manual_key: card.manual_key().to_string(),
            resolved: card.has_manual(),
        })
        .collect();

    ManualsReport {
        directory: directory.to_string(),
        manuals: manual_rows,
        apps,
        unused,
    }
}

/// Human-readable rendering of the report.
#[must_use]
pub fn render_human(report: &ManualsReport) -> String {
    let mut lines = Vec::new();

    if report.manuals.is_empty() {
        lines.push(format!("No manuals found in {}", report.directory));
    } else {
        lines.push(format!(
            "Manuals in {} ({}):",
            report.directory,
            report.manuals.len()
        ));
        for row in &report.manuals {
            lines.push(format!(
                "  {:<36} {} bytes  {}",
                row.key,
                row.bytes,
                row.source.as_deref().unwrap_or("-")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Applications:".to_string());
    for app in &report.apps {
        let status = if app.resolved { "manual" } else { "fallback" };
        lines.push(format!("  {:<36} {:<36} {status}", app.title, app.manual_key));
    }

    if !report.unused.is_empty() {
        lines.push(String::new());
        lines.push(format!("Unused manuals: {}", report.unused.join(", ")));
    }

    lines.push(String::new());
    lines.join("\n")
}

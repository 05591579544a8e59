//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod completions;
pub mod manuals;
pub mod serve;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands, SourceArgs};
use crate::config::{PortalConfig, load_portal};
use crate::error::Result;
use crate::manuals::ManualRegistry;
use crate::portal::Portal;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<()> {
    match cli.command {
        Commands::Build(args) => build::run(&args, cli.quiet),
        Commands::Serve(args) => serve::run(&args, cli.quiet, cancel).await,
        Commands::Manuals(args) => manuals::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the portal configuration and scan the manuals directory.
///
/// Configuration warnings are logged, never returned.
fn load_inputs(source: &SourceArgs) -> Result<(PortalConfig, ManualRegistry)> {
    if let Some(ref path) = source.config {
        tracing::info!(config = %path.display(), "loading portal file");
    }
    let load_result = load_portal(source.config.as_deref())?;
    for warning in &load_result.warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}",
            warning.message
        );
    }

    let manuals = ManualRegistry::scan(&source.manuals);
    tracing::info!(
        dir = %source.manuals.display(),
        count = manuals.len(),
        "manuals loaded"
    );

    Ok((load_result.config, manuals))
}

/// Build the portal view from the command's inputs.
fn load_portal_view(source: &SourceArgs) -> Result<Portal> {
    let (config, manuals) = load_inputs(source)?;
    let portal = Portal::new(&config, manuals);

    for card in portal.cards().iter().filter(|card| !card.has_manual()) {
        tracing::info!(
            app = card.title(),
            key = card.manual_key(),
            "no manual found, using fallback text"
        );
    }

    Ok(portal)
}

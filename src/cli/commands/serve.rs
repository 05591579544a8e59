//! `serve` command: render once, then serve the page for preview.

use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::cli::commands::load_portal_view;
use crate::error::Result;
use crate::serve;

/// Execute `serve`.
///
/// The manuals are scanned and the page rendered before the listener binds;
/// edits to the manuals directory need a restart to show up. `quiet`
/// suppresses the address line on stderr.
///
/// # Errors
///
/// Returns a serve error if the address is invalid or cannot be bound, or a
/// config error if the portal file is invalid.
pub async fn run(args: &ServeArgs, quiet: bool, cancel: CancellationToken) -> Result<()> {
    let addr = serve::parse_bind_addr(&args.bind)?;
    let page = load_portal_view(&args.source)?.render();

    let (listener, bound) = serve::bind(addr).await?;
    tracing::info!(%bound, public = %args.public.display(), "preview server listening");
    if !quiet {
        eprintln!("Serving portal at http://{bound}/");
    }

    serve::run(listener, serve::router(page, args.public.clone()), cancel).await?;
    Ok(())
}

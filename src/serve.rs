//! Local preview server.
//!
//! The page is rendered once before the listener starts and shared read-only
//! by every request. `/` and `/index.html` return it; any other `GET` path is
//! looked up under the public directory, which is where downloadable assets
//! such as the APK live.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ServeError;

/// State shared by the handlers.
#[derive(Debug)]
struct ServeState {
    page: Bytes,
    public_dir: PathBuf,
}

/// Build the preview router for a pre-rendered `page`.
pub fn router(page: String, public_dir: PathBuf) -> Router {
    let state = Arc::new(ServeState {
        page: Bytes::from(page),
        public_dir,
    });

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .fallback(public_asset)
        .with_state(state)
}

async fn index(State(state): State<Arc<ServeState>>) -> Html<Bytes> {
    Html(state.page.clone())
}

async fn public_asset(
    State(state): State<Arc<ServeState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let Some(relative) = public_relative_path(uri.path()) else {
        debug!(path = uri.path(), "rejected asset path");
        return StatusCode::NOT_FOUND.into_response();
    };

    let full_path = state.public_dir.join(&relative);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => {
            debug!(path = %full_path.display(), bytes = bytes.len(), "serving asset");
            (
                [(header::CONTENT_TYPE, content_type(&relative))],
                Bytes::from(bytes),
            )
                .into_response()
        }
        Err(e) => {
            debug!(path = %full_path.display(), error = %e, "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Map a request path onto a path relative to the public directory.
///
/// Returns `None` for paths that could leave the directory (`..`, absolute
/// or prefixed components, backslashes) or that name no file at all.
#[must_use]
pub fn public_relative_path(request_path: &str) -> Option<PathBuf> {
    if request_path.contains('\\') {
        return None;
    }

    let mut relative = PathBuf::new();
    for segment in request_path.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => relative.push(part),
            _ => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Content type for a served asset, chosen by extension.
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("md") => "text/markdown; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("apk") => "application/vnd.android.package-archive",
        _ => "application/octet-stream",
    }
}

/// Normalize a `[host:]port` bind string.
///
/// `":8080"` binds all interfaces; a bare `"8080"` binds loopback only.
///
/// # Errors
///
/// Returns [`ServeError::InvalidAddress`] if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<SocketAddr, ServeError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("127.0.0.1:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|_| ServeError::InvalidAddress(input.to_string()))
}

/// Bind `addr` and return the listener with its actual address.
///
/// Binding to port 0 picks a free port, which tests rely on.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] if the listener cannot bind.
pub async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let bound = listener.local_addr().map_err(|source| ServeError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    Ok((listener, bound))
}

/// Serve `router` on `listener` until `cancel` fires.
///
/// # Errors
///
/// Returns [`ServeError::Server`] if the server stops with an I/O error.
pub async fn run(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> Result<(), ServeError> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(ServeError::Server)?;
    info!("preview server stopped");
    Ok(())
}

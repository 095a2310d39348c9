//! Static file server (`serve`).

use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::error::{Result, ToolshedError};
use crate::path_utils::clean_path;

/// Router serving the files below `dir`; directories answer with their
/// `index.html`.
pub fn build_router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Line printed when the server starts.
#[must_use]
pub fn banner(dir: &Path, port: u16) -> String {
    let dir = clean_path(dir);
    let name = if dir == Path::new(".") {
        "current directory".to_string()
    } else {
        dir.display().to_string()
    };
    format!("Serving directory {name}, on port {port}.")
}

/// Serve `dir` on all interfaces until Ctrl-C.
///
/// # Errors
/// Returns a `Serve` error if the port cannot be bound or the server fails.
pub async fn serve(dir: &Path, port: u16) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ToolshedError::Serve(format!("cannot listen on {addr}: {e}")))?;

    serve_listener(listener, dir, shutdown_signal()).await
}

/// Serve `dir` on an already bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns a `Serve` error if the server fails.
pub async fn serve_listener<F>(listener: TcpListener, dir: &Path, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, dir = %dir.display(), "serving");
    }

    axum::serve(listener, build_router(dir))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ToolshedError::Serve(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

//! Static development server.
//!
//! Serves a directory tree with:
//! - `Access-Control-Allow-Origin: *` on every response
//! - `application/javascript` for `.js` and `.mjs` files
//! - HTML directory listings where no `index.html` exists
//!
//! Connections are handled one at a time until an interrupt arrives.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::future::Future;
use std::path::PathBuf;

use anyhow::Context;
use console::style;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;

use crate::config::ServerSettings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Directory served as `/`.
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve(settings: &ServerSettings) -> anyhow::Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("Failed to bind {}", settings.base_url()))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    serve_with_shutdown(listener, settings.root.clone(), shutdown_signal()).await
}

/// Serve `root` on an already bound listener until `signal` resolves.
///
/// Connections are accepted and served one at a time with keep-alive off,
/// so each request is written out completely before the next is accepted.
/// The signal also interrupts a connection in progress. The listener is
/// dropped before returning, releasing the port.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    root: PathBuf,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(AppState::new(root));
    tokio::pin!(signal);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    continue;
                }
            },
            _ = &mut signal => break,
        };

        let service = TowerToHyperService::new(app.clone());
        let connection = http1::Builder::new()
            .keep_alive(false)
            .serve_connection(TokioIo::new(stream), service);

        tokio::select! {
            result = connection => {
                if let Err(e) = result {
                    tracing::debug!("Connection from {} ended with error: {}", peer, e);
                }
            }
            _ = &mut signal => break,
        }
    }

    drop(listener);
    println!("\n{} Shutting down server...", style("→").cyan());
    Ok(())
}

/// Resolve when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("js/three/build")).unwrap();
        std::fs::write(
            dir.path().join("js/three/build/three.module.js"),
            "export const REVISION = '162';",
        )
        .unwrap();
        std::fs::write(dir.path().join("js/papaparse.mjs"), "export default {};").unwrap();

        let app = create_router(AppState::new(dir.path().to_path_buf()));
        (app, dir)
    }

    #[tokio::test]
    async fn test_root_listing_without_index() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Directory listing for /"));
        assert!(html.contains("<a href=\"js/\">js/</a>"));
    }

    #[tokio::test]
    async fn test_module_served_as_javascript() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/js/papaparse.mjs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (app, _dir) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/js/missing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_ne!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|v| v.to_str().unwrap_or("")),
            Some("application/javascript")
        );
    }
}

//! Router configuration for the web server.

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::handlers;
use super::AppState;

/// Create the router serving `state.root`.
///
/// Layers, innermost first: static files with a directory listing fallback,
/// the JavaScript content type override, then CORS so every response
/// carries the allow-origin header.
pub fn create_router(state: AppState) -> Router {
    let listing = get(handlers::directory_listing).with_state(state.clone());
    let files = ServeDir::new(&state.root).fallback(listing);

    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(handlers::javascript_content_type))
        .layer(CorsLayer::permissive())
}

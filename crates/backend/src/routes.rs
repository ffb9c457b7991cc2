use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_log::request_logger;

/// All application routes.
///
/// Everything that is not an API route is served from `dist`. Unknown paths
/// get `index.html`, so a deep link such as `/compute/auto-scaling` loads the
/// console and the client resolves it.
pub fn configure_routes(dist: &Path) -> Router {
    let index = dist.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/navigation", get(handlers::navigation::route_table))
        .fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}

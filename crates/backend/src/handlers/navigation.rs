use axum::http::StatusCode;
use axum::Json;
use contracts::navigation::{routes, RouteTable};

/// GET /api/navigation
///
/// The validated route table the console navigates by, read-only.
pub async fn route_table() -> Result<Json<&'static RouteTable>, (StatusCode, String)> {
    routes().map(Json).map_err(|e| {
        tracing::error!("route table unavailable: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

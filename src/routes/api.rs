use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// API Router Module
///
/// JSON endpoints for the frontend. These are not page navigations, so the gate
/// middleware is not applied; `/api/access` runs the gate on a path the caller names.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for the load balancer.
        .route("/health", get(|| async { "ok" }))
        // GET /api/access?path=...
        .route("/api/access", get(handlers::check_access))
        // GET /api/access/routes
        .route("/api/access/routes", get(handlers::get_route_table))
}

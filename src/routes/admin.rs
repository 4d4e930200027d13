use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Admin Router Module
///
/// The back office. Access is decided per path by the gate:
/// - `admin` sees everything.
/// - `officer:catalog` is kept out of the management-restricted sections.
/// - `officer:management` is kept out of the catalog-restricted sections.
/// - `user` and anonymous callers are sent to /login.
///
/// Full paths are registered instead of nesting so `/admin` itself stays an exact match.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin
        // Dashboard, visible to every back-office role.
        .route("/admin", get(handlers::admin_dashboard_page))
        // GET /admin/{section}
        // One screen per section in `handlers::ADMIN_SECTIONS`; unknown sections are 404s.
        .route("/admin/{section}", get(handlers::admin_section_page))
        // GET /admin/{section}/...
        // Detail, create and edit screens below a section.
        .route("/admin/{section}/{*rest}", get(handlers::admin_section_page))
}

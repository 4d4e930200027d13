use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Authenticated Router Module
///
/// End-user pages for a signed-in member. Only `/setup-profile` is enforced by the
/// gate itself; the remaining pages rely on the frontend fetching member data with
/// the session credential, which the library backend rejects when it is missing.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /setup-profile
        // First-login wizard. Redirects to /login without a session credential.
        .route("/setup-profile", get(handlers::setup_profile_page))
        .route("/profile", get(handlers::profile_page))
        .route("/borrows", get(handlers::my_borrows_page))
        .route("/loans", get(handlers::my_loans_page))
        .route("/notifications", get(handlers::my_notifications_page))
}

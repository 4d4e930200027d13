use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Pages any visitor may open. The gate still runs here: `/login`, `/register` and
/// `/forgot-password` send a caller who already holds a session to their home area.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home_page))
        // --- Auth pages ---
        .route("/login", get(handlers::login_page))
        .route("/register", get(handlers::register_page))
        .route("/forgot-password", get(handlers::forgot_password_page))
        // GET /forbidden
        // Landing page for refused back-office navigations; message keyed off the role cookie.
        .route("/forbidden", get(handlers::forbidden_page))
        // --- Catalog browsing ---
        .route("/books", get(handlers::books_page))
        .route("/books/{id}", get(handlers::book_detail_page))
        // --- Legal documents ---
        .route("/terms", get(handlers::terms_page))
        .route("/privacy", get(handlers::privacy_page))
}

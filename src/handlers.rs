use crate::{
    gate::{self, Role},
    models::{AccessDecision, AccessQuery, Area, ForbiddenView, PageView, RouteTable},
    session::SessionCookies,
};
use axum::{
    Json,
    extract::{OriginalUri, Path, Query},
    http::StatusCode,
};

/// Back-office sections served under `/admin/{section}`, with their page titles.
pub const ADMIN_SECTIONS: [(&str, &str); 11] = [
    ("categories", "Categories"),
    ("books", "Books"),
    ("users", "Users"),
    ("loans", "Loans"),
    ("borrows", "Borrows"),
    ("returns", "Returns"),
    ("fines", "Fines"),
    ("lost-books", "Lost Books"),
    ("activity-logs", "Activity Logs"),
    ("notifications", "Notifications"),
    ("legal-documents", "Legal Documents"),
];

// --- Access API ---

/// check_access
///
/// Evaluates the gate for `path` with the caller's own cookies, without navigating.
#[utoipa::path(
    get,
    path = "/api/access",
    params(AccessQuery),
    responses(
        (status = 200, description = "Gate verdict for the path", body = AccessDecision),
        (status = 400, description = "Missing path parameter")
    )
)]
pub async fn check_access(
    session: SessionCookies,
    Query(query): Query<AccessQuery>,
) -> Json<AccessDecision> {
    let verdict = gate::decide(&query.path, session.token.as_deref(), session.role.as_ref());
    Json(AccessDecision::new(
        query.path,
        session.role_label(),
        session.is_authenticated(),
        verdict,
    ))
}

/// get_route_table
///
/// Exposes the static catalog/management partition of the admin area.
#[utoipa::path(
    get,
    path = "/api/access/routes",
    responses((status = 200, description = "Route classification", body = RouteTable))
)]
pub async fn get_route_table() -> Json<RouteTable> {
    Json(RouteTable::default())
}

// --- Page Shell ---

// Handlers below only run once the gate middleware has answered `Continue`.

pub async fn home_page() -> Json<PageView> {
    Json(PageView::new("/", Area::Public, "Bookera"))
}

pub async fn login_page() -> Json<PageView> {
    Json(PageView::new("/login", Area::Public, "Sign In"))
}

pub async fn register_page() -> Json<PageView> {
    Json(PageView::new("/register", Area::Public, "Create Account"))
}

pub async fn forgot_password_page() -> Json<PageView> {
    Json(PageView::new("/forgot-password", Area::Public, "Reset Password"))
}

pub async fn books_page() -> Json<PageView> {
    Json(PageView::new("/books", Area::Public, "Books"))
}

pub async fn book_detail_page(Path(id): Path<String>) -> Json<PageView> {
    Json(PageView::new(format!("/books/{id}"), Area::Public, "Book Detail"))
}

pub async fn terms_page() -> Json<PageView> {
    Json(PageView::new("/terms", Area::Public, "Terms of Service"))
}

pub async fn privacy_page() -> Json<PageView> {
    Json(PageView::new("/privacy", Area::Public, "Privacy Policy"))
}

/// forbidden_page
///
/// Explains a refused back-office navigation. The wording is picked from the caller's
/// role so an officer learns which area is theirs.
pub async fn forbidden_page(session: SessionCookies) -> Json<ForbiddenView> {
    Json(ForbiddenView {
        role: session.role_label(),
        message: forbidden_message(session.role.as_ref()).to_string(),
    })
}

pub fn forbidden_message(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::CatalogOfficer) => {
            "Catalog officers can only manage books and categories. Member, loan and fine records are handled by management officers."
        }
        Some(Role::ManagementOfficer) => {
            "Management officers can only manage members, loans, returns and fines. Books and categories are handled by catalog officers."
        }
        Some(_) => "Your role does not have access to this page.",
        None => "You need to sign in with an authorized account to view this page.",
    }
}

pub async fn setup_profile_page() -> Json<PageView> {
    Json(PageView::new(
        gate::SETUP_PROFILE_PATH,
        Area::Authenticated,
        "Set Up Profile",
    ))
}

pub async fn profile_page() -> Json<PageView> {
    Json(PageView::new("/profile", Area::Authenticated, "My Profile"))
}

pub async fn my_borrows_page() -> Json<PageView> {
    Json(PageView::new("/borrows", Area::Authenticated, "My Borrows"))
}

pub async fn my_loans_page() -> Json<PageView> {
    Json(PageView::new("/loans", Area::Authenticated, "My Loans"))
}

pub async fn my_notifications_page() -> Json<PageView> {
    Json(PageView::new(
        "/notifications",
        Area::Authenticated,
        "Notifications",
    ))
}

pub async fn admin_dashboard_page() -> Json<PageView> {
    Json(PageView::new(gate::ADMIN_ROOT, Area::Admin, "Dashboard"))
}

/// admin_section_page
///
/// Serves `/admin/{section}` and everything below it. Unknown sections are 404s.
/// The section is read from the raw request path, the same string the gate decided
/// on, so a percent-encoded slug never resolves to a restricted section.
pub async fn admin_section_page(
    OriginalUri(uri): OriginalUri,
) -> Result<Json<PageView>, StatusCode> {
    let section = admin_section_slug(uri.path()).ok_or(StatusCode::NOT_FOUND)?;

    let title = ADMIN_SECTIONS
        .iter()
        .find(|(slug, _)| *slug == section)
        .map(|(_, title)| *title)
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(PageView::new(uri.path(), Area::Admin, title)))
}

/// First path segment below `/admin/`, undecoded.
pub fn admin_section_slug(path: &str) -> Option<&str> {
    path.strip_prefix(gate::ADMIN_ROOT)?
        .strip_prefix('/')?
        .split('/')
        .next()
        .filter(|slug| !slug.is_empty())
}

//! Access Gate
//!
//! The request-time decision that maps a requested path plus the two session cookies
//! (credential and role label) onto "render it" or "send them somewhere else".
//! Everything here is pure: no cookie reading, no response building. The HTTP
//! boundary lives in `session` and in the gate middleware in `lib.rs`.

// --- Static Route Table ---

/// Path of the profile setup wizard. Requires a session but no particular role.
pub const SETUP_PROFILE_PATH: &str = "/setup-profile";

/// Public authentication pages. A signed-in user is bounced away from these.
pub const AUTH_PAGES: [&str; 3] = ["/login", "/register", "/forgot-password"];

/// Root of the back-office area. Visible to every non-`user` role.
pub const ADMIN_ROOT: &str = "/admin";

/// Admin sections owned by catalog officers. Management officers may not open them.
pub const CATALOG_RESTRICTED: [&str; 2] = ["/admin/categories", "/admin/books"];

/// Admin sections owned by management officers. Catalog officers may not open them.
pub const MANAGEMENT_RESTRICTED: [&str; 6] = [
    "/admin/users",
    "/admin/loans",
    "/admin/returns",
    "/admin/fines",
    "/admin/lost-books",
    "/admin/activity-logs",
];

const OFFICER_PREFIX: &str = "officer:";

// --- Domain Types ---

/// Role
///
/// The parsed form of the role cookie. `Officer` carries any `officer:<kind>` label
/// that is neither of the two known officer kinds; it only matters on the auth pages,
/// where every officer is sent to the back office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    CatalogOfficer,
    ManagementOfficer,
    Officer(String),
    User,
}

impl Role {
    /// parse
    ///
    /// Maps a raw role label to a `Role`. Any `officer:`-prefixed label, a bare `officer:`
    /// included, is an officer. Other labels outside the closed set (and the empty string)
    /// yield `None`, so the gate treats them exactly like a missing role.
    pub fn parse(label: &str) -> Option<Role> {
        match label {
            "admin" => Some(Role::Admin),
            "officer:catalog" => Some(Role::CatalogOfficer),
            "officer:management" => Some(Role::ManagementOfficer),
            "user" => Some(Role::User),
            other => other
                .strip_prefix(OFFICER_PREFIX)
                .map(|kind| Role::Officer(kind.to_string())),
        }
    }

    /// The cookie label this role was parsed from.
    pub fn label(&self) -> String {
        match self {
            Role::Admin => "admin".to_string(),
            Role::CatalogOfficer => "officer:catalog".to_string(),
            Role::ManagementOfficer => "officer:management".to_string(),
            Role::Officer(kind) => format!("{OFFICER_PREFIX}{kind}"),
            Role::User => "user".to_string(),
        }
    }

    fn is_back_office(&self) -> bool {
        !matches!(self, Role::User)
    }
}

/// Destination
///
/// The fixed set of places the gate can send a navigation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Home,
    Admin,
    Forbidden,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Home => "/",
            Destination::Admin => ADMIN_ROOT,
            Destination::Forbidden => "/forbidden",
        }
    }
}

/// Verdict
///
/// The outcome of one gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    RedirectTo(Destination),
}

impl Verdict {
    /// The redirect target, if this verdict is a redirect.
    pub fn location(self) -> Option<&'static str> {
        match self {
            Verdict::Continue => None,
            Verdict::RedirectTo(destination) => Some(destination.path()),
        }
    }
}

// --- Matching ---

/// matches_prefix
///
/// True when `path` is the restricted prefix itself or one of its sub-paths.
/// A bare `starts_with` would let `/admin/booksxyz` match `/admin/books`.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn is_catalog_restricted(path: &str) -> bool {
    CATALOG_RESTRICTED
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
}

pub fn is_management_restricted(path: &str) -> bool {
    MANAGEMENT_RESTRICTED
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
}

// --- Decision ---

/// decide
///
/// Evaluates the gate for one navigation. Rules are checked in order and the first
/// match wins:
///
/// 1. Profile setup needs a session.
/// 2. Signed-in callers on an auth page are sent to their home area.
/// 3. The admin area needs a session and a non-`user` role; officers are kept out of
///    the other officer kind's sections.
/// 4. Anything else passes.
///
/// `token` is presence-only; its contents are never inspected.
pub fn decide(path: &str, token: Option<&str>, role: Option<&Role>) -> Verdict {
    let has_token = token.is_some();

    if path == SETUP_PROFILE_PATH {
        return if has_token {
            Verdict::Continue
        } else {
            Verdict::RedirectTo(Destination::Login)
        };
    }

    if AUTH_PAGES.contains(&path) && has_token {
        return match role {
            Some(Role::User) => Verdict::RedirectTo(Destination::Home),
            Some(role) if role.is_back_office() => Verdict::RedirectTo(Destination::Admin),
            _ => Verdict::Continue,
        };
    }

    if path.starts_with(ADMIN_ROOT) {
        if !has_token {
            return Verdict::RedirectTo(Destination::Login);
        }
        return match role {
            None | Some(Role::User) => Verdict::RedirectTo(Destination::Login),
            Some(Role::Admin) => Verdict::Continue,
            Some(_) if path == ADMIN_ROOT => Verdict::Continue,
            Some(Role::CatalogOfficer) if is_management_restricted(path) => {
                Verdict::RedirectTo(Destination::Forbidden)
            }
            Some(Role::ManagementOfficer) if is_catalog_restricted(path) => {
                Verdict::RedirectTo(Destination::Forbidden)
            }
            Some(_) => Verdict::Continue,
        };
    }

    Verdict::Continue
}
